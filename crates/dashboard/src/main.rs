use anyhow::anyhow;
use axum::serve;
use dashboard::{app, build_app_state, get_config_info, get_log_level, setup_logger, PageText};
use futures::TryFutureExt;
use log::{error, info, warn};
use std::{net::SocketAddr, str::FromStr};
use tokio::{net::TcpListener, signal};
use weather_dashboard_core::path_exists;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = get_config_info();
    let log_level = get_log_level(&cli);

    setup_logger()
        .level(log_level)
        .level_for("dashboard", log_level)
        .level_for("http_response", log_level)
        .level_for("http_request", log_level)
        .apply()?;

    let observations = cli.observations();
    let coordinates = cli.coordinates();
    let static_dir = cli.static_dir();
    let host = cli.host();
    let port = cli.port();
    let page = PageText {
        title: cli.title(),
        attribution: cli.attribution(),
    };

    let socket_addr = SocketAddr::from_str(&format!("{}:{}", host, port))
        .map_err(|e| anyhow!("invalid address: {}", e))?;

    let listener = TcpListener::bind(socket_addr)
        .map_err(|e| anyhow!("error binding to socket: {}", e))
        .await?;

    info!("Weather Dashboard starting...");
    info!("  Listen: http://{}", socket_addr);
    info!("  Docs:   http://{}/docs", socket_addr);
    info!("  Observations: {}", observations);
    info!("  Coordinates: {}", coordinates);
    info!("  Static: {}", static_dir);
    if !path_exists(&static_dir) {
        warn!("static directory {} not found, UI assets will 404", static_dir);
    }
    if cli.debug {
        info!("  Debug mode enabled");
    }

    let app_state = build_app_state(static_dir, observations, coordinates, page)
        .await
        .map_err(|e| {
            error!("error building app: {}", e);
            e
        })?;

    let app = app(app_state);

    serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
