use clap::Parser;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::LevelFilter;
use std::env;
use time::{format_description::well_known::Iso8601, OffsetDateTime};
use weather_dashboard_core::{
    find_config_file, load_config, ConfigSource, DEFAULT_DASHBOARD_HOST, DEFAULT_DASHBOARD_PORT,
};

pub const DEFAULT_TITLE: &str = "Weather Dashboard of Places in Malaysia";

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "Weather Dashboard - interactive charts of hourly city observations"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $WEATHER_DASHBOARD_CONFIG, ./dashboard.toml,
    /// $XDG_CONFIG_HOME/weather-dashboard/dashboard.toml, /etc/weather-dashboard/dashboard.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "WEATHER_DASHBOARD_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, env = "WEATHER_DASHBOARD_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WEATHER_DASHBOARD_PORT")]
    pub port: Option<String>,

    /// CSV file of hourly observations (city,state,hour,temperature,humidity,pressure)
    #[arg(short, long, env = "WEATHER_DASHBOARD_OBSERVATIONS")]
    pub observations: Option<String>,

    /// CSV file of city coordinates (city,latitude,longitude)
    #[arg(long, env = "WEATHER_DASHBOARD_COORDINATES")]
    pub coordinates: Option<String>,

    /// Directory containing UI static files
    #[arg(short, long, env = "WEATHER_DASHBOARD_UI_DIR")]
    pub ui_dir: Option<String>,

    /// Page heading
    #[arg(short, long, env = "WEATHER_DASHBOARD_TITLE")]
    pub title: Option<String>,

    /// Attribution line shown under the summary
    #[arg(short, long, env = "WEATHER_DASHBOARD_ATTRIBUTION")]
    pub attribution: Option<String>,

    /// Debug mode: defaults the log level to debug
    #[arg(short, long, env = "WEATHER_DASHBOARD_DEBUG")]
    #[serde(default)]
    pub debug: bool,
}

impl Cli {
    pub fn host(&self) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| DEFAULT_DASHBOARD_HOST.to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_DASHBOARD_PORT.to_string())
    }

    pub fn observations(&self) -> String {
        self.observations
            .clone()
            .unwrap_or_else(|| "./data/observations.csv".to_string())
    }

    pub fn coordinates(&self) -> String {
        self.coordinates
            .clone()
            .unwrap_or_else(|| "./data/coordinates.csv".to_string())
    }

    pub fn static_dir(&self) -> String {
        self.ui_dir.clone().unwrap_or_else(|| "./ui".to_string())
    }

    pub fn title(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub fn attribution(&self) -> Option<String> {
        self.attribution.clone()
    }

    /// CLI args override file config (env vars are handled by clap)
    pub fn merge(self, file_config: Cli) -> Cli {
        Cli {
            config: self.config,
            level: self.level.or(file_config.level),
            host: self.host.or(file_config.host),
            port: self.port.or(file_config.port),
            observations: self.observations.or(file_config.observations),
            coordinates: self.coordinates.or(file_config.coordinates),
            ui_dir: self.ui_dir.or(file_config.ui_dir),
            title: self.title.or(file_config.title),
            attribution: self.attribution.or(file_config.attribution),
            debug: self.debug || file_config.debug,
        }
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("WEATHER_DASHBOARD_CONFIG", "dashboard.toml")
    };

    if let Some(path) = source.path() {
        log::info!("Loading config from: {}", path.display());
    }

    let file_config: Cli = load_config(&source).unwrap_or_default();

    cli_args.merge(file_config)
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let fallback = if cli.debug { "debug" } else { "info" };
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| fallback.to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}: {}",
                OffsetDateTime::now_utc()
                    .format(&Iso8601::DEFAULT)
                    .unwrap_or_default(),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}
