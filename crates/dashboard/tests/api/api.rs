use crate::helpers::spawn_app;
use hyper::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn controls_endpoint_reports_registry() {
    let test_app = spawn_app().await;

    let (status, body) = test_app.get("/api/controls").await;

    assert!(status.is_success());
    let registry: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(registry["hours"]["min"], 8);
    assert_eq!(registry["hours"]["max"], 9);
    assert_eq!(registry["hours"]["marks"], json!([8, 9]));
    assert_eq!(
        registry["states"],
        json!([
            { "label": "All States", "value": "All" },
            { "label": "Selangor", "value": "Selangor" },
            { "label": "Penang", "value": "Penang" },
        ])
    );
}

#[tokio::test]
async fn state_change_updates_humidity_and_map() {
    let test_app = spawn_app().await;

    let (status, body) = test_app
        .post_json(
            "/api/update",
            json!({
                "control": "state-dropdown",
                "event": "value-changed",
                "values": {
                    "hour_range": { "lo": 8, "hi": 9 },
                    "state": "Selangor",
                    "hour": 8
                }
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    let updates = response["updates"].as_array().unwrap();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0]["output"], "humidity-graph");
    assert_eq!(
        updates[0]["figure"]["layout"]["title"]["text"],
        "Temperature vs Humidity in Selangor"
    );
    assert_eq!(updates[1]["output"], "geo-plot");
}

#[tokio::test]
async fn event_kind_defaults_to_value_changed() {
    let test_app = spawn_app().await;

    let (status, body) = test_app
        .post_json(
            "/api/update",
            json!({
                "control": "hour-slider",
                "values": {
                    "hour_range": { "lo": 8, "hi": 9 },
                    "state": "All",
                    "hour": 9
                }
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).unwrap();
    let updates = response["updates"].as_array().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0]["output"], "geo-plot");
}

#[tokio::test]
async fn unknown_control_is_rejected() {
    let test_app = spawn_app().await;

    let (status, _) = test_app
        .post_json(
            "/api/update",
            json!({
                "control": "rainfall-slider",
                "values": {
                    "hour_range": { "lo": 8, "hi": 9 },
                    "state": "All",
                    "hour": 9
                }
            }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn api_docs_are_served() {
    let test_app = spawn_app().await;

    let (status, _) = test_app.get("/docs").await;

    assert!(status.is_success());
}
