use crate::helpers::{figure_of, spawn_app};

#[tokio::test]
async fn temperature_fragment_filters_by_hour_range() {
    let test_app = spawn_app().await;

    let (status, html) = test_app
        .get("/fragments/charts/temperature-graph?lo=8&hi=8")
        .await;

    assert!(status.is_success());
    assert!(html.contains(r#"id="temperature-graph""#));
    let figure = figure_of(&html);
    assert_eq!(
        figure["layout"]["title"]["text"],
        "Temperature by Hour in Cities of Malaysia (Hours: 8 to 8)"
    );
    let points: usize = figure["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|trace| trace["x"].as_array().unwrap().len())
        .sum();
    assert_eq!(points, 2);
}

#[tokio::test]
async fn missing_query_values_fall_back_to_initial_controls() {
    let test_app = spawn_app().await;

    let (status, html) = test_app.get("/fragments/charts/temperature-graph").await;

    assert!(status.is_success());
    let figure = figure_of(&html);
    assert_eq!(
        figure["layout"]["title"]["text"],
        "Temperature by Hour in Cities of Malaysia (Hours: 8 to 9)"
    );
}

#[tokio::test]
async fn humidity_fragment_filters_by_state() {
    let test_app = spawn_app().await;

    let (status, html) = test_app
        .get("/fragments/charts/humidity-graph?state=Penang")
        .await;

    assert!(status.is_success());
    let figure = figure_of(&html);
    assert_eq!(
        figure["layout"]["title"]["text"],
        "Temperature vs Humidity in Penang"
    );
    assert_eq!(figure["data"].as_array().unwrap().len(), 1);
    assert_eq!(figure["data"][0]["name"], "Penang");
}

#[tokio::test]
async fn geo_fragment_uses_state_and_hour() {
    let test_app = spawn_app().await;

    let (status, html) = test_app
        .get("/fragments/charts/geo-plot?state=All&hour=9")
        .await;

    assert!(status.is_success());
    let figure = figure_of(&html);
    assert_eq!(
        figure["layout"]["title"]["text"],
        "Geographical Distribution of Temperature at Hour 9 in All States"
    );
    assert_eq!(figure["data"][0]["type"], "scattermap");
    assert_eq!(figure["data"][0]["lat"], serde_json::json!([3.1]));
}

#[tokio::test]
async fn unknown_chart_is_rejected() {
    let test_app = spawn_app().await;

    let (status, _) = test_app.get("/fragments/charts/rainfall-graph").await;

    assert!(status.is_client_error());
}
