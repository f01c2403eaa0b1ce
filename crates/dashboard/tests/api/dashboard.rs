use crate::helpers::spawn_app;
use dashboard::Dataset;

#[tokio::test]
async fn dashboard_page_renders_every_section() {
    let test_app = spawn_app().await;

    let (status, html) = test_app.get("/").await;

    assert!(status.is_success());
    assert!(html.contains("Test Weather Dashboard"));
    assert!(html.contains(r#"id="data-preview""#));
    assert!(html.contains("Temperature Graph"));
    assert!(html.contains("Humidity Graph"));
    assert!(html.contains("Pressure Histogram"));
    assert!(html.contains("Geographical Plot"));
    assert!(html.contains(r#"id="summary-text""#));
}

#[tokio::test]
async fn dashboard_page_offers_every_state() {
    let test_app = spawn_app().await;

    let (_, html) = test_app.get("/").await;

    assert!(html.contains(r#"<option value="All" selected>All States</option>"#));
    assert!(html.contains(r#"<option value="Selangor">Selangor</option>"#));
    assert!(html.contains(r#"<option value="Penang">Penang</option>"#));
}

#[tokio::test]
async fn dashboard_page_renders_with_empty_table() {
    let test_app = crate::helpers::spawn_app_with(Dataset::new(vec![]));

    let (status, html) = test_app.get("/").await;

    assert!(status.is_success());
    assert!(html.contains("No observations loaded"));
    assert!(html.contains(r#"max="0""#));
}

#[tokio::test]
async fn data_preview_pages_are_clamped() {
    let test_app = spawn_app().await;

    let (status, html) = test_app.get("/fragments/data-preview?page=7").await;

    assert!(status.is_success());
    assert!(html.contains("Page 1 of 1 (3 rows)"));
    assert_eq!(html.matches("<td>KL</td>").count(), 2);
    assert!(html.contains("<td>5.4</td>"));
}

#[tokio::test]
async fn data_preview_defaults_to_first_page() {
    let test_app = spawn_app().await;

    let (status, html) = test_app.get("/fragments/data-preview").await;

    assert!(status.is_success());
    assert!(html.contains("Page 1 of 1"));
}
