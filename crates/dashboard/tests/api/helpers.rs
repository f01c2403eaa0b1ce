use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use dashboard::{app, app_state_from_dataset, Dataset, PageText};
use hyper::{header, Method, StatusCode};
use tower::ServiceExt;

pub const OBSERVATIONS: &str = "\
city,state,hour,temperature,humidity,pressure
KL,Selangor,8,27.0,80.0,1010.0
Penang,Penang,8,26.0,75.0,1008.0
KL,Selangor,9,28.0,78.0,1009.0
";

pub const COORDINATES: &str = "\
city,latitude,longitude
KL,3.1,101.6
Penang,5.4,100.3
";

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app() -> TestApp {
    let dataset = Dataset::from_readers(OBSERVATIONS.as_bytes(), COORDINATES.as_bytes())
        .expect("Failed to load test dataset");
    spawn_app_with(dataset)
}

pub fn spawn_app_with(dataset: Dataset) -> TestApp {
    let page = PageText {
        title: "Test Weather Dashboard".to_string(),
        attribution: None,
    };
    let state = app_state_from_dataset(String::from("./ui"), dataset, page);

    TestApp { app: app(state) }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

/// Pull the figure JSON out of a rendered chart fragment
pub fn figure_of(html: &str) -> serde_json::Value {
    let start = html.find("data-figure=\"").expect("no figure in fragment") + 13;
    let end = start + html[start..].find('"').unwrap();
    let raw = html[start..end]
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    serde_json::from_str(&raw).unwrap()
}
