use api::app;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use db::test_utils::setup_test_db;
use serde_json::Value;
use tower::ServiceExt;
use util::state::AppState;

/// Builds the full application on its own fresh in-memory database.
pub async fn make_test_app() -> (Router, AppState) {
    let app_state = AppState::new(setup_test_db().await);
    (app(app_state.clone()), app_state)
}

/// Sends one request through the router and decodes the JSON envelope.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
