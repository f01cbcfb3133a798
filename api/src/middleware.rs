use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::time::Instant;
use tracing::info;

/// Logs method, path, client IP, response status and latency for each HTTP request.
/// CORS preflight `OPTIONS` requests are passed through without a log line.
///
/// ### Usage:
/// ```ignore
/// use axum::Router;
/// use axum::middleware::from_fn;
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
///
/// The client IP is only known when the app is served with
/// `into_make_service_with_connect_info::<SocketAddr>()`; otherwise `unknown` is logged.
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());

    let started = Instant::now();
    let response = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        ip = %ip,
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );

    response
}
