pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;

use axum::{Router, middleware::from_fn, response::Html, routing::get};
use util::state::AppState;

use crate::middleware::log_request;
use crate::routes::routes;

/// The complete application: the welcome page, every `/api` route, and request logging.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .nest("/api", routes(app_state))
        .layer(from_fn(log_request))
}

async fn welcome() -> Html<&'static str> {
    Html("<h1>Welcome to the Course Blog API</h1>")
}
