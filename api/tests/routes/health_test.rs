#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = make_test_app().await;
        let (status, json) = send(&app, "GET", "/api/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
    }

    #[tokio::test]
    async fn test_welcome_page_is_html() {
        let (app, _) = make_test_app().await;
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/html"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("<h1>"));
    }
}
