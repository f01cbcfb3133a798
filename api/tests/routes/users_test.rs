#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    /// Test Case: Creating the same user twice
    #[tokio::test]
    async fn test_create_user_twice_is_rejected() {
        let (app, _) = make_test_app().await;
        let body = json!({ "username": "alice", "email": "a@x.com" });

        let (status, json) = send(&app, "POST", "/api/users", Some(body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["username"], "alice");
        assert_eq!(json["data"]["courses"], json!([]));

        let (status, json) = send(&app, "POST", "/api/users", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(
            json["message"],
            "User with this email or username already exists"
        );
    }

    #[tokio::test]
    async fn test_create_user_validation_failure() {
        let (app, _) = make_test_app().await;
        let body = json!({ "username": "", "email": "not-an-email" });

        let (status, json) = send(&app, "POST", "/api/users", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("Please provide a valid email"));
        assert!(message.contains("Username is required"));
    }

    #[tokio::test]
    async fn test_malformed_json_uses_error_envelope() {
        let (app, _) = make_test_app().await;
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/users")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let response = tower::ServiceExt::oneshot(app, req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn test_list_and_get_users() {
        let (app, _) = make_test_app().await;
        send(&app, "POST", "/api/users", Some(json!({ "username": "alice", "email": "a@x.com" }))).await;
        let (_, bob) =
            send(&app, "POST", "/api/users", Some(json!({ "username": "bob", "email": "b@x.com" }))).await;

        let (status, json) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 2);
        assert_eq!(json["data"][0]["username"], "alice");

        let uri = format!("/api/users/{}", bob["data"]["id"]);
        let (status, json) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["email"], "b@x.com");
    }

    #[tokio::test]
    async fn test_get_user_not_found_and_bad_id() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(&app, "GET", "/api/users/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");

        let (status, json) = send(&app, "GET", "/api/users/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_update_user() {
        let (app, _) = make_test_app().await;
        let (_, alice) =
            send(&app, "POST", "/api/users", Some(json!({ "username": "alice", "email": "a@x.com" }))).await;
        send(&app, "POST", "/api/users", Some(json!({ "username": "bob", "email": "b@x.com" }))).await;
        let uri = format!("/api/users/{}", alice["data"]["id"]);

        let (status, json) = send(&app, "PUT", &uri, Some(json!({ "email": "b@x.com" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Email or username already exists");

        let (status, json) = send(&app, "PUT", &uri, Some(json!({ "username": "alicia" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["username"], "alicia");
        assert_eq!(json["data"]["email"], "a@x.com");

        let (status, json) = send(&app, "PUT", "/api/users/999", Some(json!({ "username": "x" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");
    }

    #[tokio::test]
    async fn test_delete_user() {
        let (app, _) = make_test_app().await;
        let (_, alice) =
            send(&app, "POST", "/api/users", Some(json!({ "username": "alice", "email": "a@x.com" }))).await;
        let uri = format!("/api/users/{}", alice["data"]["id"]);

        let (status, json) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "User deleted successfully");

        let (status, json) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");
    }
}
