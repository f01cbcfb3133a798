#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    async fn create_user(app: &axum::Router) -> String {
        let (_, user) =
            send(app, "POST", "/api/users", Some(json!({ "username": "alice", "email": "a@x.com" }))).await;
        format!("/api/users/{}/profile", user["data"]["id"])
    }

    #[tokio::test]
    async fn test_profile_lifecycle() {
        let (app, _) = make_test_app().await;
        let uri = create_user(&app).await;

        let body = json!({ "bio": "Backend developer", "website": "https://alice.dev" });
        let (status, json) = send(&app, "POST", &uri, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["user"]["username"], "alice");
        assert_eq!(json["data"]["bio"], "Backend developer");

        let (status, json) = send(&app, "PUT", &uri, Some(json!({ "bio": "Rustacean" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["bio"], "Rustacean");
        assert_eq!(json["data"]["website"], "https://alice.dev");

        let (status, json) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["bio"], "Rustacean");

        let (status, json) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Profile deleted successfully");

        let (status, json) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Profile not found for this user");
    }

    #[tokio::test]
    async fn test_second_profile_is_rejected() {
        let (app, _) = make_test_app().await;
        let uri = create_user(&app).await;

        send(&app, "POST", &uri, Some(json!({ "bio": "first" }))).await;
        let (status, json) = send(&app, "POST", &uri, Some(json!({ "bio": "second" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Profile already exists for this user");
    }

    #[tokio::test]
    async fn test_profile_of_unknown_user() {
        let (app, _) = make_test_app().await;

        for method in ["GET", "DELETE"] {
            let (status, json) = send(&app, method, "/api/users/999/profile", None).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(json["message"], "User not found");
        }

        let (status, json) =
            send(&app, "POST", "/api/users/999/profile", Some(json!({ "bio": "x" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");
    }

    #[tokio::test]
    async fn test_profile_bio_length_is_limited() {
        let (app, _) = make_test_app().await;
        let uri = create_user(&app).await;

        let (status, json) = send(&app, "POST", &uri, Some(json!({ "bio": "x".repeat(2001) }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["message"].as_str().unwrap().contains("2000"));
    }
}
