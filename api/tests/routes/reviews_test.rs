#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::{Router, http::StatusCode};
    use serde_json::{Value, json};

    struct TestData {
        course: Value,
        alice: Value,
        bob: Value,
    }

    async fn setup_test_data(app: &Router) -> TestData {
        let (_, course) = send(app, "POST", "/api/courses", Some(json!({ "title": "Rust 101" }))).await;
        let (_, alice) =
            send(app, "POST", "/api/users", Some(json!({ "username": "alice", "email": "a@x.com" }))).await;
        let (_, bob) =
            send(app, "POST", "/api/users", Some(json!({ "username": "bob", "email": "b@x.com" }))).await;
        TestData {
            course: course["data"].clone(),
            alice: alice["data"].clone(),
            bob: bob["data"].clone(),
        }
    }

    fn reviews_uri(data: &TestData) -> String {
        format!("/api/courses/{}/reviews", data.course["id"])
    }

    #[tokio::test]
    async fn test_add_review_success() {
        let (app, _) = make_test_app().await;
        let data = setup_test_data(&app).await;

        let body = json!({ "rating": 5, "comment": "Loved it", "userId": data.alice["id"] });
        let (status, json) = send(&app, "POST", &reviews_uri(&data), Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["rating"], 5);
        assert_eq!(json["data"]["course"], data.course["id"]);
        assert_eq!(json["data"]["user"]["username"], "alice");
    }

    /// Test Case: A user may review a course only once
    #[tokio::test]
    async fn test_duplicate_review_is_rejected() {
        let (app, _) = make_test_app().await;
        let data = setup_test_data(&app).await;
        let body = json!({ "rating": 4, "userId": data.alice["id"] });

        send(&app, "POST", &reviews_uri(&data), Some(body.clone())).await;
        let (status, json) = send(&app, "POST", &reviews_uri(&data), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "User has already reviewed this course");
    }

    #[tokio::test]
    async fn test_rating_out_of_range() {
        let (app, _) = make_test_app().await;
        let data = setup_test_data(&app).await;

        for rating in [0, 6] {
            let body = json!({ "rating": rating, "userId": data.alice["id"] });
            let (status, json) = send(&app, "POST", &reviews_uri(&data), Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(json["message"].as_str().unwrap().contains("Rating must be between 1 and 5"));
        }
    }

    #[tokio::test]
    async fn test_review_for_unknown_course_or_user() {
        let (app, _) = make_test_app().await;
        let data = setup_test_data(&app).await;

        let body = json!({ "rating": 3, "userId": data.alice["id"] });
        let (status, json) = send(&app, "POST", "/api/courses/999/reviews", Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Course not found");

        let body = json!({ "rating": 3, "userId": 999 });
        let (status, json) = send(&app, "POST", &reviews_uri(&data), Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");
    }

    #[tokio::test]
    async fn test_course_reviews_newest_first() {
        let (app, _) = make_test_app().await;
        let data = setup_test_data(&app).await;

        let (_, first) = send(
            &app,
            "POST",
            &reviews_uri(&data),
            Some(json!({ "rating": 4, "userId": data.alice["id"] })),
        )
        .await;
        let (_, second) = send(
            &app,
            "POST",
            &reviews_uri(&data),
            Some(json!({ "rating": 2, "userId": data.bob["id"] })),
        )
        .await;

        let (status, json) = send(&app, "GET", &reviews_uri(&data), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 2);
        assert_eq!(json["data"][0]["id"], second["data"]["id"]);
        assert_eq!(json["data"][1]["id"], first["data"]["id"]);
        assert_eq!(json["data"][0]["user"]["username"], "bob");
    }

    #[tokio::test]
    async fn test_list_all_reviews_expands_course() {
        let (app, _) = make_test_app().await;
        let data = setup_test_data(&app).await;
        send(
            &app,
            "POST",
            &reviews_uri(&data),
            Some(json!({ "rating": 5, "userId": data.alice["id"] })),
        )
        .await;

        let (status, json) = send(&app, "GET", "/api/reviews", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["course"]["title"], "Rust 101");
        assert_eq!(json["data"][0]["user"]["email"], "a@x.com");
    }

    #[tokio::test]
    async fn test_review_of_deleted_user_renders_null_user() {
        let (app, _) = make_test_app().await;
        let data = setup_test_data(&app).await;
        send(
            &app,
            "POST",
            &reviews_uri(&data),
            Some(json!({ "rating": 5, "userId": data.alice["id"] })),
        )
        .await;
        send(&app, "DELETE", &format!("/api/users/{}", data.alice["id"]), None).await;

        let (status, json) = send(&app, "GET", &reviews_uri(&data), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 1);
        assert!(json["data"][0]["user"].is_null());
    }

    #[tokio::test]
    async fn test_update_and_delete_review() {
        let (app, _) = make_test_app().await;
        let data = setup_test_data(&app).await;
        let (_, created) = send(
            &app,
            "POST",
            &reviews_uri(&data),
            Some(json!({ "rating": 3, "comment": "ok", "userId": data.alice["id"] })),
        )
        .await;
        let uri = format!("/api/reviews/{}", created["data"]["id"]);

        let (status, json) = send(&app, "PUT", &uri, Some(json!({ "rating": 4 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["rating"], 4);
        assert_eq!(json["data"]["comment"], "ok");
        assert_eq!(json["data"]["user"]["username"], "alice");

        let (status, json) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Review deleted successfully");

        let (status, json) = send(&app, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Review not found");

        let (status, _) = send(&app, "PUT", &uri, Some(json!({ "rating": 2 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
