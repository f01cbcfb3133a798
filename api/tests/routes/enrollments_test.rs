#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, send};
    use axum::{Router, http::StatusCode};
    use db::models::Enrollment;
    use sea_orm::{EntityTrait, PaginatorTrait};
    use serde_json::{Value, json};

    async fn seed(app: &Router) -> (Value, Value) {
        let (_, course) = send(app, "POST", "/api/courses", Some(json!({ "title": "Rust 101" }))).await;
        let (_, user) =
            send(app, "POST", "/api/users", Some(json!({ "username": "alice", "email": "a@x.com" }))).await;
        (course["data"].clone(), user["data"].clone())
    }

    #[tokio::test]
    async fn test_enroll_user_success() {
        let (app, _) = make_test_app().await;
        let (course, user) = seed(&app).await;
        let uri = format!("/api/courses/{}/enroll", course["id"]);

        let (status, json) = send(&app, "POST", &uri, Some(json!({ "userId": user["id"] }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "User enrolled successfully");
        assert_eq!(json["data"]["students"][0]["username"], "alice");
        assert!(json["data"]["students"][0].get("courses").is_none());
    }

    /// Test Case: Double enrollment leaves exactly one enrollment row
    #[tokio::test]
    async fn test_double_enrollment_is_rejected() {
        let (app, app_state) = make_test_app().await;
        let (course, user) = seed(&app).await;
        let uri = format!("/api/courses/{}/enroll", course["id"]);

        send(&app, "POST", &uri, Some(json!({ "user_id": user["id"] }))).await;
        let (status, json) = send(&app, "POST", &uri, Some(json!({ "userId": user["id"] }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "User is already enrolled in this course");

        let rows = Enrollment::find().count(app_state.db()).await.unwrap();
        assert_eq!(rows, 1);

        let (_, students) =
            send(&app, "GET", &format!("/api/courses/{}/students", course["id"]), None).await;
        assert_eq!(students["count"], 1);
    }

    #[tokio::test]
    async fn test_enroll_unknown_user_or_course() {
        let (app, _) = make_test_app().await;
        let (course, user) = seed(&app).await;

        let uri = format!("/api/courses/{}/enroll", course["id"]);
        let (status, json) = send(&app, "POST", &uri, Some(json!({ "userId": 999 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");

        let (status, json) =
            send(&app, "POST", "/api/courses/999/enroll", Some(json!({ "userId": user["id"] }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Course not found");
    }

    #[tokio::test]
    async fn test_enroll_requires_user_id() {
        let (app, _) = make_test_app().await;
        let (course, _) = seed(&app).await;
        let uri = format!("/api/courses/{}/enroll", course["id"]);

        let (status, json) = send(&app, "POST", &uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_enroll_rejects_non_positive_user_id() {
        let (app, _) = make_test_app().await;
        let (course, _) = seed(&app).await;
        let uri = format!("/api/courses/{}/enroll", course["id"]);

        for user_id in [0, -3] {
            let (status, json) = send(&app, "POST", &uri, Some(json!({ "userId": user_id }))).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(
                json["message"],
                "Validation failed: User ID must be a positive integer"
            );
        }
    }

    #[tokio::test]
    async fn test_both_listings_reflect_enrollment() {
        let (app, _) = make_test_app().await;
        let (course, user) = seed(&app).await;
        send(
            &app,
            "POST",
            &format!("/api/courses/{}/enroll", course["id"]),
            Some(json!({ "userId": user["id"] })),
        )
        .await;

        let (status, students) =
            send(&app, "GET", &format!("/api/courses/{}/students", course["id"]), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(students["data"][0]["id"], user["id"]);

        for uri in [
            format!("/api/courses/users/{}/courses", user["id"]),
            format!("/api/users/{}/courses", user["id"]),
        ] {
            let (status, courses) = send(&app, "GET", &uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(courses["count"], 1);
            assert_eq!(courses["data"][0]["title"], "Rust 101");
        }

        let (_, fetched) = send(&app, "GET", &format!("/api/users/{}", user["id"]), None).await;
        assert_eq!(fetched["data"]["courses"][0]["id"], course["id"]);
    }

    #[tokio::test]
    async fn test_listings_for_unknown_ids() {
        let (app, _) = make_test_app().await;

        let (status, json) = send(&app, "GET", "/api/courses/999/students", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Course not found");

        let (status, json) = send(&app, "GET", "/api/courses/users/999/courses", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "User not found");
    }
}
