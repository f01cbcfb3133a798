mod enrollments_test;
mod health_test;
mod profile_test;
mod reviews_test;
mod users_test;
