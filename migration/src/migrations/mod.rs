pub mod m202510140001_create_users;
pub mod m202510140002_create_profiles;
pub mod m202510140003_create_courses;
pub mod m202510140004_create_enrollments;
pub mod m202510140005_create_reviews;
