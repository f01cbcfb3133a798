pub mod course;
pub mod enrollment;
pub mod profile;
pub mod review;
pub mod user;

pub use course::Entity as Course;
pub use enrollment::Entity as Enrollment;
pub use profile::Entity as Profile;
pub use review::Entity as Review;
pub use user::Entity as User;
