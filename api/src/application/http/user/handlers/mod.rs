pub mod enroll_user;
pub mod get_user;
