use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::UserProfile, value_objects::EnrollUserInput},
};

/// Repository trait for user persistence. Profile fields and embedding go
/// in as one insert; a user row never exists without its embedding.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(
        &self,
        user: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;
}

/// Service trait for the enrollment pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait EnrollmentService: Send + Sync {
    fn enroll_user(
        &self,
        input: EnrollUserInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}
