use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use mealmatch_core::domain::user::value_objects::EnrollUserInput;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct EnrollUserRequest {
    #[validate(range(min = 1, max = 150, message = "age must be between 1 and 150"))]
    pub age: Option<i32>,

    #[validate(range(min = 1, message = "height must be positive"))]
    pub height: Option<i32>,

    #[validate(range(min = 1, message = "weight must be positive"))]
    pub weight: Option<i32>,

    #[validate(range(min = 1, message = "caloric_target must be positive"))]
    pub caloric_target: Option<i32>,

    #[validate(range(min = 1, message = "protein_target must be positive"))]
    pub protein_target: Option<i32>,

    #[serde(default)]
    pub dietary_preferences: Vec<String>,

    #[serde(default)]
    pub complications: Vec<String>,
}

impl From<EnrollUserRequest> for EnrollUserInput {
    fn from(request: EnrollUserRequest) -> Self {
        EnrollUserInput {
            age: request.age,
            height: request.height,
            weight: request.weight,
            caloric_target: request.caloric_target,
            protein_target: request.protein_target,
            dietary_preferences: request.dietary_preferences,
            complications: request.complications,
        }
    }
}
