use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    user::validators::EnrollUserRequest,
};
use mealmatch_core::domain::user::ports::EnrollmentService;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrollUserResponse {
    pub message: String,
    pub user_id: Uuid,
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "user",
    summary = "Enroll a user",
    description = "Stores the profile and its embedding for later similarity scoring",
    responses(
        (status = 201, body = EnrollUserResponse)
    ),
    request_body = EnrollUserRequest
)]
pub async fn enroll_user(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<EnrollUserRequest>,
) -> Result<Response<EnrollUserResponse>, ApiError> {
    let user = state
        .service
        .enroll_user(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(EnrollUserResponse {
        message: "User information stored successfully".to_string(),
        user_id: user.id,
    }))
}
