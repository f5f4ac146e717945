use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealmatch_core::domain::user::{entities::UserProfile, ports::EnrollmentService};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetUserResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "user",
    summary = "Get an enrolled user",
    responses(
        (status = 200, body = GetUserResponse)
    ),
    params(
        ("user_id" = Uuid, Path, description = "User id"),
    ),
)]
pub async fn get_user(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetUserResponse>, ApiError> {
    let user = state
        .service
        .get_user(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserResponse { data: user }))
}
