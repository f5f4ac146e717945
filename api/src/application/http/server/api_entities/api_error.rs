use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use utoipa::ToSchema;
use validator::Validate;

use mealmatch_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    UpstreamService(String),

    #[error("{0}")]
    Internal(String),
}

/// Machine-readable error kind plus human-readable detail.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub error: String,
    pub message: String,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::BadRequest(message),
            CoreError::UserNotFound => ApiError::NotFound("User not found".to_string()),
            CoreError::FoodItemNotFound => ApiError::NotFound("Food item not found".to_string()),
            CoreError::ExternalService(_) | CoreError::UpstreamModel { .. } => {
                ApiError::UpstreamService(error.to_string())
            }
            CoreError::Persistence(message) => ApiError::Internal(message),
            CoreError::InternalServerError => {
                ApiError::Internal("internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::UpstreamService(_) => (StatusCode::BAD_GATEWAY, "upstream_service_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ApiErrorBody {
            error: kind.to_string(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs [`Validate`] on the payload before the handler sees it.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        payload.validate().map_err(|errors| {
            let details = errors
                .field_errors()
                .into_iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |error| match &error.message {
                        Some(message) => format!("{field}: {message}"),
                        None => format!("{field}: invalid value"),
                    })
                })
                .collect::<Vec<String>>()
                .join(", ");
            ApiError::BadRequest(details)
        })?;

        Ok(ValidateJson(payload))
    }
}
