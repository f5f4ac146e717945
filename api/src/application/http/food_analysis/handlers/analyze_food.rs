use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use mealmatch_core::domain::analysis::{
    entities::FoodAnalysis, ports::AnalysisService, value_objects::AnalyzeFoodInput,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodResponse {
    pub data: FoodAnalysis,
}

#[utoipa::path(
    post,
    path = "/analyze-food",
    tag = "food-analysis",
    summary = "Analyze a food photo",
    description = "Captions the image, extracts nutrition, stores the food item and returns a personalized recommendation",
    responses(
        (status = 200, body = AnalyzeFoodResponse)
    ),
)]
pub async fn analyze_food(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let mut user_id: Option<Uuid> = None;
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "user_id" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read user_id: {}", e)))?;
                user_id = Some(
                    Uuid::parse_str(&value)
                        .map_err(|_| ApiError::BadRequest("Invalid user_id format".to_string()))?,
                );
            }
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image_data = Some(data.to_vec());
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| ApiError::BadRequest("Missing user_id field".to_string()))?;

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let result = state
        .service
        .analyze_food(AnalyzeFoodInput {
            user_id,
            image_data,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodResponse { data: result }))
}
