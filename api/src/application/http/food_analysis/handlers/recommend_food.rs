use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_analysis::validators::RecommendFoodRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use mealmatch_core::domain::analysis::{
    entities::FoodRecommendation, ports::AnalysisService, value_objects::RecommendFoodInput,
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecommendFoodResponse {
    pub data: FoodRecommendation,
}

#[utoipa::path(
    post,
    path = "/recommend-food",
    tag = "food-analysis",
    summary = "Recommend a stored food item",
    description = "Re-scores an already analyzed food item against a user profile and generates a fresh recommendation",
    responses(
        (status = 200, body = RecommendFoodResponse)
    ),
    request_body = RecommendFoodRequest
)]
pub async fn recommend_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RecommendFoodRequest>,
) -> Result<Response<RecommendFoodResponse>, ApiError> {
    let result = state
        .service
        .recommend_food(RecommendFoodInput {
            user_id: payload.user_id,
            food_item_id: payload.food_item_id,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(RecommendFoodResponse { data: result }))
}
