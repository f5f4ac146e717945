use super::handlers::{
    analyze_food::{__path_analyze_food, analyze_food},
    recommend_food::{__path_recommend_food, recommend_food},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_food, recommend_food))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/analyze-food", state.args.server.root_path),
            post(analyze_food),
        )
        .route(
            &format!("{}/api/recommend-food", state.args.server.root_path),
            post(recommend_food),
        )
        // Image uploads run past axum's 2MB default.
        .layer(DefaultBodyLimit::max(12 * 1024 * 1024))
}
