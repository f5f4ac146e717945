use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MealMatch API"
    ),
    nest(
        (path = "/api", api = UserApiDoc),
        (path = "/api", api = FoodAnalysisApiDoc),
    )
)]
pub struct ApiDoc;
