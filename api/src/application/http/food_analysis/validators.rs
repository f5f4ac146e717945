use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RecommendFoodRequest {
    pub user_id: Uuid,
    pub food_item_id: Uuid,
}
