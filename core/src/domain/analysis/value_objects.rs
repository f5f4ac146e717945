use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub user_id: Uuid,
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct RecommendFoodInput {
    pub user_id: Uuid,
    pub food_item_id: Uuid,
}
