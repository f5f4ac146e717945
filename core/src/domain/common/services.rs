use crate::domain::{
    analysis::ports::LlmClient, food::ports::FoodItemRepository, user::ports::UserRepository,
};

/// Aggregate the domain services hang off. One long-lived handle each to
/// the store and the model service, injected so tests can substitute doubles.
#[derive(Debug, Clone)]
pub struct Service<U, F, L>
where
    U: UserRepository,
    F: FoodItemRepository,
    L: LlmClient,
{
    pub user_repository: U,
    pub food_item_repository: F,
    pub llm_client: L,
}

impl<U, F, L> Service<U, F, L>
where
    U: UserRepository,
    F: FoodItemRepository,
    L: LlmClient,
{
    pub fn new(user_repository: U, food_item_repository: F, llm_client: L) -> Self {
        Self {
            user_repository,
            food_item_repository,
            llm_client,
        }
    }
}
