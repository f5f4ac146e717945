use std::future::Future;
use uuid::Uuid;

use crate::domain::{common::entities::app_errors::CoreError, food::entities::FoodItem};

/// Repository trait for food item persistence. An insert writes name,
/// embedding and nutrition as one statement; an item never exists with only
/// part of that set.
#[cfg_attr(test, mockall::automock)]
pub trait FoodItemRepository: Send + Sync {
    fn create_food_item(
        &self,
        item: FoodItem,
    ) -> impl Future<Output = Result<FoodItem, CoreError>> + Send;

    fn get_by_id(
        &self,
        item_id: Uuid,
    ) -> impl Future<Output = Result<Option<FoodItem>, CoreError>> + Send;
}
