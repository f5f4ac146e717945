use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, QueryResult, Statement};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food::{
            entities::{FoodItem, NutritionRecord},
            ports::FoodItemRepository,
        },
    },
    infrastructure::db::vector,
};

/// Food item persistence against Postgres. One insert carries name,
/// embedding and nutrition together; the embedding column is nullable and
/// NULL is the invalid-embedding marker.
#[derive(Debug, Clone)]
pub struct PostgresFoodItemRepository {
    pub db: DatabaseConnection,
}

impl PostgresFoodItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &QueryResult) -> Result<FoodItem, sea_orm::DbErr> {
        let nutrition_json: serde_json::Value = row.try_get("", "nutrition_info")?;
        let nutrition: NutritionRecord = serde_json::from_value(nutrition_json).unwrap_or_default();

        Ok(FoodItem {
            id: row.try_get("", "id")?,
            name: row.try_get("", "name")?,
            nutrition,
            embedding: vector::parse(row.try_get("", "embedding")?),
            created_at: row.try_get("", "created_at")?,
        })
    }
}

impl FoodItemRepository for PostgresFoodItemRepository {
    async fn create_food_item(&self, item: FoodItem) -> Result<FoodItem, CoreError> {
        let nutrition_json = serde_json::to_value(&item.nutrition).map_err(|e| {
            error!("failed to serialize nutrition record: {}", e);
            CoreError::InternalServerError
        })?;

        let statement = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            INSERT INTO food_items (id, name, embedding, nutrition_info, created_at)
            VALUES ($1, $2, $3::vector, $4, $5)
            "#,
            [
                item.id.into(),
                item.name.clone().into(),
                item.embedding.as_deref().map(vector::render).into(),
                nutrition_json.into(),
                item.created_at.into(),
            ],
        );

        self.db.execute(statement).await.map_err(|e| {
            error!("failed to create food item: {}", e);
            CoreError::Persistence(e.to_string())
        })?;

        Ok(item)
    }

    async fn get_by_id(&self, item_id: Uuid) -> Result<Option<FoodItem>, CoreError> {
        let statement = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT id, name, embedding::text AS embedding, nutrition_info, created_at
            FROM food_items
            WHERE id = $1
            "#,
            [item_id.into()],
        );

        let row = self.db.query_one(statement).await.map_err(|e| {
            error!("failed to fetch food item: {}", e);
            CoreError::Persistence(e.to_string())
        })?;

        row.as_ref()
            .map(Self::from_row)
            .transpose()
            .map_err(|e| {
                error!("failed to map food item row: {}", e);
                CoreError::InternalServerError
            })
    }
}
