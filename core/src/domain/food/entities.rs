use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, nutrition};

/// Canonical six-field nutrition summary in the raw textual form the model
/// produced. Values may still be ranges like "370-400".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NutritionRecord {
    pub calories: Option<String>,
    pub protein: Option<String>,
    pub total_fat: Option<String>,
    pub carbohydrates: Option<String>,
    pub sodium: Option<String>,
    pub cholesterol: Option<String>,
}

/// Range-normalized nutrition values, each a single representative number
/// rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResolvedNutrition {
    pub calories: String,
    pub protein: String,
    pub total_fat: String,
    pub carbohydrates: String,
    pub sodium: String,
    pub cholesterol: String,
}

impl NutritionRecord {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            calories: fields.get("Calories").cloned(),
            protein: fields.get("Protein").cloned(),
            total_fat: fields.get("Total Fat").cloned(),
            carbohydrates: fields.get("Carbohydrates").cloned(),
            sodium: fields.get("Sodium").cloned(),
            cholesterol: fields.get("Cholesterol").cloned(),
        }
    }

    /// Resolve ranges once, here. The recommendation prompt and the caller
    /// response both consume this view; the raw record keeps the original
    /// ranges for display and persistence.
    pub fn resolved(&self) -> ResolvedNutrition {
        let resolve = |field: &Option<String>| nutrition::resolve_range(field.as_deref().unwrap_or(""));

        ResolvedNutrition {
            calories: resolve(&self.calories),
            protein: resolve(&self.protein),
            total_fat: resolve(&self.total_fat),
            carbohydrates: resolve(&self.carbohydrates),
            sodium: resolve(&self.sodium),
            cholesterol: resolve(&self.cholesterol),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub nutrition: NutritionRecord,
    /// None marks an embedding the codec could not validate. The item is
    /// persisted anyway and scores 0 against every user.
    pub embedding: Option<Vec<f32>>,
    pub created_at: DateTime<Utc>,
}

impl FoodItem {
    pub fn new(name: String, nutrition: NutritionRecord, embedding: Option<Vec<f32>>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            nutrition,
            embedding,
            created_at: now,
        }
    }
}
