use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, user::value_objects::EnrollUserInput};

/// An enrolled user's nutritional profile. Immutable after enrollment; the
/// embedding is computed once at creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub caloric_target: Option<i32>,
    pub protein_target: Option<i32>,
    pub dietary_preferences: Vec<String>,
    pub complications: Vec<String>,
    #[serde(skip_serializing, default)]
    #[schema(ignore)]
    pub embedding: Vec<f32>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(input: EnrollUserInput, embedding: Vec<f32>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            age: input.age,
            height: input.height,
            weight: input.weight,
            caloric_target: input.caloric_target,
            protein_target: input.protein_target,
            dietary_preferences: input.dietary_preferences,
            complications: input.complications,
            embedding,
            created_at: now,
        }
    }
}
