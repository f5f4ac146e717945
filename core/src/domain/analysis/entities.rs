use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::food::entities::{NutritionRecord, ResolvedNutrition};

/// Stages of the analysis pipeline, in execution order. Every stage is a
/// potential failure point; failures carry the stage they broke in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    Received,
    Captioned,
    NutritionExtracted,
    Embedded,
    Persisted,
    Scored,
    Recommended,
    Complete,
}

impl AnalysisStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStage::Received => "received",
            AnalysisStage::Captioned => "captioned",
            AnalysisStage::NutritionExtracted => "nutrition_extracted",
            AnalysisStage::Embedded => "embedded",
            AnalysisStage::Persisted => "persisted",
            AnalysisStage::Scored => "scored",
            AnalysisStage::Recommended => "recommended",
            AnalysisStage::Complete => "complete",
        }
    }
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a completed analysis run hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodAnalysis {
    pub food_item_id: Uuid,
    pub food_name: String,
    pub caption: String,
    pub nutrition: NutritionRecord,
    pub resolved_nutrition: ResolvedNutrition,
    pub similarity_score: f64,
    pub recommendation: String,
}

/// Result of scoring and recommending an already-persisted food item for
/// an enrolled user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodRecommendation {
    pub user_id: Uuid,
    pub food_item_id: Uuid,
    pub food_name: String,
    pub nutrition: NutritionRecord,
    pub similarity_score: f64,
    pub recommendation: String,
}
