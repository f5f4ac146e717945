use std::future::Future;

use crate::domain::{
    analysis::{
        entities::{FoodAnalysis, FoodRecommendation},
        value_objects::{AnalyzeFoodInput, RecommendFoodInput},
    },
    common::entities::app_errors::CoreError,
};

/// Client trait for the generation/embedding model service. Which model id
/// serves each call is the adapter's concern, configured once at startup.
#[cfg_attr(test, mockall::automock)]
pub trait LlmClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Returns the raw embedding value exactly as the service produced it;
    /// the embedding codec decides whether it is usable.
    fn embed(
        &self,
        input: String,
    ) -> impl Future<Output = Result<serde_json::Value, CoreError>> + Send;
}

/// Service trait for the image-to-recommendation pipeline.
#[cfg_attr(test, mockall::automock)]
pub trait AnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<FoodAnalysis, CoreError>> + Send;

    fn recommend_food(
        &self,
        input: RecommendFoodInput,
    ) -> impl Future<Output = Result<FoodRecommendation, CoreError>> + Send;
}
