use thiserror::Error;

use crate::domain::analysis::entities::AnalysisStage;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("user not found")]
    UserNotFound,

    #[error("food item not found")]
    FoodItemNotFound,

    #[error("model service error: {0}")]
    ExternalService(String),

    #[error("no usable model output in the {stage} stage: {reason}")]
    UpstreamModel {
        stage: AnalysisStage,
        reason: String,
    },

    #[error("persistence failure: {0}")]
    Persistence(String),

    #[error("internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Attach the pipeline stage to a model-service failure so the caller
    /// can tell which transition broke. Other variants pass through.
    pub fn at_stage(self, stage: AnalysisStage) -> Self {
        match self {
            CoreError::ExternalService(reason) => CoreError::UpstreamModel { stage, reason },
            other => other,
        }
    }
}
