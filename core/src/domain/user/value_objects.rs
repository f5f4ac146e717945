use serde::{Deserialize, Serialize};

/// Profile fields as supplied at enrollment. The `Serialize` impl is the
/// exact text sent to the embedding model, so absent fields are omitted
/// rather than serialized as nulls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrollUserInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caloric_target: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_target: Option<i32>,
    pub dietary_preferences: Vec<String>,
    pub complications: Vec<String>,
}
