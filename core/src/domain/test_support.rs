//! Hand-rolled port doubles shared by the service tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use uuid::Uuid;

use crate::domain::{
    analysis::ports::LlmClient,
    common::entities::app_errors::CoreError,
    food::{entities::FoodItem, ports::FoodItemRepository},
    user::{entities::UserProfile, ports::UserRepository},
};

/// Scripted model client. Text responses are consumed in call order; an
/// exhausted queue yields empty text, which the pipeline treats as "no
/// usable output".
#[derive(Clone, Default)]
pub struct StubLlm {
    pub caption: Option<String>,
    pub text_responses: Arc<Mutex<VecDeque<Result<String, CoreError>>>>,
    pub embed_value: Value,
    pub embed_inputs: Arc<Mutex<Vec<String>>>,
    pub text_prompts: Arc<Mutex<Vec<String>>>,
}

impl StubLlm {
    pub fn push_text_response(&self, response: Result<String, CoreError>) {
        self.text_responses.lock().unwrap().push_back(response);
    }
}

impl LlmClient for StubLlm {
    async fn generate_with_image(
        &self,
        _prompt: String,
        _image_data: Vec<u8>,
    ) -> Result<String, CoreError> {
        match &self.caption {
            Some(caption) => Ok(caption.clone()),
            None => Err(CoreError::ExternalService(
                "vision model unavailable".to_string(),
            )),
        }
    }

    async fn generate_with_text(&self, prompt: String) -> Result<String, CoreError> {
        self.text_prompts.lock().unwrap().push(prompt);
        self.text_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }

    async fn embed(&self, input: String) -> Result<Value, CoreError> {
        self.embed_inputs.lock().unwrap().push(input);
        Ok(self.embed_value.clone())
    }
}

#[derive(Clone, Default)]
pub struct StubUsers {
    pub user: Option<UserProfile>,
    pub created: Arc<Mutex<Vec<UserProfile>>>,
    pub fail_create: bool,
}

impl UserRepository for StubUsers {
    async fn create_user(&self, user: UserProfile) -> Result<UserProfile, CoreError> {
        if self.fail_create {
            return Err(CoreError::Persistence("insert failed".to_string()));
        }
        self.created.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, _user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        Ok(self.user.clone())
    }
}

#[derive(Clone, Default)]
pub struct StubFoods {
    pub item: Option<FoodItem>,
    pub created: Arc<Mutex<Vec<FoodItem>>>,
    pub fail_create: bool,
}

impl FoodItemRepository for StubFoods {
    async fn create_food_item(&self, item: FoodItem) -> Result<FoodItem, CoreError> {
        if self.fail_create {
            return Err(CoreError::Persistence("insert failed".to_string()));
        }
        self.created.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn get_by_id(&self, _item_id: Uuid) -> Result<Option<FoodItem>, CoreError> {
        Ok(self.item.clone())
    }
}

/// A minimal enrolled user for pipeline tests.
pub fn sample_user(embedding: Vec<f32>) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        age: Some(30),
        height: Some(175),
        weight: Some(70),
        caloric_target: Some(2000),
        protein_target: Some(80),
        dietary_preferences: vec!["vegan".to_string()],
        complications: vec![],
        embedding,
        created_at: chrono::Utc::now(),
    }
}
