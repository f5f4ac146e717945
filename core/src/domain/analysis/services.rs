use tracing::{debug, warn};

use crate::domain::{
    analysis::{
        entities::{AnalysisStage, FoodAnalysis, FoodRecommendation},
        ports::{AnalysisService, LlmClient},
        value_objects::{AnalyzeFoodInput, RecommendFoodInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    embedding::{codec, similarity},
    food::{
        entities::{FoodItem, NutritionRecord, ResolvedNutrition},
        ports::FoodItemRepository,
    },
    nutrition::{self, FOOD_ITEM_KEY},
    prompt,
    user::{entities::UserProfile, ports::UserRepository},
};

impl<U, F, L> AnalysisService for Service<U, F, L>
where
    U: UserRepository,
    F: FoodItemRepository,
    L: LlmClient,
{
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<FoodAnalysis, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::InvalidInput("no image data provided".to_string()));
        }

        // The user is loaded before any model call, so a dangling id fails
        // fast and the embedding snapshot read here is the one scored even
        // if the row disappears mid-run.
        let user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        debug!(stage = %AnalysisStage::Received, user_id = %user.id, "starting food analysis");

        // Received -> Captioned
        let caption = self
            .llm_client
            .generate_with_image(prompt::caption_prompt().to_string(), input.image_data)
            .await
            .map_err(|e| e.at_stage(AnalysisStage::Captioned))?;
        if caption.trim().is_empty() {
            return Err(CoreError::UpstreamModel {
                stage: AnalysisStage::Captioned,
                reason: "vision model returned no caption".to_string(),
            });
        }
        debug!(stage = %AnalysisStage::Captioned, "image captioned");

        // Captioned -> NutritionExtracted
        let nutrition_text = self
            .llm_client
            .generate_with_text(prompt::nutrition_prompt(&caption))
            .await
            .map_err(|e| e.at_stage(AnalysisStage::NutritionExtracted))?;
        let fields = nutrition::extract(&nutrition_text);
        let food_name = fields
            .get(FOOD_ITEM_KEY)
            .cloned()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CoreError::UpstreamModel {
                stage: AnalysisStage::NutritionExtracted,
                reason: "nutrition text did not identify the dish".to_string(),
            })?;
        let nutrition_record = NutritionRecord::from_fields(&fields);
        let resolved = nutrition_record.resolved();
        debug!(stage = %AnalysisStage::NutritionExtracted, food_name, "nutrition extracted");

        // NutritionExtracted -> Embedded. An embedding the codec cannot
        // validate is absorbed: the item is stored with a null marker and
        // scores 0 instead of aborting the run.
        let embedding_input =
            serde_json::to_string(&fields).map_err(|_| CoreError::InternalServerError)?;
        let raw_embedding = self
            .llm_client
            .embed(embedding_input)
            .await
            .map_err(|e| e.at_stage(AnalysisStage::Embedded))?;
        let embedding = codec::to_vector(&raw_embedding);
        if embedding.is_none() {
            warn!(stage = %AnalysisStage::Embedded, "food embedding failed validation, storing null marker");
        }

        // Embedded -> Persisted. One insert carries name, embedding and
        // nutrition; once written, the item is never rolled back by a
        // later-stage failure.
        let item = FoodItem::new(food_name, nutrition_record, embedding);
        let item = self.food_item_repository.create_food_item(item).await?;
        debug!(stage = %AnalysisStage::Persisted, food_item_id = %item.id, "food item persisted");

        // Persisted -> Scored. Never fails; worst case is 0.
        let similarity_score = similarity::score_stored(&user.embedding, item.embedding.as_deref());
        debug!(stage = %AnalysisStage::Scored, similarity_score, "similarity computed");

        // Scored -> Recommended
        let recommendation = self
            .generate_recommendation(&user, &item.name, &resolved, similarity_score)
            .await?;
        debug!(stage = %AnalysisStage::Recommended, "recommendation generated");

        debug!(stage = %AnalysisStage::Complete, food_item_id = %item.id, "analysis complete");

        Ok(FoodAnalysis {
            food_item_id: item.id,
            food_name: item.name,
            caption,
            nutrition: item.nutrition,
            resolved_nutrition: resolved,
            similarity_score,
            recommendation,
        })
    }

    async fn recommend_food(
        &self,
        input: RecommendFoodInput,
    ) -> Result<FoodRecommendation, CoreError> {
        let user = self
            .user_repository
            .get_by_id(input.user_id)
            .await?
            .ok_or(CoreError::UserNotFound)?;

        let item = self
            .food_item_repository
            .get_by_id(input.food_item_id)
            .await?
            .ok_or(CoreError::FoodItemNotFound)?;

        let similarity_score = similarity::score_stored(&user.embedding, item.embedding.as_deref());
        let resolved = item.nutrition.resolved();

        let recommendation = self
            .generate_recommendation(&user, &item.name, &resolved, similarity_score)
            .await?;

        Ok(FoodRecommendation {
            user_id: user.id,
            food_item_id: item.id,
            food_name: item.name,
            nutrition: item.nutrition,
            similarity_score,
            recommendation,
        })
    }
}

impl<U, F, L> Service<U, F, L>
where
    U: UserRepository,
    F: FoodItemRepository,
    L: LlmClient,
{
    async fn generate_recommendation(
        &self,
        user: &UserProfile,
        food_name: &str,
        nutrition: &ResolvedNutrition,
        similarity_score: f64,
    ) -> Result<String, CoreError> {
        let recommendation_prompt =
            prompt::recommendation_prompt(user, food_name, nutrition, similarity_score);

        let recommendation = self
            .llm_client
            .generate_with_text(recommendation_prompt)
            .await
            .map_err(|e| e.at_stage(AnalysisStage::Recommended))?;

        if recommendation.trim().is_empty() {
            return Err(CoreError::UpstreamModel {
                stage: AnalysisStage::Recommended,
                reason: "text model returned no recommendation".to_string(),
            });
        }

        Ok(recommendation)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::domain::test_support::{StubFoods, StubLlm, StubUsers, sample_user};

    const NUTRITION_TEXT: &str = "Food Item: Cheesecake\n\
                                  Calories: 370-400\n\
                                  Total Fat: 26-30g\n\
                                  Cholesterol: 125mg\n\
                                  Sodium: 300-350mg\n\
                                  Carbohydrates: 30-35g (Sugars: 24-28g)\n\
                                  Protein: 7-8g";

    fn scripted_llm(embed_value: serde_json::Value) -> StubLlm {
        let llm = StubLlm {
            caption: Some("a slice of cheesecake on a plate".to_string()),
            embed_value,
            ..Default::default()
        };
        llm.push_text_response(Ok(NUTRITION_TEXT.to_string()));
        llm.push_text_response(Ok("You should probably skip this one.".to_string()));
        llm
    }

    fn analyze_input(user_id: Uuid) -> AnalyzeFoodInput {
        AnalyzeFoodInput {
            user_id,
            image_data: vec![0xFF, 0xD8, 0xFF],
        }
    }

    #[tokio::test]
    async fn full_pipeline_produces_a_complete_analysis() {
        let user = sample_user(vec![1.0, 0.0, 0.0]);
        let user_id = user.id;
        let llm = scripted_llm(json!([1.0, 0.0, 0.0]));
        let users = StubUsers {
            user: Some(user),
            ..Default::default()
        };
        let foods = StubFoods::default();
        let created = foods.created.clone();

        let service = Service::new(users, foods, llm);
        let analysis = service.analyze_food(analyze_input(user_id)).await.unwrap();

        assert_eq!(analysis.food_name, "Cheesecake");
        assert_eq!(analysis.nutrition.calories.as_deref(), Some("370-400"));
        assert_eq!(analysis.resolved_nutrition.calories, "385");
        assert!((analysis.similarity_score - 1.0).abs() < 1e-6);
        assert_eq!(analysis.recommendation, "You should probably skip this one.");

        let created = created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].embedding.as_deref(), Some(&[1.0, 0.0, 0.0][..]));
    }

    #[tokio::test]
    async fn invalid_food_embedding_is_absorbed_not_fatal() {
        let user = sample_user(vec![1.0, 0.0, 0.0]);
        let user_id = user.id;
        let llm = scripted_llm(json!("garbled model output"));
        let users = StubUsers {
            user: Some(user),
            ..Default::default()
        };
        let foods = StubFoods::default();
        let created = foods.created.clone();

        let service = Service::new(users, foods, llm);
        let analysis = service.analyze_food(analyze_input(user_id)).await.unwrap();

        // The item is persisted with the null-embedding marker, the score
        // degrades to 0 and the recommendation is still produced.
        assert_eq!(created.lock().unwrap()[0].embedding, None);
        assert_eq!(analysis.similarity_score, 0.0);
        assert!(!analysis.recommendation.is_empty());
    }

    #[tokio::test]
    async fn dangling_user_id_fails_before_any_model_call() {
        let llm = scripted_llm(json!([1.0]));
        let text_prompts = llm.text_prompts.clone();
        let embed_inputs = llm.embed_inputs.clone();

        let service = Service::new(StubUsers::default(), StubFoods::default(), llm);
        let err = service.analyze_food(analyze_input(Uuid::new_v4())).await.unwrap_err();

        assert!(matches!(err, CoreError::UserNotFound));
        assert!(text_prompts.lock().unwrap().is_empty());
        assert!(embed_inputs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_image_is_rejected_as_input_error() {
        let service = Service::new(
            StubUsers::default(),
            StubFoods::default(),
            StubLlm::default(),
        );
        let err = service
            .analyze_food(AnalyzeFoodInput {
                user_id: Uuid::new_v4(),
                image_data: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn missing_dish_name_fails_the_extraction_stage() {
        let user = sample_user(vec![1.0]);
        let user_id = user.id;
        let llm = StubLlm {
            caption: Some("something unidentifiable".to_string()),
            ..Default::default()
        };
        llm.push_text_response(Ok("Calories: 100\nProtein: 2g".to_string()));
        let users = StubUsers {
            user: Some(user),
            ..Default::default()
        };
        let foods = StubFoods::default();
        let created = foods.created.clone();

        let service = Service::new(users, foods, llm);
        let err = service.analyze_food(analyze_input(user_id)).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::UpstreamModel {
                stage: AnalysisStage::NutritionExtracted,
                ..
            }
        ));
        assert!(created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_caption_fails_the_caption_stage() {
        let user = sample_user(vec![1.0]);
        let user_id = user.id;
        let llm = StubLlm {
            caption: Some("   ".to_string()),
            ..Default::default()
        };
        let users = StubUsers {
            user: Some(user),
            ..Default::default()
        };

        let service = Service::new(users, StubFoods::default(), llm);
        let err = service.analyze_food(analyze_input(user_id)).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::UpstreamModel {
                stage: AnalysisStage::Captioned,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn empty_recommendation_fails_after_persistence() {
        let user = sample_user(vec![1.0, 2.0]);
        let user_id = user.id;
        let llm = StubLlm {
            caption: Some("a bowl of ramen".to_string()),
            embed_value: json!([1.0, 2.0]),
            ..Default::default()
        };
        llm.push_text_response(Ok("Food Item: Ramen\nCalories: 450".to_string()));
        llm.push_text_response(Ok(String::new()));
        let users = StubUsers {
            user: Some(user),
            ..Default::default()
        };
        let foods = StubFoods::default();
        let created = foods.created.clone();

        let service = Service::new(users, foods, llm);
        let err = service.analyze_food(analyze_input(user_id)).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::UpstreamModel {
                stage: AnalysisStage::Recommended,
                ..
            }
        ));
        // Already-persisted work is retained despite the late failure.
        assert_eq!(created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn recommend_food_scores_stored_embeddings() {
        let user = sample_user(vec![0.0, 1.0]);
        let user_id = user.id;
        let item = FoodItem::new(
            "Cheesecake".to_string(),
            NutritionRecord {
                calories: Some("370-400".to_string()),
                ..Default::default()
            },
            Some(vec![0.0, 1.0]),
        );
        let item_id = item.id;

        let llm = StubLlm::default();
        llm.push_text_response(Ok("Great match for you.".to_string()));
        let users = StubUsers {
            user: Some(user),
            ..Default::default()
        };
        let foods = StubFoods {
            item: Some(item),
            ..Default::default()
        };

        let service = Service::new(users, foods, llm);
        let recommendation = service
            .recommend_food(RecommendFoodInput {
                user_id,
                food_item_id: item_id,
            })
            .await
            .unwrap();

        assert_eq!(recommendation.food_item_id, item_id);
        assert!((recommendation.similarity_score - 1.0).abs() < 1e-6);
        assert_eq!(recommendation.recommendation, "Great match for you.");
    }

    #[tokio::test]
    async fn recommend_food_missing_item_is_not_found() {
        let user = sample_user(vec![1.0]);
        let user_id = user.id;
        let users = StubUsers {
            user: Some(user),
            ..Default::default()
        };

        let service = Service::new(users, StubFoods::default(), StubLlm::default());
        let err = service
            .recommend_food(RecommendFoodInput {
                user_id,
                food_item_id: Uuid::new_v4(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::FoodItemNotFound));
    }
}
