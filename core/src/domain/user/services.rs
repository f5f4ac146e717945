use tracing::info;
use uuid::Uuid;

use crate::domain::{
    analysis::{entities::AnalysisStage, ports::LlmClient},
    common::{entities::app_errors::CoreError, services::Service},
    embedding::codec,
    food::ports::FoodItemRepository,
    user::{
        entities::UserProfile,
        ports::{EnrollmentService, UserRepository},
        value_objects::EnrollUserInput,
    },
};

impl<U, F, L> EnrollmentService for Service<U, F, L>
where
    U: UserRepository,
    F: FoodItemRepository,
    L: LlmClient,
{
    async fn enroll_user(&self, input: EnrollUserInput) -> Result<UserProfile, CoreError> {
        let profile_json =
            serde_json::to_string(&input).map_err(|_| CoreError::InternalServerError)?;

        let raw_embedding = self
            .llm_client
            .embed(profile_json)
            .await
            .map_err(|e| e.at_stage(AnalysisStage::Embedded))?;

        // A user must never exist without an embedding, so an unusable
        // vector aborts enrollment before anything is written.
        let embedding =
            codec::to_vector(&raw_embedding).ok_or_else(|| CoreError::UpstreamModel {
                stage: AnalysisStage::Embedded,
                reason: "embedding service returned an unusable vector".to_string(),
            })?;

        let user = UserProfile::new(input, embedding);
        let user = self.user_repository.create_user(user).await?;

        info!(user_id = %user.id, "user enrolled");

        Ok(user)
    }

    async fn get_user(&self, user_id: Uuid) -> Result<UserProfile, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{
        analysis::ports::MockLlmClient,
        food::ports::MockFoodItemRepository,
        test_support::{StubFoods, StubLlm, StubUsers},
        user::ports::MockUserRepository,
    };

    fn enrollment_input() -> EnrollUserInput {
        EnrollUserInput {
            age: Some(30),
            caloric_target: Some(2000),
            dietary_preferences: vec!["vegan".to_string()],
            complications: vec![],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn enrollment_embeds_exactly_the_profile_fields() {
        let llm = StubLlm {
            embed_value: json!([0.1, 0.2, 0.3]),
            ..Default::default()
        };
        let embed_inputs = llm.embed_inputs.clone();
        let users = StubUsers::default();
        let created = users.created.clone();

        let service = Service::new(users, StubFoods::default(), llm);
        let user = service.enroll_user(enrollment_input()).await.unwrap();

        let inputs = embed_inputs.lock().unwrap();
        assert_eq!(inputs.len(), 1);
        assert_eq!(
            inputs[0],
            r#"{"age":30,"caloric_target":2000,"dietary_preferences":["vegan"],"complications":[]}"#
        );

        let created = created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, user.id);
        assert_eq!(created[0].embedding, vec![0.1, 0.2, 0.3]);
    }

    #[tokio::test]
    async fn enrollment_drives_the_ports_once_each() {
        let mut llm = MockLlmClient::new();
        llm.expect_embed()
            .withf(|input| input.contains(r#""age":30"#))
            .once()
            .returning(|_| Box::pin(std::future::ready(Ok(json!([0.5, 0.5])))));

        let mut users = MockUserRepository::new();
        users
            .expect_create_user()
            .withf(|user| user.embedding == vec![0.5, 0.5])
            .once()
            .returning(|user| Box::pin(std::future::ready(Ok(user))));

        let service = Service::new(users, MockFoodItemRepository::new(), llm);
        let user = service.enroll_user(enrollment_input()).await.unwrap();

        assert_eq!(user.dietary_preferences, vec!["vegan".to_string()]);
        assert_eq!(user.embedding, vec![0.5, 0.5]);
    }

    #[tokio::test]
    async fn unusable_embedding_aborts_without_partial_record() {
        let llm = StubLlm {
            embed_value: json!("not a vector"),
            ..Default::default()
        };
        let users = StubUsers::default();
        let created = users.created.clone();

        let service = Service::new(users, StubFoods::default(), llm);
        let err = service.enroll_user(enrollment_input()).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::UpstreamModel {
                stage: AnalysisStage::Embedded,
                ..
            }
        ));
        assert!(created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_persistence_error() {
        let llm = StubLlm {
            embed_value: json!([1.0]),
            ..Default::default()
        };
        let users = StubUsers {
            fail_create: true,
            ..Default::default()
        };

        let service = Service::new(users, StubFoods::default(), llm);
        let err = service.enroll_user(enrollment_input()).await.unwrap_err();

        assert!(matches!(err, CoreError::Persistence(_)));
    }

    #[tokio::test]
    async fn get_user_maps_missing_row_to_not_found() {
        let service = Service::new(StubUsers::default(), StubFoods::default(), StubLlm::default());
        let err = service.get_user(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, CoreError::UserNotFound));
    }
}
