use crate::{
    domain::common::{MealmatchConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        food::PostgresFoodItemRepository,
        llm::OllamaClient,
        user::PostgresUserRepository,
    },
};

pub type MealmatchService =
    Service<PostgresUserRepository, PostgresFoodItemRepository, OllamaClient>;

/// Wire the concrete adapters into the service aggregate. One connection
/// pool and one HTTP client live for the process lifetime.
pub async fn create_service(config: MealmatchConfig) -> Result<MealmatchService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let user_repository = PostgresUserRepository::new(postgres.get_db());
    let food_item_repository = PostgresFoodItemRepository::new(postgres.get_db());
    let llm_client = OllamaClient::new(config.llm.clone())?;

    Ok(Service::new(user_repository, food_item_repository, llm_client))
}
