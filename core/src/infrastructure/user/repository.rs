use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, QueryResult, Statement};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::UserProfile, ports::UserRepository},
    },
    infrastructure::{
        db::vector,
        user::mappers::{join_tags, split_tags},
    },
};

/// User persistence against Postgres. The embedding lives in a pgvector
/// column, which sea-orm has no native type for, so statements are written
/// raw with explicit `::vector` casts.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &QueryResult) -> Result<UserProfile, sea_orm::DbErr> {
        let embedding = vector::parse(row.try_get("", "embedding")?).unwrap_or_default();

        Ok(UserProfile {
            id: row.try_get("", "id")?,
            age: row.try_get("", "age")?,
            height: row.try_get("", "height")?,
            weight: row.try_get("", "weight")?,
            caloric_target: row.try_get("", "caloric_target")?,
            protein_target: row.try_get("", "protein_target")?,
            dietary_preferences: split_tags(row.try_get("", "dietary_preferences")?),
            complications: split_tags(row.try_get("", "complications")?),
            embedding,
            created_at: row.try_get("", "created_at")?,
        })
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: UserProfile) -> Result<UserProfile, CoreError> {
        let statement = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            INSERT INTO users
                (id, age, height, weight, caloric_target, protein_target,
                 dietary_preferences, complications, embedding, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::vector, $10)
            "#,
            [
                user.id.into(),
                user.age.into(),
                user.height.into(),
                user.weight.into(),
                user.caloric_target.into(),
                user.protein_target.into(),
                join_tags(&user.dietary_preferences).into(),
                join_tags(&user.complications).into(),
                vector::render(&user.embedding).into(),
                user.created_at.into(),
            ],
        );

        self.db.execute(statement).await.map_err(|e| {
            error!("failed to create user: {}", e);
            CoreError::Persistence(e.to_string())
        })?;

        Ok(user)
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<UserProfile>, CoreError> {
        let statement = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            SELECT id, age, height, weight, caloric_target, protein_target,
                   dietary_preferences, complications, embedding::text AS embedding,
                   created_at
            FROM users
            WHERE id = $1
            "#,
            [user_id.into()],
        );

        let row = self.db.query_one(statement).await.map_err(|e| {
            error!("failed to fetch user: {}", e);
            CoreError::Persistence(e.to_string())
        })?;

        row.as_ref()
            .map(Self::from_row)
            .transpose()
            .map_err(|e| {
                error!("failed to map user row: {}", e);
                CoreError::InternalServerError
            })
    }
}
