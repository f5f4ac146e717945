use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MealmatchConfig {
    pub database: DatabaseConfig,
    pub llm: LlmConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub base_url: String,
    pub vision_model: String,
    pub text_model: String,
    pub embedding_model: String,
    /// Vision calls can run for minutes on constrained hardware, so the
    /// default is generous. Every model call is cancelled past this bound.
    pub request_timeout_secs: u64,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}
