use clap::Parser;
use mealmatch_core::domain::common::{DatabaseConfig, LlmConfig, MealmatchConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "mealmatch-api", about = "Personalized food analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 3000)]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub database_port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub database_user: String,

    #[arg(long = "database-password", env = "DATABASE_PASSWORD", default_value = "")]
    pub database_password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "mealmatch")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "OLLAMA_URL", default_value = "http://localhost:11434")]
    pub ollama_url: String,

    #[arg(long, env = "VISION_MODEL", default_value = "llava:7b")]
    pub vision_model: String,

    #[arg(long, env = "TEXT_MODEL", default_value = "mistral")]
    pub text_model: String,

    #[arg(long, env = "EMBEDDING_MODEL", default_value = "mistral")]
    pub embedding_model: String,

    /// Vision calls on modest hardware can take several minutes.
    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = 600)]
    pub request_timeout_secs: u64,
}

impl From<Args> for MealmatchConfig {
    fn from(args: Args) -> Self {
        MealmatchConfig {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            llm: LlmConfig {
                base_url: args.llm.ollama_url,
                vision_model: args.llm.vision_model,
                text_model: args.llm.text_model,
                embedding_model: args.llm.embedding_model,
                request_timeout_secs: args.llm.request_timeout_secs,
            },
        }
    }
}
