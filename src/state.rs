use crate::ai::{AiClient, GeminiClient};
use crate::config::AppConfig;
use crate::db;
use crate::storage::{FileStore, LocalStorage};
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn FileStore>,
    pub ai: Arc<dyn AiClient>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = db::connect(&config.database_url).await?;

        let storage = Arc::new(LocalStorage::new(&config.upload_dir)) as Arc<dyn FileStore>;
        let ai = Arc::new(GeminiClient::new(&config.gemini)) as Arc<dyn AiClient>;

        Ok(Self {
            db,
            config,
            storage,
            ai,
        })
    }

    pub fn from_parts(
        db: SqlitePool,
        config: Arc<AppConfig>,
        storage: Arc<dyn FileStore>,
        ai: Arc<dyn AiClient>,
    ) -> Self {
        Self {
            db,
            config,
            storage,
            ai,
        }
    }
}
