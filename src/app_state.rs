use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    providers::{ChatProvider, OllamaProvider, OpenAiProvider},
    repositories::{FileSlotRepository, SlotRepository},
    services::{CoachService, JournalService, QuizService},
};

#[derive(Clone)]
pub struct AppState {
    pub coach_service: Arc<CoachService>,
    pub quiz_service: Arc<QuizService>,
    pub journal_service: Arc<JournalService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire up real providers and the file-backed store from configuration.
    pub fn from_config(config: Config) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.provider_timeout_secs);

        let local: Arc<dyn ChatProvider> = Arc::new(
            OllamaProvider::new(config.ollama_url.as_str(), config.ollama_model.as_str(), timeout)
                .map_err(|e| AppError::InternalError(e.to_string()))?,
        );

        let hosted: Option<Arc<dyn ChatProvider>> = config
            .openai_api_key
            .clone()
            .map(|key| OpenAiProvider::new(key, config.openai_model.as_str(), timeout))
            .transpose()
            .map_err(|e| AppError::InternalError(e.to_string()))?
            .map(|p| Arc::new(p) as Arc<dyn ChatProvider>);

        let repository: Arc<dyn SlotRepository> =
            Arc::new(FileSlotRepository::new(&config.data_dir)?);

        Ok(Self::with_parts(config, hosted, local, repository))
    }

    /// Assemble from explicit parts; tests inject mock providers and an
    /// in-memory store here.
    pub fn with_parts(
        config: Config,
        hosted: Option<Arc<dyn ChatProvider>>,
        local: Arc<dyn ChatProvider>,
        repository: Arc<dyn SlotRepository>,
    ) -> Self {
        Self {
            coach_service: Arc::new(CoachService::new(hosted, local.clone())),
            quiz_service: Arc::new(QuizService::new(local)),
            journal_service: Arc::new(JournalService::new(repository)),
            config: Arc::new(config),
        }
    }
}
