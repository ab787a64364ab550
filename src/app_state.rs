use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoSyllabusRepository, SyllabusRepository},
    services::{
        chat_service::ChatService,
        document_service::{DocumentService, ExcerptExtractor},
        generation_service::GenerationService,
        model_service::{GenerationClient, OpenAiModelService},
        session_manager::SessionManager,
        syllabus_service::SyllabusService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub syllabus_service: Arc<SyllabusService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let repository = Arc::new(MongoSyllabusRepository::new(
            &db,
            &config.syllabi_collection,
        ));
        repository.ensure_indexes().await?;

        let client = Arc::new(OpenAiModelService::new(&config));

        Ok(Self::with_services(config, repository, client))
    }

    /// Wire the service graph from explicit collaborators. Tests use this to
    /// inject an in-memory repository and a mock generation client.
    pub fn with_services(
        config: Config,
        repository: Arc<dyn SyllabusRepository>,
        client: Arc<dyn GenerationClient>,
    ) -> Self {
        let sessions = Arc::new(SessionManager::new());
        let extractor = Arc::new(ExcerptExtractor::new(config.document_excerpt_chars));
        let documents = Arc::new(DocumentService::new(extractor));
        let generation = Arc::new(GenerationService::new(client));

        let chat_service = Arc::new(ChatService::new(
            Arc::clone(&sessions),
            generation,
            documents,
        ));
        let syllabus_service = Arc::new(SyllabusService::new(sessions, repository));

        Self {
            chat_service,
            syllabus_service,
            config: Arc::new(config),
        }
    }
}
