use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Syllabus, SyllabusField},
        dto::response::{SaveSyllabusResponse, SessionSyllabiDto},
    },
    repositories::SyllabusRepository,
    services::session_manager::SessionManager,
};

/// Operations on a session's generated records: selection, in-place field
/// edits of the displayed record, and saving through the repository. These
/// wait on the session lock rather than rejecting, so an edit issued during a
/// generation simply lands after it.
pub struct SyllabusService {
    sessions: Arc<SessionManager>,
    repository: Arc<dyn SyllabusRepository>,
}

impl SyllabusService {
    pub fn new(sessions: Arc<SessionManager>, repository: Arc<dyn SyllabusRepository>) -> Self {
        Self {
            sessions,
            repository,
        }
    }

    pub async fn session_view(&self, session_id: &str) -> SessionSyllabiDto {
        let entry = self.sessions.get_or_create(session_id).await;
        let guard = entry.lock().await;
        SessionSyllabiDto::from(&guard.state)
    }

    pub async fn select(&self, session_id: &str, index: usize) -> AppResult<SessionSyllabiDto> {
        let entry = self.sessions.get_or_create(session_id).await;
        let mut guard = entry.lock().await;
        guard.state.select(index)?;
        Ok(SessionSyllabiDto::from(&guard.state))
    }

    pub async fn update_field(
        &self,
        session_id: &str,
        field_key: &str,
        value: String,
    ) -> AppResult<Syllabus> {
        let field = SyllabusField::from_key(field_key).ok_or_else(|| {
            AppError::ValidationError(format!("Unknown syllabus field '{}'", field_key))
        })?;

        let entry = self.sessions.get_or_create(session_id).await;
        let mut guard = entry.lock().await;
        let current = guard
            .state
            .current_mut()
            .ok_or_else(|| AppError::NotFound("No syllabus has been generated yet".to_string()))?;

        current.set_field(field, value);
        Ok(current.clone())
    }

    pub async fn save_selected(&self, session_id: &str) -> AppResult<SaveSyllabusResponse> {
        let entry = self.sessions.get_or_create(session_id).await;
        let guard = entry.lock().await;
        let current = guard
            .state
            .current()
            .ok_or_else(|| AppError::NotFound("No syllabus has been generated yet".to_string()))?;

        let key = self.repository.save(current).await?;
        log::info!("Saved syllabus under key '{}'", key);

        Ok(SaveSyllabusResponse {
            key,
            message: "Syllabus sauvegardé avec succès !".to_string(),
        })
    }
}
