use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::Syllabus,
    services::{
        batch::parse_batch,
        model_service::GenerationClient,
        prompt_builder::{build_prompt, GenerationRequest},
    },
};

/// Turns a collected [`GenerationRequest`] into an ordered list of records:
/// prompt assembly, one completion call, then batch splitting. The number of
/// records returned is whatever the generator actually produced.
pub struct GenerationService {
    client: Arc<dyn GenerationClient>,
}

impl GenerationService {
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self { client }
    }

    pub async fn generate_syllabi(&self, request: &GenerationRequest) -> AppResult<Vec<Syllabus>> {
        let prompt = build_prompt(request);
        let completion = self.client.complete(&prompt).await?;

        let records = parse_batch(&completion);
        log::info!(
            "Generation produced {} record(s) for {} requested",
            records.len(),
            request.count
        );

        Ok(records)
    }
}
