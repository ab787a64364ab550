//! Reduction of attached files to prompt-ready source documents.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{AttachedFile, SourceDocument},
};

/// Longest acceptable first line for the title heuristic; anything longer is
/// treated as body text and the file name stem is used instead.
const MAX_TITLE_CHARS: usize = 120;

/// Reduces one attached file to a (name, title, excerpt) document.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract(&self, file: &AttachedFile) -> AppResult<SourceDocument>;
}

/// Best-effort extractor over already-extracted plain text: bounded excerpt,
/// title from the first non-empty line, file name stem as fallback.
pub struct ExcerptExtractor {
    excerpt_chars: usize,
}

impl ExcerptExtractor {
    pub fn new(excerpt_chars: usize) -> Self {
        Self { excerpt_chars }
    }

    fn derive_title(file: &AttachedFile) -> String {
        let first_line = file
            .content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty());

        match first_line {
            Some(line) if line.chars().count() <= MAX_TITLE_CHARS => line.to_string(),
            _ => file_stem(&file.name),
        }
    }
}

fn file_stem(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

#[async_trait]
impl DocumentExtractor for ExcerptExtractor {
    async fn extract(&self, file: &AttachedFile) -> AppResult<SourceDocument> {
        let text = file.content.trim();
        if text.is_empty() {
            return Err(AppError::DocumentError(format!(
                "Aucun texte exploitable dans « {} »",
                file.name
            )));
        }

        let excerpt: String = text.chars().take(self.excerpt_chars).collect();

        Ok(SourceDocument {
            name: file.name.clone(),
            title: Self::derive_title(file),
            excerpt,
        })
    }
}

/// The result of extracting a whole attachment batch. Failures are reported
/// per file and never abort the remaining files.
pub struct ExtractionOutcome {
    pub documents: Vec<SourceDocument>,
    pub failures: Vec<(String, AppError)>,
}

pub struct DocumentService {
    extractor: Arc<dyn DocumentExtractor>,
}

impl DocumentService {
    pub fn new(extractor: Arc<dyn DocumentExtractor>) -> Self {
        Self { extractor }
    }

    /// Extract every file concurrently. Output keeps the input order.
    pub async fn extract_all(&self, files: &[AttachedFile]) -> ExtractionOutcome {
        let extractions = join_all(
            files
                .iter()
                .map(|file| async { (file.name.clone(), self.extractor.extract(file).await) }),
        )
        .await;

        let mut outcome = ExtractionOutcome {
            documents: Vec::new(),
            failures: Vec::new(),
        };

        for (name, result) in extractions {
            match result {
                Ok(document) => outcome.documents.push(document),
                Err(err) => {
                    log::warn!("Extraction failed for '{}': {}", name, err);
                    outcome.failures.push((name, err));
                }
            }
        }

        outcome
    }
}
