use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{dialogue::DialogueContext, source_document::SourceDocument, Syllabus},
};

/// One transcript entry, mirroring the original chat surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>) -> Self {
        ChatMessage {
            text: text.into(),
            is_user: true,
        }
    }

    pub fn from_assistant(text: impl Into<String>) -> Self {
        ChatMessage {
            text: text.into(),
            is_user: false,
        }
    }
}

/// The generated records of one session. Insertion order is generation order;
/// the selection index is always valid while the sequence is non-empty.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    syllabi: Vec<Syllabus>,
    selected_index: usize,
    generated: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generated batch and select the most recent record. An empty
    /// batch changes nothing.
    pub fn append_batch(&mut self, batch: Vec<Syllabus>) {
        if batch.is_empty() {
            return;
        }
        self.syllabi.extend(batch);
        self.selected_index = self.syllabi.len() - 1;
        self.generated = true;
    }

    pub fn select(&mut self, index: usize) -> AppResult<()> {
        if index >= self.syllabi.len() {
            return Err(AppError::ValidationError(format!(
                "Selection index {} out of range (0..{})",
                index,
                self.syllabi.len()
            )));
        }
        self.selected_index = index;
        Ok(())
    }

    pub fn current(&self) -> Option<&Syllabus> {
        self.syllabi.get(self.selected_index)
    }

    pub fn current_mut(&mut self) -> Option<&mut Syllabus> {
        self.syllabi.get_mut(self.selected_index)
    }

    pub fn syllabi(&self) -> &[Syllabus] {
        &self.syllabi
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn generated(&self) -> bool {
        self.generated
    }

    pub fn len(&self) -> usize {
        self.syllabi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllabi.is_empty()
    }
}

/// Everything the server keeps for one conversation. The transcript starts
/// with the assistant's greeting, as on the original chat surface.
#[derive(Clone, Debug)]
pub struct ChatSession {
    pub dialogue: DialogueContext,
    pub attachments: Vec<SourceDocument>,
    pub state: SessionState,
    pub transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        ChatSession {
            dialogue: DialogueContext::new(),
            attachments: Vec::new(),
            state: SessionState::new(),
            transcript: vec![ChatMessage::from_assistant(
                crate::constants::messages::WELCOME_MESSAGE,
            )],
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
