use serde::Serialize;

use crate::models::domain::{ChatMessage, SessionState, Syllabus};

/// Messages produced by one submit or attach turn. `accepted` is false when
/// the turn was ignored because a generation request was already in flight.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReplyDto {
    pub accepted: bool,
    pub messages: Vec<ChatMessage>,
}

impl ChatReplyDto {
    pub fn ignored() -> Self {
        ChatReplyDto {
            accepted: false,
            messages: Vec::new(),
        }
    }

    pub fn accepted(messages: Vec<ChatMessage>) -> Self {
        ChatReplyDto {
            accepted: true,
            messages,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSyllabiDto {
    pub syllabi: Vec<Syllabus>,
    pub selected_index: usize,
    pub generated: bool,
}

impl From<&SessionState> for SessionSyllabiDto {
    fn from(state: &SessionState) -> Self {
        SessionSyllabiDto {
            syllabi: state.syllabi().to_vec(),
            selected_index: state.selected_index(),
            generated: state.generated(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSyllabusResponse {
    pub key: String,
    pub message: String,
}
