pub mod dialogue;
pub mod session;
pub mod source_document;
pub mod syllabus;

pub use dialogue::{DialogueContext, DialogueState, Topic, TopicSource};
pub use session::{ChatMessage, ChatSession, SessionState};
pub use source_document::{AttachedFile, SourceDocument};
pub use syllabus::{Syllabus, SyllabusField};
