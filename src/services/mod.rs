pub mod batch;
pub mod chat_service;
pub mod document_service;
pub mod extractor;
pub mod generation_service;
pub mod model_service;
pub mod prompt_builder;
pub mod session_manager;
pub mod syllabus_service;
