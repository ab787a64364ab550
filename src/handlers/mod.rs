pub mod chat_handler;
pub mod syllabus_handler;

pub use chat_handler::{attach_files, get_transcript, health_check, submit_message};
pub use syllabus_handler::{get_syllabi, save_selected, select_syllabus, update_field};
