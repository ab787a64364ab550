pub mod messages;
pub mod syllabus_prompt;
