pub mod syllabus_repository;

pub use syllabus_repository::{MongoSyllabusRepository, StoredSyllabus, SyllabusRepository};
