use crate::models::domain::{Syllabus, SyllabusField};
