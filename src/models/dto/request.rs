use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::AttachedFile;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitMessageRequest {
    #[validate(length(min = 1, max = 10000))]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AttachedFileDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AttachFilesRequest {
    #[validate(length(min = 1), nested)]
    pub files: Vec<AttachedFileDto>,
}

impl From<AttachedFileDto> for AttachedFile {
    fn from(dto: AttachedFileDto) -> Self {
        AttachedFile {
            name: dto.name,
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectSyllabusRequest {
    pub index: usize,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFieldRequest {
    #[validate(length(max = 20000))]
    pub value: String,
}
