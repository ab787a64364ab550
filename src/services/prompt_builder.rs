//! Assembly of the single-turn generation instruction.

use crate::constants::syllabus_prompt::{SYLLABUS_DELIMITER, SYLLABUS_FIELD_TEMPLATE};
use crate::models::domain::SourceDocument;

/// All parameters collected by the conversation, ready for one generation
/// call. No conversation history is carried across calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub count: u32,
    pub distribution: String,
    pub documents: Vec<SourceDocument>,
}

pub fn build_prompt(request: &GenerationRequest) -> String {
    let file_names: Vec<&str> = request
        .documents
        .iter()
        .map(|doc| doc.name.as_str())
        .collect();

    let mut prompt = format!(
        "Thème demandé : {}\n\
         Nombre de syllabus demandé : {}\n\
         Distribution demandée : {}\n\
         Fichiers fournis : {}\n",
        request.topic,
        request.count,
        request.distribution,
        file_names.join(", "),
    );

    for document in &request.documents {
        prompt.push_str(&format!(
            "\nContenu extrait de « {} » :\n{}\n",
            document.name, document.excerpt
        ));
    }

    prompt.push_str(&format!(
        "\nGénère exactement {count} syllabus sur le thème \"{topic}\" selon cette distribution. \
         Pour chaque syllabus, utilise ce format :\n\n{template}\n\n{delimiter}\n",
        count = request.count,
        topic = request.topic,
        template = SYLLABUS_FIELD_TEMPLATE,
        delimiter = SYLLABUS_DELIMITER,
    ));

    prompt
}
