//! Fixed chat strings emitted by the conversation state machine.

pub const WELCOME_MESSAGE: &str =
    "Bienvenue sur TOQ ! Ravi de vous revoir. En quoi puis-je vous être utile aujourd'hui ?";

pub const ASK_COUNT_PROMPT: &str = "Combien de syllabus souhaitez-vous générer ?";

pub const INVALID_COUNT_MESSAGE: &str = "Veuillez entrer un nombre valide supérieur à 0.";

pub const ASK_DISTRIBUTION_PROMPT: &str =
    "Comment souhaitez-vous répartir le contenu dans les syllabus ?";

pub const GENERATING_MESSAGE: &str = "Génération de(s) syllabus en cours...";

pub const GENERATION_FAILED_MESSAGE: &str = "Erreur lors de la génération.";

/// Distribution used implicitly when a single syllabus is requested.
pub const STANDARD_DISTRIBUTION: &str = "standard";

pub fn generated_message(count: usize) -> String {
    format!("{} syllabus ont été générés !", count)
}

pub fn files_selected_message(names: &[String]) -> String {
    format!(
        "{} fichier(s) sélectionné(s) : {}",
        names.len(),
        names.join(", ")
    )
}

pub fn document_failed_message(name: &str, reason: &str) -> String {
    format!("Le fichier « {} » n'a pas pu être traité : {}", name, reason)
}
