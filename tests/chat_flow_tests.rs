//! End-to-end dialogue flows against a stubbed generation client and an
//! in-memory repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use toq_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::AttachedFile,
    repositories::{StoredSyllabus, SyllabusRepository},
    services::model_service::GenerationClient,
};

struct StubGenerator {
    completion: Result<String, AppError>,
    prompts: Arc<std::sync::Mutex<Vec<String>>>,
}

impl StubGenerator {
    fn returning(completion: &str) -> Self {
        Self {
            completion: Ok(completion.to_string()),
            prompts: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            completion: Err(AppError::GenerationError(message.to_string())),
            prompts: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    fn prompts(&self) -> Arc<std::sync::Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl GenerationClient for StubGenerator {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.prompts
            .lock()
            .expect("prompt log mutex poisoned")
            .push(prompt.to_string());
        self.completion.clone()
    }
}

struct InMemorySyllabusRepository {
    records: RwLock<HashMap<String, StoredSyllabus>>,
}

impl InMemorySyllabusRepository {
    fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SyllabusRepository for InMemorySyllabusRepository {
    async fn save(&self, syllabus: &toq_server::models::domain::Syllabus) -> AppResult<String> {
        let stored = StoredSyllabus {
            key: syllabus.storage_key(),
            syllabus: syllabus.clone(),
            created_at: Utc::now(),
        };
        let key = stored.key.clone();
        self.records.write().await.insert(key.clone(), stored);
        Ok(key)
    }

    async fn find_by_key(&self, key: &str) -> AppResult<Option<StoredSyllabus>> {
        Ok(self.records.read().await.get(key).cloned())
    }
}

fn state_with(client: StubGenerator) -> AppState {
    AppState::with_services(
        Config::from_env(),
        Arc::new(InMemorySyllabusRepository::new()),
        Arc::new(client),
    )
}

fn two_record_completion() -> String {
    "**Nom du Cours** : Thermodynamique I\n**Semestre** : S3\n---\n\
     **Nom du Cours** : Thermodynamique II\n**Semestre** : S4\n---"
        .to_string()
}

fn texts(reply: &toq_server::models::dto::response::ChatReplyDto) -> Vec<String> {
    reply.messages.iter().map(|m| m.text.clone()).collect()
}

#[tokio::test]
async fn test_full_dialogue_produces_and_selects_records() {
    let state = state_with(StubGenerator::returning(&two_record_completion()));
    let chat = &state.chat_service;

    let reply = chat.submit_message("s1", "Thermodynamique").await.unwrap();
    assert!(texts(&reply).contains(&"Combien de syllabus souhaitez-vous générer ?".to_string()));

    let reply = chat.submit_message("s1", "2").await.unwrap();
    assert!(texts(&reply)
        .contains(&"Comment souhaitez-vous répartir le contenu dans les syllabus ?".to_string()));

    let reply = chat.submit_message("s1", "un par semestre").await.unwrap();
    let produced = texts(&reply);
    assert!(produced.contains(&"Génération de(s) syllabus en cours...".to_string()));
    assert!(produced.contains(&"2 syllabus ont été générés !".to_string()));

    let view = state.syllabus_service.session_view("s1").await;
    assert_eq!(view.syllabi.len(), 2);
    assert_eq!(view.selected_index, 1);
    assert!(view.generated);
    assert_eq!(view.syllabi[0].course_name, "Thermodynamique I");
    assert_eq!(view.syllabi[1].course_name, "Thermodynamique II");
}

#[tokio::test]
async fn test_count_of_one_never_asks_for_distribution() {
    let generator = StubGenerator::returning("**Nom du Cours** : Unique");
    let prompts = generator.prompts();
    let state = state_with(generator);
    let chat = &state.chat_service;

    chat.submit_message("s1", "Optique").await.unwrap();
    let reply = chat.submit_message("s1", "1").await.unwrap();

    let produced = texts(&reply);
    assert!(!produced
        .contains(&"Comment souhaitez-vous répartir le contenu dans les syllabus ?".to_string()));
    assert!(produced.contains(&"1 syllabus ont été générés !".to_string()));

    let sent = prompts.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("Distribution demandée : standard"));
    assert!(sent[0].contains("Génère exactement 1 syllabus"));
}

#[tokio::test]
async fn test_invalid_count_loops_until_valid() {
    let state = state_with(StubGenerator::returning("**Nom du Cours** : A"));
    let chat = &state.chat_service;

    chat.submit_message("s1", "Réseaux").await.unwrap();

    for bad in ["abc", "0", "-1"] {
        let reply = chat.submit_message("s1", bad).await.unwrap();
        assert!(
            texts(&reply).contains(&"Veuillez entrer un nombre valide supérieur à 0.".to_string()),
            "input {:?} should re-prompt",
            bad
        );
    }

    // Still awaiting the count: a valid value proceeds to distribution.
    let reply = chat.submit_message("s1", "2").await.unwrap();
    assert!(texts(&reply)
        .contains(&"Comment souhaitez-vous répartir le contenu dans les syllabus ?".to_string()));
}

#[tokio::test]
async fn test_generation_failure_leaves_session_unchanged() {
    let state = state_with(StubGenerator::failing("service indisponible"));
    let chat = &state.chat_service;

    chat.submit_message("s1", "Électronique").await.unwrap();
    let reply = chat.submit_message("s1", "1").await.unwrap();

    assert!(texts(&reply).contains(&"Erreur lors de la génération.".to_string()));

    let view = state.syllabus_service.session_view("s1").await;
    assert!(view.syllabi.is_empty());
    assert!(!view.generated);

    // The dialogue is back to idle: a new topic starts a fresh cycle.
    let reply = chat.submit_message("s1", "Un autre thème").await.unwrap();
    assert!(texts(&reply).contains(&"Combien de syllabus souhaitez-vous générer ?".to_string()));
}

#[tokio::test]
async fn test_reported_count_is_what_the_generator_produced() {
    let state = state_with(StubGenerator::returning("**Nom du Cours** : Seul"));
    let chat = &state.chat_service;

    chat.submit_message("s1", "Chimie").await.unwrap();
    chat.submit_message("s1", "5").await.unwrap();
    let reply = chat.submit_message("s1", "cinq modules").await.unwrap();

    assert!(texts(&reply).contains(&"1 syllabus ont été générés !".to_string()));

    let view = state.syllabus_service.session_view("s1").await;
    assert_eq!(view.syllabi.len(), 1);
    assert_eq!(view.selected_index, 0);
}

#[tokio::test]
async fn test_attachment_flow_embeds_documents_in_prompt() {
    let generator = StubGenerator::returning("**Nom du Cours** : Langage C");
    let prompts = generator.prompts();
    let state = state_with(generator);
    let chat = &state.chat_service;

    let reply = chat
        .attach_files(
            "s1",
            vec![AttachedFile {
                name: "poly_c.pdf".to_string(),
                content: "Introduction au langage C\n\nChapitre 1 : les types.".to_string(),
            }],
        )
        .await
        .unwrap();

    let produced = texts(&reply);
    assert!(produced
        .iter()
        .any(|text| text.contains("1 fichier(s) sélectionné(s) : poly_c.pdf")));
    assert!(produced.contains(&"Combien de syllabus souhaitez-vous générer ?".to_string()));

    let reply = chat.submit_message("s1", "1").await.unwrap();
    assert!(texts(&reply).contains(&"1 syllabus ont été générés !".to_string()));

    let sent = prompts.lock().unwrap();
    assert!(sent[0].contains("Thème demandé : Introduction au langage C"));
    assert!(sent[0].contains("Contenu extrait de « poly_c.pdf »"));
    assert!(sent[0].contains("Chapitre 1 : les types."));
}

#[tokio::test]
async fn test_failed_file_reports_and_keeps_going() {
    let state = state_with(StubGenerator::returning("**Nom du Cours** : A"));
    let chat = &state.chat_service;

    let reply = chat
        .attach_files(
            "s1",
            vec![
                AttachedFile {
                    name: "vide.pdf".to_string(),
                    content: "   ".to_string(),
                },
                AttachedFile {
                    name: "ok.pdf".to_string(),
                    content: "Analyse numérique".to_string(),
                },
            ],
        )
        .await
        .unwrap();

    let produced = texts(&reply);
    assert!(produced.iter().any(|text| text.contains("vide.pdf")));
    assert!(produced.contains(&"Combien de syllabus souhaitez-vous générer ?".to_string()));
    assert!(produced
        .iter()
        .any(|text| text.contains("1 fichier(s) sélectionné(s) : ok.pdf")));
}

#[tokio::test]
async fn test_edit_and_save_selected_record() {
    let state = state_with(StubGenerator::returning("**Nom du Cours** : Brouillon"));
    let chat = &state.chat_service;

    chat.submit_message("s1", "Génie logiciel").await.unwrap();
    chat.submit_message("s1", "1").await.unwrap();

    let updated = state
        .syllabus_service
        .update_field("s1", "courseName", "Génie Logiciel Avancé".to_string())
        .await
        .unwrap();
    assert_eq!(updated.course_name, "Génie Logiciel Avancé");

    let saved = state.syllabus_service.save_selected("s1").await.unwrap();
    assert!(saved.key.starts_with("syllabus_"));
    assert_eq!(saved.message, "Syllabus sauvegardé avec succès !");
}

#[tokio::test]
async fn test_unknown_field_key_is_a_validation_error() {
    let state = state_with(StubGenerator::returning("**Nom du Cours** : A"));
    let chat = &state.chat_service;

    chat.submit_message("s1", "Thème").await.unwrap();
    chat.submit_message("s1", "1").await.unwrap();

    let result = state
        .syllabus_service
        .update_field("s1", "noSuchField", "value".to_string())
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn test_transcript_starts_with_greeting_and_grows() {
    let state = state_with(StubGenerator::returning("**Nom du Cours** : A"));
    let chat = &state.chat_service;

    let transcript = chat.transcript("s1").await;
    assert_eq!(transcript.len(), 1);
    assert!(!transcript[0].is_user);
    assert!(transcript[0].text.starts_with("Bienvenue sur TOQ !"));

    chat.submit_message("s1", "Thème").await.unwrap();
    let transcript = chat.transcript("s1").await;
    assert_eq!(transcript.len(), 3);
    assert!(transcript[1].is_user);
}
