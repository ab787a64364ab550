//! The multi-turn conversation that collects generation parameters.
//!
//! The transition logic is a pure function over an explicit
//! [`DialogueContext`]; [`ChatService`] owns the surrounding concerns:
//! per-session locking, generation invocation, and the rule that session
//! state is only mutated after an operation fully succeeded.

use std::sync::Arc;

use crate::{
    constants::messages,
    errors::AppResult,
    models::{
        domain::{
            AttachedFile, ChatMessage, ChatSession, DialogueContext, DialogueState,
            SourceDocument, Topic, TopicSource,
        },
        dto::response::ChatReplyDto,
    },
    services::{
        document_service::DocumentService, generation_service::GenerationService,
        prompt_builder::GenerationRequest, session_manager::SessionManager,
    },
};

/// Outcome of one dialogue step: either assistant messages to emit, or a
/// fully collected generation request.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    Reply(Vec<String>),
    Generate(GenerationRequest),
}

/// Advance the dialogue by one user turn.
pub fn advance(
    context: &mut DialogueContext,
    attachments: &[SourceDocument],
    input: &str,
) -> Transition {
    match context.state {
        DialogueState::Idle => {
            // A document-derived topic survives free-text turns; only the
            // cycle parameters restart.
            if context.has_document_topic() {
                context.requested_count = None;
                context.distribution = None;
            } else {
                context.reset();
                context.topic = Some(Topic {
                    text: input.trim().to_string(),
                    source: TopicSource::FreeText,
                });
            }
            context.state = DialogueState::AwaitingCount;
            Transition::Reply(vec![messages::ASK_COUNT_PROMPT.to_string()])
        }

        DialogueState::AwaitingCount => match input.trim().parse::<u32>() {
            Ok(count) if count > 0 => {
                context.requested_count = Some(count);
                if count == 1 {
                    context.distribution = Some(messages::STANDARD_DISTRIBUTION.to_string());
                    Transition::Generate(collected_request(context, attachments))
                } else {
                    context.state = DialogueState::AwaitingDistribution;
                    Transition::Reply(vec![messages::ASK_DISTRIBUTION_PROMPT.to_string()])
                }
            }
            _ => Transition::Reply(vec![messages::INVALID_COUNT_MESSAGE.to_string()]),
        },

        DialogueState::AwaitingDistribution => {
            context.distribution = Some(input.trim().to_string());
            Transition::Generate(collected_request(context, attachments))
        }
    }
}

fn collected_request(
    context: &DialogueContext,
    attachments: &[SourceDocument],
) -> GenerationRequest {
    GenerationRequest {
        topic: context
            .topic
            .as_ref()
            .map(|topic| topic.text.clone())
            .unwrap_or_default(),
        count: context.requested_count.unwrap_or(1),
        distribution: context.distribution.clone().unwrap_or_default(),
        documents: attachments.to_vec(),
    }
}

pub struct ChatService {
    sessions: Arc<SessionManager>,
    generation: Arc<GenerationService>,
    documents: Arc<DocumentService>,
}

impl ChatService {
    pub fn new(
        sessions: Arc<SessionManager>,
        generation: Arc<GenerationService>,
        documents: Arc<DocumentService>,
    ) -> Self {
        Self {
            sessions,
            generation,
            documents,
        }
    }

    /// Handle one submitted chat message. Returns the messages produced by
    /// this turn; an empty input or an in-flight generation makes the turn a
    /// no-op.
    pub async fn submit_message(&self, session_id: &str, input: &str) -> AppResult<ChatReplyDto> {
        if input.trim().is_empty() {
            return Ok(ChatReplyDto::ignored());
        }

        let entry = self.sessions.get_or_create(session_id).await;
        let Ok(mut guard) = entry.try_lock() else {
            log::info!("Ignoring submission for session '{}': request in flight", session_id);
            return Ok(ChatReplyDto::ignored());
        };
        let session: &mut ChatSession = &mut guard;

        let mut turn = vec![ChatMessage::from_user(input)];

        match advance(&mut session.dialogue, &session.attachments, input) {
            Transition::Reply(texts) => {
                turn.extend(texts.into_iter().map(ChatMessage::from_assistant));
            }
            Transition::Generate(request) => {
                turn.push(ChatMessage::from_assistant(messages::GENERATING_MESSAGE));

                match self.generation.generate_syllabi(&request).await {
                    Ok(records) => {
                        let produced = records.len();
                        session.state.append_batch(records);
                        turn.push(ChatMessage::from_assistant(messages::generated_message(
                            produced,
                        )));
                    }
                    Err(err) => {
                        log::error!("Generation failed for session '{}': {}", session_id, err);
                        turn.push(ChatMessage::from_assistant(
                            messages::GENERATION_FAILED_MESSAGE,
                        ));
                    }
                }
                // One attempt per collection cycle, success or failure.
                session.dialogue.reset();
            }
        }

        log::debug!("Session '{}' now {}", session_id, session.dialogue.state);
        session.transcript.extend(turn.clone());
        Ok(ChatReplyDto::accepted(turn))
    }

    /// Handle a file selection: extract every file, report per-file failures,
    /// and when at least one document survives, restart the dialogue with a
    /// document-derived topic.
    pub async fn attach_files(
        &self,
        session_id: &str,
        files: Vec<AttachedFile>,
    ) -> AppResult<ChatReplyDto> {
        if files.is_empty() {
            return Ok(ChatReplyDto::ignored());
        }

        let entry = self.sessions.get_or_create(session_id).await;
        let Ok(mut guard) = entry.try_lock() else {
            log::info!("Ignoring attachment for session '{}': request in flight", session_id);
            return Ok(ChatReplyDto::ignored());
        };
        let session: &mut ChatSession = &mut guard;

        let outcome = self.documents.extract_all(&files).await;

        let mut turn: Vec<ChatMessage> = outcome
            .failures
            .iter()
            .map(|(name, err)| {
                ChatMessage::from_assistant(messages::document_failed_message(
                    name,
                    &err.to_string(),
                ))
            })
            .collect();

        if !outcome.documents.is_empty() {
            let names: Vec<String> = outcome
                .documents
                .iter()
                .map(|doc| doc.name.clone())
                .collect();
            turn.push(ChatMessage::from_user(messages::files_selected_message(
                &names,
            )));

            session.dialogue.reset();
            session.dialogue.topic = Some(Topic {
                text: outcome.documents[0].title.clone(),
                source: TopicSource::Documents,
            });
            session.dialogue.state = DialogueState::AwaitingCount;
            session.attachments = outcome.documents;

            turn.push(ChatMessage::from_assistant(messages::ASK_COUNT_PROMPT));
        }

        session.transcript.extend(turn.clone());
        Ok(ChatReplyDto::accepted(turn))
    }

    /// Full transcript of a session, starting at the greeting.
    pub async fn transcript(&self, session_id: &str) -> Vec<ChatMessage> {
        let entry = self.sessions.get_or_create(session_id).await;
        let guard = entry.lock().await;
        guard.transcript.clone()
    }
}
