/// Which parameter the conversation is currently soliciting. Replaces the
/// original boolean-flag pair, so the both-flags-set state cannot exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogueState {
    #[default]
    Idle,
    AwaitingCount,
    AwaitingDistribution,
}

impl std::fmt::Display for DialogueState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DialogueState::Idle => write!(f, "idle"),
            DialogueState::AwaitingCount => write!(f, "awaiting_count"),
            DialogueState::AwaitingDistribution => write!(f, "awaiting_distribution"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicSource {
    FreeText,
    Documents,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topic {
    pub text: String,
    pub source: TopicSource,
}

/// Parameters captured over one collection cycle. The whole context resets
/// after a generation attempt finishes, success or failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogueContext {
    pub state: DialogueState,
    pub topic: Option<Topic>,
    pub requested_count: Option<u32>,
    pub distribution: Option<String>,
}

impl DialogueContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = DialogueContext::default();
    }

    pub fn has_document_topic(&self) -> bool {
        matches!(
            self.topic,
            Some(Topic {
                source: TopicSource::Documents,
                ..
            })
        )
    }
}
