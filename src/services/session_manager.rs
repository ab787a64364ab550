use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::models::domain::ChatSession;

/// Registry of live conversations, keyed by the caller-chosen session id.
/// Each session sits behind its own mutex: the holder of the lock is the one
/// in-flight operation, and `try_lock` failure is how concurrent submissions
/// get rejected.
#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Arc<Mutex<ChatSession>>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_create(&self, session_id: &str) -> Arc<Mutex<ChatSession>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(session_id) {
                return Arc::clone(session);
            }
        }

        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(session_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(ChatSession::new()))),
        )
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
