//! In-memory session store
//!
//! One `SessionState` per conversation id, each behind its own mutex so
//! turns of the same conversation run one at a time while different
//! conversations proceed independently. Nothing survives a restart.

use crate::session::SessionState;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Mutex<SessionState>>>>,
}

impl SessionStore {
    /// Get or create the session slot for a conversation
    pub async fn handle(&self, conversation_id: &str) -> Arc<Mutex<SessionState>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(slot) = sessions.get(conversation_id) {
                return slot.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(conversation_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(SessionState::new())))
            .clone()
    }

    /// Copy of the current state, if the conversation exists
    pub async fn snapshot(&self, conversation_id: &str) -> Option<SessionState> {
        let slot = self.sessions.read().await.get(conversation_id).cloned()?;
        let state = slot.lock().await.clone();
        Some(state)
    }

    /// Forget a conversation; its next turn starts a new epoch
    pub async fn remove(&self, conversation_id: &str) -> bool {
        self.sessions.write().await.remove(conversation_id).is_some()
    }
}
