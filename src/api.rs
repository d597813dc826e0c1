//! HTTP transport adapter
//!
//! Stands in for the messaging transport: one endpoint per conversation
//! turn, with session state kept in memory between turns.

mod handlers;
mod sessions;
mod types;

pub use handlers::create_router;
pub use sessions::SessionStore;
pub use types::*;

use crate::dispatcher::Dispatcher;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            sessions: Arc::new(SessionStore::default()),
        }
    }
}
