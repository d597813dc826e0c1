//! Logging collaborator injected into the dispatcher

use super::DispatchError;
use crate::session::MenuState;

/// Something worth recording about a turn
#[derive(Debug, Clone, Copy)]
pub enum DispatchEvent<'a> {
    /// The session moved between dispatcher states
    Transition { from: MenuState, to: MenuState },
    /// A turn was answered with a failure reply
    Failure {
        state: MenuState,
        error: &'a DispatchError,
    },
}

/// Sink for dispatcher events
pub trait DispatchLog: Send + Sync {
    fn log(&self, event: &DispatchEvent<'_>);
}

/// Production sink backed by `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DispatchLog for TracingLog {
    fn log(&self, event: &DispatchEvent<'_>) {
        match event {
            DispatchEvent::Transition { from, to } => {
                tracing::debug!(from = %from, to = %to, "Menu transition");
            }
            DispatchEvent::Failure { state, error } if error.is_module_failure() => {
                tracing::error!(state = %state, error = %error, "Module error contained");
            }
            DispatchEvent::Failure { state, error }
                if matches!(error, DispatchError::InvalidOption { .. }) =>
            {
                tracing::debug!(state = %state, error = %error, "Invalid menu input");
            }
            DispatchEvent::Failure { state, error } => {
                tracing::warn!(state = %state, error = %error, "Module resolution failed");
            }
        }
    }
}
