//! Dispatch failures and the reply each one turns into

use crate::menu::{self, texts};
use crate::modules::{ModuleError, ModuleName};
use crate::reply::Reply;
use thiserror::Error;

/// Everything that can go wrong inside one turn
///
/// None of these leave the dispatcher; each maps to a fixed reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("invalid main menu option: {input:?}")]
    InvalidOption { input: String },

    #[error("no module registered for option {0}")]
    UnknownOption(u32),

    #[error("current menu {0} does not resolve to a registered module")]
    UnresolvedMenu(ModuleName),

    #[error("menu of module {module} could not be rendered: {source}")]
    MenuUnavailable {
        module: ModuleName,
        source: ModuleError,
    },

    #[error("module {module} failed: {source}")]
    ModuleFailed {
        module: ModuleName,
        source: ModuleError,
    },
}

impl DispatchError {
    /// User-visible reply for this failure
    pub fn reply(&self) -> Reply {
        match self {
            DispatchError::InvalidOption { .. } => Reply::text(menu::invalid_option()),
            DispatchError::UnknownOption(_) => Reply::text(texts::NOT_IMPLEMENTED),
            DispatchError::UnresolvedMenu(_) | DispatchError::MenuUnavailable { .. } => {
                Reply::text(texts::UNAVAILABLE)
            }
            DispatchError::ModuleFailed { .. } => Reply::text(texts::PROCESSING_ERROR),
        }
    }

    /// Raised by module code rather than by routing
    pub fn is_module_failure(&self) -> bool {
        matches!(
            self,
            DispatchError::MenuUnavailable { .. } | DispatchError::ModuleFailed { .. }
        )
    }
}
