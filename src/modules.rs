//! Business modules behind the main menu
//!
//! Every module implements the same two-call capability: render its entry
//! menu, then process one turn at a time until it hands control back to the
//! main menu.

mod catalog;
mod info;
mod name;
mod network;
mod registry;
mod tables;

pub use info::{InfoModule, Topic};
pub use name::{ModuleName, UnknownModuleName};
pub use network::{City, NetworkModule};
pub use registry::{ModuleDescriptor, ModuleRegistry, RegistryError};
pub use tables::TablesModule;

use crate::reply::Reply;
use crate::session::SessionState;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result of one turn inside a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleOutcome {
    /// Show this to the user and stay in the module
    Respond(Reply),
    /// The module is done; control goes back to the main menu
    ReturnToMain,
}

impl ModuleOutcome {
    pub fn text(text: impl Into<String>) -> Self {
        ModuleOutcome::Respond(Reply::text(text))
    }
}

/// Failure raised by a module while rendering or processing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// A resource the module depends on is not reachable right now
    #[error("module unavailable: {0}")]
    Unavailable(String),
    #[error("module failed: {0}")]
    Failed(String),
    /// Caught at the dispatcher boundary
    #[error("module panicked: {0}")]
    Panicked(String),
}

/// Capability contract every business module implements
#[async_trait]
pub trait MenuModule: Send + Sync {
    /// Entry content shown when the module is selected from the main menu
    fn menu(&self) -> Result<Reply, ModuleError>;

    /// Process one turn while the conversation is inside this module.
    ///
    /// The module may update the session's scratch fields. Returning
    /// `ModuleOutcome::ReturnToMain` hands control back to the main menu.
    async fn execute(
        &self,
        input: &str,
        session: &mut SessionState,
    ) -> Result<ModuleOutcome, ModuleError>;
}

/// Module content that varies per deployment
#[derive(Debug, Clone)]
pub struct ModuleSettings {
    /// Image sent by the price-table module
    pub tables_image_url: String,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            tables_image_url: tables::DEFAULT_IMAGE_URL.to_string(),
        }
    }
}

/// Build the module for a canonical name
pub(crate) fn build(name: ModuleName, settings: &ModuleSettings) -> Arc<dyn MenuModule> {
    match name {
        ModuleName::Tabelas => Arc::new(TablesModule::new(settings.tables_image_url.clone())),
        ModuleName::Rede => Arc::new(NetworkModule::new(catalog::NETWORK_CITIES)),
        other => Arc::new(catalog::info_module(other)),
    }
}
