//! Menu dispatcher
//!
//! The state machine behind every turn: welcome, main menu, submenu
//! delegation and the way back. Routing is decided by the pure
//! [`route`] function; this module applies the decision, calls into the
//! registry and modules, and turns every failure into a fixed reply.

mod error;
mod log;
mod route;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod testing;

pub use error::DispatchError;
pub use log::{DispatchEvent, DispatchLog, TracingLog};
pub use route::{route, MainSelection, Route, QUIT_SENTINEL};

use crate::menu::{self, texts};
use crate::modules::{ModuleError, ModuleName, ModuleOutcome, ModuleRegistry};
use crate::reply::Reply;
use crate::session::SessionState;
use futures::FutureExt;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Engine entry point shared by every conversation
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<ModuleRegistry>,
    log: Arc<dyn DispatchLog>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ModuleRegistry>) -> Self {
        Self {
            registry,
            log: Arc::new(TracingLog),
        }
    }

    /// Replace the logging collaborator
    #[must_use]
    pub fn with_log(mut self, log: Arc<dyn DispatchLog>) -> Self {
        self.log = log;
        self
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Process one user turn and produce the reply.
    ///
    /// Never fails: module errors and panics are logged and answered with a
    /// fixed apology. A module that fails after touching the session leaves
    /// those changes in place; there is no rollback.
    pub async fn execute(&self, input: &str, session: &mut SessionState) -> Reply {
        let from = session.menu_state();

        let result = match route(session, input) {
            Route::Welcome => {
                session.has_shown_welcome = true;
                Ok(Reply::text(menu::welcome()))
            }
            Route::QuitToMain => Ok(Self::back_to_main(session)),
            Route::Delegate(name) => self.delegate(name, input, session).await,
            Route::MainMenu(selection) => self.handle_main_menu(selection, input, session),
        };

        let reply = result.unwrap_or_else(|error| {
            self.log.log(&DispatchEvent::Failure {
                state: from,
                error: &error,
            });
            error.reply()
        });

        let to = session.menu_state();
        if from != to {
            self.log.log(&DispatchEvent::Transition { from, to });
        }
        reply
    }

    fn back_to_main(session: &mut SessionState) -> Reply {
        session.reset_to_main();
        Reply::text(menu::welcome())
    }

    async fn delegate(
        &self,
        name: ModuleName,
        input: &str,
        session: &mut SessionState,
    ) -> Result<Reply, DispatchError> {
        let descriptor = self
            .registry
            .lookup_by_current_menu(name)
            .ok_or(DispatchError::UnresolvedMenu(name))?;

        let outcome = AssertUnwindSafe(descriptor.module().execute(input, session))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(ModuleError::Panicked(panic_message(payload.as_ref()))))
            .map_err(|source| DispatchError::ModuleFailed {
                module: name,
                source,
            })?;

        match outcome {
            ModuleOutcome::Respond(reply) => Ok(reply),
            ModuleOutcome::ReturnToMain => Ok(Self::back_to_main(session)),
        }
    }

    fn handle_main_menu(
        &self,
        selection: MainSelection,
        input: &str,
        session: &mut SessionState,
    ) -> Result<Reply, DispatchError> {
        match selection {
            MainSelection::Invalid => Err(DispatchError::InvalidOption {
                input: input.to_string(),
            }),
            MainSelection::Exit => {
                session.end_epoch();
                Ok(Reply::text(texts::GOODBYE))
            }
            MainSelection::Open(option) => {
                let descriptor = self
                    .registry
                    .lookup_by_option(option)
                    .ok_or(DispatchError::UnknownOption(option))?;
                let name = descriptor.name();

                let menu = panic::catch_unwind(AssertUnwindSafe(|| descriptor.module().menu()))
                    .unwrap_or_else(|payload| {
                        Err(ModuleError::Panicked(panic_message(payload.as_ref())))
                    })
                    .map_err(|source| DispatchError::MenuUnavailable {
                        module: name,
                        source,
                    })?;

                // Only enter the submenu once its menu exists
                session.enter(name);
                Ok(menu)
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
