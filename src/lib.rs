//! Menu router for a chat-based virtual assistant
//!
//! For each incoming message plus the conversation's session state, the
//! [`Dispatcher`] produces the next reply and updates the state in place.
//! Business modules plug in through the [`MenuModule`] capability and are
//! looked up in a static [`ModuleRegistry`].

pub mod api;
pub mod config;
pub mod dispatcher;
pub mod menu;
pub mod modules;
pub mod reply;
pub mod session;

pub use config::AppConfig;
pub use dispatcher::{DispatchLog, Dispatcher, TracingLog};
pub use modules::{MenuModule, ModuleOutcome, ModuleRegistry};
pub use reply::Reply;
pub use session::SessionState;
