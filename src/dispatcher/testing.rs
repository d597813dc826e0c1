//! Mock collaborators for dispatcher tests

use super::{DispatchError, DispatchEvent, DispatchLog};
use crate::modules::{
    MenuModule, ModuleDescriptor, ModuleError, ModuleName, ModuleOutcome, ModuleRegistry,
};
use crate::reply::Reply;
use crate::session::{MenuState, SessionState};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// ============================================================================
// Scripted module
// ============================================================================

/// How a `ScriptedModule` behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Answer `"<tag>:<input>"`; the input `done` returns to main
    Echo,
    /// `execute` returns an error
    Fail,
    /// `execute` panics
    Panic,
    /// `execute` writes the input into `selected_city`, then errors
    ScribbleThenFail,
    /// `menu` returns an error
    MenuUnavailable,
    /// `menu` panics
    MenuPanic,
}

pub struct ScriptedModule {
    tag: String,
    behavior: Behavior,
}

impl ScriptedModule {
    pub fn new(tag: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            tag: tag.into(),
            behavior,
        }
    }

    pub fn echo(tag: impl Into<String>) -> Self {
        Self::new(tag, Behavior::Echo)
    }
}

#[async_trait]
impl MenuModule for ScriptedModule {
    fn menu(&self) -> Result<Reply, ModuleError> {
        match self.behavior {
            Behavior::MenuUnavailable => Err(ModuleError::Unavailable("scripted".to_string())),
            Behavior::MenuPanic => panic!("scripted menu panic"),
            _ => Ok(Reply::text(format!("menu:{}", self.tag))),
        }
    }

    async fn execute(
        &self,
        input: &str,
        session: &mut SessionState,
    ) -> Result<ModuleOutcome, ModuleError> {
        match self.behavior {
            Behavior::Fail => Err(ModuleError::Failed("scripted".to_string())),
            Behavior::Panic => panic!("scripted execute panic"),
            Behavior::ScribbleThenFail => {
                session.selected_city = Some(input.to_string());
                Err(ModuleError::Failed("scripted".to_string()))
            }
            _ if input == "done" => Ok(ModuleOutcome::ReturnToMain),
            _ => Ok(ModuleOutcome::text(format!("{}:{input}", self.tag))),
        }
    }
}

/// Registry holding a single module at its standard option
pub fn registry_with(name: ModuleName, module: ScriptedModule) -> Arc<ModuleRegistry> {
    let descriptor = ModuleDescriptor::new(name.option(), name, Arc::new(module));
    Arc::new(ModuleRegistry::new([descriptor]).unwrap())
}

/// Every standard module replaced by an echo module tagged with its name
pub fn echo_registry() -> Arc<ModuleRegistry> {
    let descriptors = ModuleName::ALL.into_iter().map(|name| {
        ModuleDescriptor::new(
            name.option(),
            name,
            Arc::new(ScriptedModule::echo(name.as_str())),
        )
    });
    Arc::new(ModuleRegistry::new(descriptors).unwrap())
}

// ============================================================================
// Recording log
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Logged {
    Transition { from: MenuState, to: MenuState },
    Failure { state: MenuState, error: DispatchError },
}

#[derive(Default)]
pub struct RecordingLog {
    events: Mutex<Vec<Logged>>,
}

impl RecordingLog {
    pub fn events(&self) -> Vec<Logged> {
        self.events.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }

    pub fn failures(&self) -> Vec<DispatchError> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Logged::Failure { error, .. } => Some(error),
                Logged::Transition { .. } => None,
            })
            .collect()
    }

    pub fn transitions(&self) -> Vec<(MenuState, MenuState)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Logged::Transition { from, to } => Some((from, to)),
                Logged::Failure { .. } => None,
            })
            .collect()
    }
}

impl DispatchLog for RecordingLog {
    fn log(&self, event: &DispatchEvent<'_>) {
        let logged = match *event {
            DispatchEvent::Transition { from, to } => Logged::Transition { from, to },
            DispatchEvent::Failure { state, error } => Logged::Failure {
                state,
                error: error.clone(),
            },
        };
        self.events.lock().unwrap().push(logged);
    }
}
