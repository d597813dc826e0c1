//! Static question-and-answer module
//!
//! Most business modules are a numbered list of topics with a fixed answer
//! each. The user picks topics until they go back to the main menu.

use super::{MenuModule, ModuleError, ModuleName, ModuleOutcome};
use crate::menu::{texts, MenuDescriptor};
use crate::reply::Reply;
use crate::session::SessionState;
use async_trait::async_trait;

/// Input that leaves the module from inside it
const BACK_OPTION: &str = "0";

/// One numbered entry of an info module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub label: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone)]
pub struct InfoModule {
    name: ModuleName,
    title: &'static str,
    topics: &'static [Topic],
}

impl InfoModule {
    pub const fn new(name: ModuleName, title: &'static str, topics: &'static [Topic]) -> Self {
        Self {
            name,
            title,
            topics,
        }
    }

    fn render_menu(&self) -> String {
        let menu = (1u32..)
            .zip(self.topics)
            .fold(MenuDescriptor::new(self.title), |menu, (key, topic)| {
                menu.with_option(key, topic.label)
            });
        format!("{}\n{}", menu.render(), texts::BACK_HINT)
    }

    fn topic(&self, input: &str) -> Option<&Topic> {
        let index = input.parse::<usize>().ok()?;
        index.checked_sub(1).and_then(|i| self.topics.get(i))
    }
}

#[async_trait]
impl MenuModule for InfoModule {
    fn menu(&self) -> Result<Reply, ModuleError> {
        if self.topics.is_empty() {
            return Err(ModuleError::Unavailable(format!(
                "no topics configured for {}",
                self.name
            )));
        }
        Ok(Reply::text(self.render_menu()))
    }

    async fn execute(
        &self,
        input: &str,
        session: &mut SessionState,
    ) -> Result<ModuleOutcome, ModuleError> {
        let choice = input.trim();
        if choice == BACK_OPTION {
            return Ok(ModuleOutcome::ReturnToMain);
        }

        match self.topic(choice) {
            Some(topic) => {
                session.previous_input = Some(choice.to_string());
                Ok(ModuleOutcome::text(format!(
                    "{}\n\n{}",
                    topic.answer,
                    texts::BACK_HINT
                )))
            }
            None => Ok(ModuleOutcome::text(format!(
                "{}{}",
                texts::INVALID_OPTION,
                self.render_menu()
            ))),
        }
    }
}
