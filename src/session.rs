//! Per-conversation session state
//!
//! The caller owns one `SessionState` per conversation and threads it
//! through every dispatch call. The dispatcher and the business modules
//! mutate it in place; loading and saving it between turns is the caller's
//! concern.

use crate::modules::ModuleName;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Literal used for the top-level menu in the external representation
pub const MAIN_MENU_ID: &str = "main";

/// Which menu the conversation is currently in
///
/// Serialized as `"main"` or the module's canonical name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CurrentMenu {
    #[default]
    Main,
    Module(ModuleName),
}

#[derive(Debug, Error)]
#[error("unknown menu identifier: {0}")]
pub struct UnknownMenu(pub String);

impl TryFrom<String> for CurrentMenu {
    type Error = UnknownMenu;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == MAIN_MENU_ID {
            return Ok(CurrentMenu::Main);
        }
        value
            .parse::<ModuleName>()
            .map(CurrentMenu::Module)
            .map_err(|_| UnknownMenu(value))
    }
}

impl From<CurrentMenu> for String {
    fn from(menu: CurrentMenu) -> Self {
        menu.to_string()
    }
}

impl fmt::Display for CurrentMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrentMenu::Main => f.write_str(MAIN_MENU_ID),
            CurrentMenu::Module(name) => f.write_str(name.as_str()),
        }
    }
}

/// Dispatcher view of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Nothing shown yet in this conversation epoch
    Welcome,
    /// At the top-level menu
    Main,
    /// Delegating to a business module
    Submenu(ModuleName),
}

impl MenuState {
    pub fn label(self) -> &'static str {
        match self {
            MenuState::Welcome => "welcome",
            MenuState::Main => MAIN_MENU_ID,
            MenuState::Submenu(name) => name.as_str(),
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mutable record threaded through every turn
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub has_shown_welcome: bool,
    #[serde(default)]
    pub current_menu: CurrentMenu,
    /// Scratch field owned by the module currently in control
    #[serde(default)]
    pub selected_city: Option<String>,
    /// Scratch field owned by the module currently in control
    #[serde(default)]
    pub previous_input: Option<String>,
}

impl SessionState {
    /// Fresh state at the start of a conversation epoch
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu_state(&self) -> MenuState {
        if !self.has_shown_welcome {
            return MenuState::Welcome;
        }
        match self.current_menu {
            CurrentMenu::Main => MenuState::Main,
            CurrentMenu::Module(name) => MenuState::Submenu(name),
        }
    }

    /// Back to the main menu with the welcome already shown.
    ///
    /// Clears every scratch field so nothing leaks from one submenu visit
    /// into the next.
    pub fn reset_to_main(&mut self) {
        self.current_menu = CurrentMenu::Main;
        self.has_shown_welcome = true;
        self.selected_city = None;
        self.previous_input = None;
    }

    /// Close the current epoch; the next turn shows the welcome again.
    pub fn end_epoch(&mut self) {
        self.reset_to_main();
        self.has_shown_welcome = false;
    }

    pub fn enter(&mut self, module: ModuleName) {
        self.current_menu = CurrentMenu::Module(module);
    }
}
