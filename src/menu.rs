//! Menu descriptors and the text renderer
//!
//! A `MenuDescriptor` is built on demand by whoever owns the menu (the
//! dispatcher for the main menu, a business module for its own submenu)
//! and rendered immediately.

pub mod texts;

use crate::modules::ModuleName;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Option number of the built-in exit entry; never registered as a module
pub const EXIT_OPTION: u32 = 14;

/// Title plus numbered options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDescriptor {
    pub title: String,
    pub options: BTreeMap<u32, String>,
}

impl MenuDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            options: BTreeMap::new(),
        }
    }

    pub fn with_option(mut self, key: u32, label: impl Into<String>) -> Self {
        self.options.insert(key, label.into());
        self
    }

    /// Title, a blank line, then one `"<key> - <label>"` line per option in
    /// ascending key order.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n", self.title);
        for (key, label) in &self.options {
            // Writing into a String cannot fail
            let _ = writeln!(out, "{key} - {label}");
        }
        out
    }
}

/// The fixed top-level menu: one entry per business module plus exit.
pub fn main_menu() -> MenuDescriptor {
    ModuleName::ALL
        .iter()
        .fold(MenuDescriptor::new(texts::MAIN_MENU_TITLE), |menu, name| {
            menu.with_option(name.option(), name.label())
        })
        .with_option(EXIT_OPTION, texts::EXIT_LABEL)
}

/// Welcome banner followed by the rendered main menu
pub fn welcome() -> String {
    format!("{}{}", texts::WELCOME_BANNER, main_menu().render())
}

/// Inline correction followed by the rendered main menu
pub fn invalid_option() -> String {
    format!("{}{}", texts::INVALID_OPTION, main_menu().render())
}
