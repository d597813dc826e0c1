//! Pure routing decision for one turn
//!
//! Given the session and the raw input, decide which transition applies.
//! No I/O and no mutation: the dispatcher applies the decision.

use crate::menu::EXIT_OPTION;
use crate::modules::ModuleName;
use crate::session::{MenuState, SessionState};

/// Input that leaves any submenu, compared case-insensitively and untrimmed
pub const QUIT_SENTINEL: &str = "q";

/// Which transition a turn takes, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// First turn of an epoch; the input is ignored
    Welcome,
    /// Quit sentinel typed inside a submenu
    QuitToMain,
    /// Hand the turn to the module the session is in
    Delegate(ModuleName),
    /// Interpret the input as a main-menu choice
    MainMenu(MainSelection),
}

/// Parsed main-menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainSelection {
    /// Not an integer, or outside `1..=EXIT_OPTION`
    Invalid,
    Exit,
    Open(u32),
}

impl MainSelection {
    /// Leading-integer parse: leading whitespace and an optional sign, then
    /// the first run of digits. Anything after the digits is ignored, so
    /// `"2abc"` selects 2 and `"1.5"` selects 1.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let digits = unsigned
            .split(|c: char| !c.is_ascii_digit())
            .next()
            .unwrap_or_default();

        match digits.parse::<u32>() {
            // Negative values are out of range, and so is "-0"
            Ok(_) if negative => MainSelection::Invalid,
            Ok(EXIT_OPTION) => MainSelection::Exit,
            Ok(option) if (1..EXIT_OPTION).contains(&option) => MainSelection::Open(option),
            _ => MainSelection::Invalid,
        }
    }
}

pub fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case(QUIT_SENTINEL)
}

pub fn route(session: &SessionState, input: &str) -> Route {
    match session.menu_state() {
        MenuState::Welcome => Route::Welcome,
        MenuState::Submenu(_) if is_quit(input) => Route::QuitToMain,
        MenuState::Submenu(name) => Route::Delegate(name),
        MenuState::Main => Route::MainMenu(MainSelection::parse(input)),
    }
}
