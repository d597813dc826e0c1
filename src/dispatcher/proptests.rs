//! Property-based tests for the dispatcher
//!
//! These tests verify the menu invariants across arbitrary inputs and
//! session shapes.

use super::testing::{echo_registry, RecordingLog};
use super::*;
use crate::menu::EXIT_OPTION;
use crate::session::{CurrentMenu, MenuState};
use futures::executor::block_on;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn test_dispatcher() -> Dispatcher {
    Dispatcher::new(echo_registry()).with_log(Arc::new(RecordingLog::default()))
}

fn run(dispatcher: &Dispatcher, input: &str, session: &mut SessionState) -> Reply {
    block_on(dispatcher.execute(input, session))
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_module_name() -> impl Strategy<Value = ModuleName> {
    proptest::sample::select(ModuleName::ALL.to_vec())
}

fn arb_current_menu() -> impl Strategy<Value = CurrentMenu> {
    prop_oneof![
        Just(CurrentMenu::Main),
        arb_module_name().prop_map(CurrentMenu::Module),
    ]
}

fn arb_scratch() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-zA-Z ]{0,12}")
}

fn arb_session() -> impl Strategy<Value = SessionState> {
    (any::<bool>(), arb_current_menu(), arb_scratch(), arb_scratch()).prop_map(
        |(has_shown_welcome, current_menu, selected_city, previous_input)| SessionState {
            has_shown_welcome,
            current_menu,
            selected_city,
            previous_input,
        },
    )
}

fn arb_submenu_session() -> impl Strategy<Value = SessionState> {
    (arb_module_name(), arb_scratch(), arb_scratch()).prop_map(
        |(name, selected_city, previous_input)| SessionState {
            has_shown_welcome: true,
            current_menu: CurrentMenu::Module(name),
            selected_city,
            previous_input,
        },
    )
}

fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,3}",
        "[a-zA-Z]{0,8}",
        "\\PC{0,16}",
        Just("q".to_string()),
        Just("14".to_string()),
    ]
}

fn main_session() -> SessionState {
    SessionState {
        has_shown_welcome: true,
        ..SessionState::new()
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn welcome_fires_exactly_once(mut session in arb_session(), input in arb_input(), next in arb_input()) {
        session.has_shown_welcome = false;
        let before = session.clone();
        let dispatcher = test_dispatcher();

        let reply = run(&dispatcher, &input, &mut session);
        prop_assert_eq!(reply, Reply::text(menu::welcome()));
        prop_assert!(session.has_shown_welcome);
        // Only the flag moves
        prop_assert_eq!(&session.current_menu, &before.current_menu);
        prop_assert_eq!(&session.selected_city, &before.selected_city);
        prop_assert_eq!(&session.previous_input, &before.previous_input);

        prop_assert_ne!(route(&session, &next), Route::Welcome);
        if session.current_menu == CurrentMenu::Main {
            let reply = run(&dispatcher, &next, &mut session);
            prop_assert!(!reply.as_text().starts_with(texts::WELCOME_BANNER));
        }
    }

    #[test]
    fn quit_sentinel_always_returns_to_main(
        mut session in arb_submenu_session(),
        upper in any::<bool>(),
    ) {
        let dispatcher = test_dispatcher();
        let input = if upper { "Q" } else { "q" };

        let reply = run(&dispatcher, input, &mut session);
        prop_assert_eq!(reply, Reply::text(menu::welcome()));
        prop_assert_eq!(session.menu_state(), MenuState::Main);
        prop_assert!(session.selected_city.is_none());
        prop_assert!(session.previous_input.is_none());
    }

    #[test]
    fn out_of_range_integers_rejected(value in prop_oneof![Just(0i64), 15i64..100_000, -100_000i64..0]) {
        let dispatcher = test_dispatcher();
        let mut session = main_session();
        let before = session.clone();

        let reply = run(&dispatcher, &value.to_string(), &mut session);
        prop_assert_eq!(reply, Reply::text(menu::invalid_option()));
        prop_assert_eq!(session, before);
    }

    #[test]
    fn non_integers_rejected(input in "[a-zA-Z.,!? ]{0,10}") {
        let dispatcher = test_dispatcher();
        let mut session = main_session();
        let before = session.clone();

        let reply = run(&dispatcher, &input, &mut session);
        prop_assert_eq!(reply, Reply::text(menu::invalid_option()));
        prop_assert_eq!(session, before);
    }

    #[test]
    fn padded_quit_is_delegated(
        mut session in arb_submenu_session(),
        quit in prop_oneof![Just("q"), Just("Q")],
        padding in "[ \\t]{1,2}",
    ) {
        let dispatcher = test_dispatcher();
        let name = session.current_menu;
        let input = format!("{padding}{quit}");

        prop_assert!(matches!(route(&session, &input), Route::Delegate(_)));
        let reply = run(&dispatcher, &input, &mut session);
        prop_assert_eq!(reply.as_text(), format!("{name}:{input}"));
        prop_assert_eq!(session.current_menu, name);
    }

    #[test]
    fn leading_integer_selects_option(name in arb_module_name(), suffix in "[a-zA-Z.,!? ]{0,6}") {
        let dispatcher = test_dispatcher();
        let mut session = main_session();

        run(&dispatcher, &format!("{}{suffix}", name.option()), &mut session);
        prop_assert_eq!(session.current_menu, CurrentMenu::Module(name));
    }

    #[test]
    fn every_option_routes_to_its_module(name in arb_module_name()) {
        let dispatcher = test_dispatcher();
        let mut session = main_session();

        let reply = run(&dispatcher, &name.option().to_string(), &mut session);
        let expected = dispatcher
            .registry()
            .lookup_by_option(name.option())
            .map(|d| d.module().menu());
        prop_assert_eq!(Some(Ok(reply)), expected);
        prop_assert_eq!(session.current_menu, CurrentMenu::Module(name));
    }

    #[test]
    fn exit_rearms_welcome(mut session in arb_session(), next in arb_input()) {
        session.has_shown_welcome = true;
        session.current_menu = CurrentMenu::Main;
        let dispatcher = test_dispatcher();

        let reply = run(&dispatcher, &EXIT_OPTION.to_string(), &mut session);
        prop_assert_eq!(reply, Reply::text(texts::GOODBYE));
        prop_assert_eq!(&session, &SessionState::new());

        let reply = run(&dispatcher, &next, &mut session);
        prop_assert_eq!(reply, Reply::text(menu::welcome()));
    }

    #[test]
    fn current_menu_stays_registered(
        mut session in arb_session(),
        inputs in proptest::collection::vec(arb_input(), 1..12),
    ) {
        let dispatcher = test_dispatcher();
        for input in &inputs {
            run(&dispatcher, input, &mut session);
            if let CurrentMenu::Module(name) = session.current_menu {
                prop_assert!(dispatcher.registry().lookup_by_current_menu(name).is_some());
            }
        }
    }
}
