//! Selection and keyboard invariants over random event sequences.

use super::common::{blog_index, HostCall};
use blogsift::testing::{make_result, RecordingHost};
use blogsift::{classify, ControlAction, KeyClass, KeyEvent, SearchSession, SelectionController};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Open,
    Close,
    Query(String),
    Key(KeyEvent),
    Hover(usize),
    Backdrop(bool),
    Signal(bool),
}

fn key_strategy() -> impl Strategy<Value = KeyEvent> {
    (
        prop::sample::select(vec!["Escape", "ArrowDown", "ArrowUp", "Enter", "a", "Process", "Tab"]),
        any::<bool>(),
        prop::option::of(prop::sample::select(vec![13u32, 27, 38, 40, 65, 229])),
    )
        .prop_map(|(key, is_composing, key_code)| KeyEvent {
            key: key.to_string(),
            is_composing,
            key_code,
        })
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Open),
        Just(Step::Close),
        prop::sample::select(vec!["", "r", "rust", "build", "cpp", "c++", "zzz", "mem"])
            .prop_map(|q| Step::Query(q.to_string())),
        key_strategy().prop_map(Step::Key),
        (0usize..6).prop_map(Step::Hover),
        any::<bool>().prop_map(Step::Backdrop),
        any::<bool>().prop_map(Step::Signal),
    ]
}

proptest! {
    #[test]
    fn prop_wraparound(n in 1usize..20, start in 0usize..20) {
        let start = start % n;
        let mut controller = SelectionController::new();
        controller.open();
        controller.set_results("q", (0..n).map(|i| make_result(&format!("p{i}"))).collect());
        controller.select(start);

        for _ in 0..n {
            controller.move_next();
        }
        prop_assert_eq!(controller.selection().unwrap().active_index(), Some(start));
        for _ in 0..n {
            controller.move_prev();
        }
        prop_assert_eq!(controller.selection().unwrap().active_index(), Some(start));
    }

    #[test]
    fn prop_control_keys_win_over_composition(event in key_strategy()) {
        let class = classify(&event);
        match ControlAction::from_key(&event.key) {
            Some(action) => prop_assert_eq!(class, KeyClass::Control(action)),
            None if event.is_composition() => prop_assert_eq!(class, KeyClass::Composing),
            None => prop_assert_eq!(class, KeyClass::PassThrough),
        }
    }

    #[test]
    fn prop_session_invariants_hold(steps in prop::collection::vec(step_strategy(), 0..40)) {
        let host = RecordingHost::new();
        let mut session = SearchSession::new(blog_index(), host.clone());

        for step in steps {
            match step {
                Step::Open => session.open(),
                Step::Close => session.close(),
                Step::Query(q) => session.set_query(&q),
                Step::Key(event) => {
                    let was_open = session.is_open();
                    let outcome = session.handle_key(&event);
                    if !was_open {
                        prop_assert!(!outcome.prevent_default);
                    }
                }
                Step::Hover(i) => session.hover(i),
                Step::Backdrop(hit) => session.backdrop_click(hit),
                Step::Signal(matching) => {
                    session.signal(if matching { "open-search" } else { "open-menu" });
                }
            }

            // Resources are held exactly while open.
            prop_assert_eq!(host.keyboard_attached(), session.is_open());
            prop_assert_eq!(host.scroll_locked(), session.is_open());

            // Cursor is in range iff there are results.
            let snapshot = session.snapshot();
            match snapshot.active_index {
                Some(i) => prop_assert!(i < snapshot.results.len()),
                None => prop_assert!(snapshot.results.is_empty()),
            }
        }

        drop(session);
        prop_assert_eq!(
            host.count(&HostCall::SubscribeKeyboard),
            host.count(&HostCall::UnsubscribeKeyboard)
        );
        prop_assert_eq!(host.count(&HostCall::LockScroll), host.count(&HostCall::UnlockScroll));
    }
}
