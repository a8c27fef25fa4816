//! The session's side of the host seam: subscriptions, scroll lock, navigation.

use super::common::{blog_session, HostCall};
use blogsift::{KeyEvent, OPEN_SIGNAL};

#[test]
fn test_open_acquires_in_order() {
    let (mut session, host) = blog_session();
    assert!(session.signal(OPEN_SIGNAL));
    assert_eq!(
        host.calls(),
        vec![HostCall::SubscribeKeyboard, HostCall::LockScroll, HostCall::FocusInput]
    );
    assert!(host.keyboard_attached());
    assert!(host.scroll_locked());
}

#[test]
fn test_repeated_open_does_not_stack_subscriptions() {
    let (mut session, host) = blog_session();
    session.open();
    session.signal(OPEN_SIGNAL);
    session.open();
    assert_eq!(host.count(&HostCall::SubscribeKeyboard), 1);
    assert_eq!(host.count(&HostCall::LockScroll), 1);
}

#[test]
fn test_each_cycle_releases_exactly_once() {
    let (mut session, host) = blog_session();
    for _ in 0..5 {
        session.open();
        session.set_query("rust");
        session.close();
        session.close();
    }
    assert_eq!(host.count(&HostCall::SubscribeKeyboard), 5);
    assert_eq!(host.count(&HostCall::UnsubscribeKeyboard), 5);
    assert_eq!(host.count(&HostCall::LockScroll), 5);
    assert_eq!(host.count(&HostCall::UnlockScroll), 5);
}

#[test]
fn test_escape_releases_everything() {
    let (mut session, host) = blog_session();
    session.open();
    session.set_query("cpp");
    assert!(session.handle_key(&KeyEvent::new("Escape")).prevent_default);
    assert!(!session.is_open());
    assert!(!host.keyboard_attached());
    assert!(!host.scroll_locked());
}

#[test]
fn test_keys_after_close_are_ignored() {
    let (mut session, host) = blog_session();
    session.open();
    session.close();
    let before = host.calls().len();

    for key in ["ArrowDown", "Enter", "Escape"] {
        let outcome = session.handle_key(&KeyEvent::new(key));
        assert!(!outcome.prevent_default);
    }
    assert_eq!(host.calls().len(), before);
    assert!(host.navigations().is_empty());
}

#[test]
fn test_enter_without_results_does_nothing() {
    let (mut session, host) = blog_session();
    session.open();
    session.set_query("zz");
    let outcome = session.handle_key(&KeyEvent::new("Enter"));
    assert!(!outcome.prevent_default);
    assert!(host.navigations().is_empty());
    assert!(session.is_open());
}

#[test]
fn test_arrow_keys_scroll_active_into_view() {
    let (mut session, host) = blog_session();
    session.open();
    session.set_query("build");
    session.handle_key(&KeyEvent::new("ArrowUp"));
    assert_eq!(host.calls().last(), Some(&HostCall::ScrollIntoView(2)));
}

#[test]
fn test_hover_moves_cursor_for_enter() {
    let (mut session, host) = blog_session();
    session.open();
    session.set_query("build");
    session.hover(1);
    session.hover(9);
    session.handle_key(&KeyEvent::new("Enter"));
    assert_eq!(host.navigations(), vec!["/blog/cpp-modules".to_string()]);
}

#[test]
fn test_backdrop_click_only_on_backdrop() {
    let (mut session, host) = blog_session();
    session.open();
    session.backdrop_click(false);
    assert!(host.scroll_locked());
    session.backdrop_click(true);
    assert!(!host.scroll_locked());
    assert!(!session.is_open());
}

#[test]
fn test_dropping_open_session_releases() {
    let (mut session, host) = blog_session();
    session.open();
    drop(session);
    assert!(!host.keyboard_attached());
    assert!(!host.scroll_locked());
}
