//! End-to-end walks through the overlay, from open signal to navigation.

use super::common::{blog_session, ids, HostCall};
use blogsift::{search_default, Field, KeyEvent, OPEN_SIGNAL};

#[test]
fn test_cpp_query_then_arrow_down() {
    let (mut session, _host) = blog_session();
    session.signal(OPEN_SIGNAL);
    session.set_query("cpp");

    let snapshot = session.snapshot();
    let cmake = snapshot
        .results
        .iter()
        .find(|r| r.title == "CMake Modern Targets")
        .expect("CMake post in results");
    assert!(cmake.matched_field(Field::Tags) || cmake.matched_field(Field::Title));
    assert!(cmake.score > 0.0);
    assert_eq!(snapshot.active_index, Some(0));

    session.handle_key(&KeyEvent::new("ArrowDown"));
    let expected = if snapshot.results.len() >= 2 { 1 } else { 0 };
    assert_eq!(session.snapshot().active_index, Some(expected));
}

#[test]
fn test_emptying_the_query() {
    let (mut session, _host) = blog_session();
    session.open();
    session.set_query("rust");
    assert!(!session.snapshot().results.is_empty());

    session.set_query("");
    let snapshot = session.snapshot();
    assert!(snapshot.results.is_empty());
    assert_eq!(snapshot.active_index, None);
}

#[test]
fn test_close_at_index_three_then_reopen() {
    let (mut session, _host) = blog_session();
    session.open();
    // Enough terms to get at least four hits.
    session.set_query("rust memory build channels");
    assert!(session.snapshot().results.len() >= 4);
    session.hover(3);
    assert_eq!(session.snapshot().active_index, Some(3));

    session.close();
    session.open();
    let snapshot = session.snapshot();
    assert!(snapshot.is_open);
    assert_eq!(snapshot.active_index, None);
    assert!(snapshot.results.is_empty());
    assert_eq!(snapshot.query, "");
}

#[test]
fn test_type_navigate_confirm() {
    let (mut session, host) = blog_session();
    session.signal(OPEN_SIGNAL);
    for prefix in ["b", "bu", "bui", "buil", "build"] {
        session.set_query(prefix);
    }
    let expected = ids(&search_default(session.index(), "build"))
        .into_iter()
        .map(str::to_string)
        .collect::<Vec<_>>();
    let shown: Vec<String> = session.snapshot().results.iter().map(|r| r.id.clone()).collect();
    assert_eq!(shown, expected);

    session.handle_key(&KeyEvent::new("ArrowDown").composing());
    session.handle_key(&KeyEvent::new("ArrowDown"));
    session.handle_key(&KeyEvent::new("ArrowDown"));
    session.handle_key(&KeyEvent::new("ArrowUp"));
    assert!(session.handle_key(&KeyEvent::new("Enter")).prevent_default);

    assert_eq!(host.navigations(), vec![format!("/blog/{}", expected[2])]);
    assert!(session.is_open());
    assert_eq!(host.count(&HostCall::Navigate(format!("/blog/{}", expected[2]))), 1);
}
