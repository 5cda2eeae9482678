//! Registration, limits, removal, and counting.

use hark::{Emitter, EmitterError, ListenerId};
use std::collections::HashSet;

mod common;
use common::{Tally, TextMessage, emitter_with_limit, text};

#[test]
fn test_limit_scenario() {
    let emitter = emitter_with_limit(2);
    let tally = Tally::new();

    let h1 = emitter.on("e", tally.handler("h1")).unwrap();
    emitter.on("e", tally.handler("h2")).unwrap();

    let err = emitter.on("e", tally.handler("h3")).unwrap_err();
    assert_eq!(err.event(), "e");
    assert!(matches!(err, EmitterError::LimitExceeded { limit: 2, .. }));

    emitter.emit("e", &text("x"));
    emitter.emit("e", &text("x"));

    assert_eq!(tally.get("h1"), 2);
    assert_eq!(tally.get("h2"), 2);
    assert_eq!(tally.get("h3"), 0);
    assert_eq!(emitter.count("e"), 2);

    emitter.off("e", h1);
    assert_eq!(emitter.count("e"), 1);

    emitter.remove_all("e");
    assert_eq!(emitter.count("e"), 0);
    assert!(!emitter.contains("e"));
    assert!(emitter.event_names().is_empty());
}

#[test]
fn test_ids_are_unique_across_events_and_removals() {
    let emitter = Emitter::<TextMessage>::new();
    let mut seen = HashSet::new();

    for round in 0..50 {
        let event = if round % 2 == 0 { "even" } else { "odd" };
        let id = if round % 3 == 0 {
            emitter.once(event, |_| {}).unwrap()
        } else {
            emitter.on(event, |_| {}).unwrap()
        };
        assert!(seen.insert(id), "id {id} was handed out twice");

        if round % 5 == 0 {
            emitter.off(event, id);
        }
    }

    emitter.clear();
    let after_clear = emitter.on("even", |_| {}).unwrap();
    assert!(seen.insert(after_clear), "ids must survive clear()");
}

#[test]
fn test_limit_is_per_event() {
    let emitter = emitter_with_limit(1);

    emitter.on("a", |_| {}).unwrap();
    assert!(emitter.on("a", |_| {}).is_err());
    assert!(emitter.once("a", |_| {}).is_err());

    emitter.on("b", |_| {}).unwrap();
    assert_eq!(emitter.count_all(), 2);
}

#[test]
fn test_registration_succeeds_again_below_limit() {
    let emitter = emitter_with_limit(2);
    let first = emitter.on("e", |_| {}).unwrap();
    emitter.on("e", |_| {}).unwrap();
    assert!(emitter.on("e", |_| {}).is_err());

    emitter.off("e", first);
    emitter.on("e", |_| {}).unwrap();
    assert_eq!(emitter.count("e"), 2);
}

#[test]
fn test_zero_limit_is_unlimited() {
    let emitter = emitter_with_limit(0);
    for _ in 0..100 {
        emitter.on("e", |_| {}).unwrap();
    }
    assert_eq!(emitter.count("e"), 100);
    assert_eq!(emitter.max_listeners(), None);
}

#[test]
fn test_off_removes_only_the_target() {
    let emitter = Emitter::<TextMessage>::new();
    let tally = Tally::new();

    let a = emitter.on("e", tally.handler("a")).unwrap();
    emitter.on("e", tally.handler("b")).unwrap();
    emitter.on("e", tally.handler("c")).unwrap();

    emitter.off("e", a);
    assert_eq!(emitter.count("e"), 2);

    emitter.emit("e", &text("x"));
    assert_eq!(tally.get("a"), 0);
    assert_eq!(tally.get("b"), 1);
    assert_eq!(tally.get("c"), 1);
}

#[test]
fn test_absent_events_and_ids_are_not_errors() {
    let emitter = Emitter::<TextMessage>::new();
    let id = emitter.on("known", |_| {}).unwrap();

    emitter.off("unknown", id);
    emitter.off("known", unregistered_id(&emitter));
    emitter.remove_all("unknown");

    assert_eq!(emitter.count("unknown"), 0);
    assert_eq!(emitter.count("known"), 1);
    assert_eq!(emitter.count_all(), 1);
    assert_eq!(emitter.emit("unknown", &text("x")), 0);
}

#[test]
fn test_off_with_id_from_another_event() {
    let emitter = Emitter::<TextMessage>::new();
    let on_a = emitter.on("a", |_| {}).unwrap();
    emitter.on("b", |_| {}).unwrap();

    emitter.off("b", on_a);

    assert_eq!(emitter.count("a"), 1);
    assert_eq!(emitter.count("b"), 1);
}

#[test]
fn test_remove_all_ignores_count() {
    let emitter = Emitter::<TextMessage>::new();
    for _ in 0..10 {
        emitter.on("e", |_| {}).unwrap();
    }
    emitter.on("other", |_| {}).unwrap();

    emitter.remove_all("e");

    assert_eq!(emitter.count("e"), 0);
    assert_eq!(emitter.count_all(), 1);
    assert_eq!(emitter.event_names(), vec!["other".to_string()]);
}

#[test]
fn test_count_all_sums_every_event() {
    let emitter = Emitter::<TextMessage>::new();
    emitter.on("a", |_| {}).unwrap();
    emitter.on("b", |_| {}).unwrap();
    emitter.on("b", |_| {}).unwrap();
    emitter.once("c", |_| {}).unwrap();

    assert_eq!(emitter.count_all(), 4);
    assert_eq!(emitter.event_names(), vec!["a", "b", "c"]);

    emitter.clear();
    assert_eq!(emitter.count_all(), 0);
}

/// An id this emitter has minted but never installed anywhere.
fn unregistered_id(emitter: &Emitter<TextMessage>) -> ListenerId {
    let id = emitter.on("scratch", |_| {}).unwrap();
    emitter.off("scratch", id);
    id
}
