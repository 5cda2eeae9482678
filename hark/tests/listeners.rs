//! Listener types and combinators registered on an emitter.

use hark::{
    BoxListener, Emitter, Envelope, Listener,
    listeners::LoggingListener,
    testing::{CountingListener, RecordingListener},
};
use std::sync::{Arc, Mutex};

mod common;
use common::Saved;

#[test]
fn test_filter_combinator_on_emitter() {
    let emitter = Emitter::<Saved>::new();
    let large = RecordingListener::<Saved>::new();
    emitter
        .on_listener("saved", large.clone().filter(|msg: &Saved| msg.bytes > 1024))
        .unwrap();

    for (path, bytes) in [("a", 10), ("b", 4096), ("c", 2048)] {
        emitter.emit(
            "saved",
            &Saved {
                path: path.to_string(),
                bytes,
            },
        );
    }

    let paths: Vec<String> = large.messages().into_iter().map(|m| m.path).collect();
    assert_eq!(paths, vec!["b", "c"]);
}

#[test]
fn test_inspect_combinator_runs_first() {
    let emitter = Emitter::<Envelope<u32>>::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let inspected = log.clone();
    let handled = log.clone();
    let listener = (move |msg: &Envelope<u32>| {
        handled.lock().unwrap().push(format!("handle {}", msg.data));
    })
    .inspect(move |msg: &Envelope<u32>| {
        inspected.lock().unwrap().push(format!("inspect {}", msg.data));
    });
    emitter.on_listener("n", listener).unwrap();

    emitter.emit("n", &Envelope::new(7));

    assert_eq!(*log.lock().unwrap(), vec!["inspect 7", "handle 7"]);
}

#[test]
fn test_boxed_listener_can_be_registered_under_many_events() {
    let emitter = Emitter::<Envelope<&'static str>>::new();
    let counter = CountingListener::new();
    let shared: BoxListener<Envelope<&'static str>> = counter.clone().boxed();

    emitter.on_listener("a", shared.clone()).unwrap();
    emitter.on_listener("b", shared).unwrap();
    emitter.emit("a", &Envelope::new("x"));
    emitter.emit("b", &Envelope::new("x"));

    assert_eq!(counter.count(), 2);
}

#[test]
fn test_logging_listener_registers_and_observes() {
    let emitter = Emitter::<Saved>::new();
    emitter
        .on_listener("saved", LoggingListener::labelled("audit"))
        .unwrap();

    let invoked = emitter.emit(
        "saved",
        &Saved {
            path: "log.txt".to_string(),
            bytes: 1,
        },
    );
    assert_eq!(invoked, 1);
}
