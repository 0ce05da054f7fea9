//! Integration tests for the Store
//!
//! Tests dispatch, state replacement, subscriptions and action history.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use oneway_core::reducer::Reducer;
use oneway_macros::Action;
use oneway_runtime::{Store, StoreConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

// ============================================================================
// Test Fixtures
// ============================================================================

#[derive(Action, Debug, Clone, PartialEq)]
enum CounterAction {
    Increment,
    Add(i64),
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct CounterState {
    count: i64,
}

#[derive(Clone)]
struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => CounterState {
                count: state.count + 1,
            },
            CounterAction::Add(n) => CounterState {
                count: state.count + n,
            },
            CounterAction::Reset => CounterState::default(),
        }
    }
}

fn store() -> Store<CounterReducer> {
    Store::new(CounterState::default(), CounterReducer)
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_dispatch_updates_state() {
    let mut store = store();
    assert_eq!(store.state().count, 0);

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Add(5));
    assert_eq!(store.state().count, 6);

    store.dispatch(CounterAction::Reset);
    assert_eq!(store.state().count, 0);
    assert_eq!(store.dispatched(), 3);
}

#[test]
fn test_dispatch_returns_action() {
    let mut store = store();
    let returned = store.dispatch(CounterAction::Add(2));
    assert_eq!(returned, CounterAction::Add(2));
}

#[test]
fn test_snapshots_are_not_affected_by_later_dispatches() {
    let mut store = store();
    store.dispatch(CounterAction::Increment);
    let snapshot = store.state().clone();

    store.dispatch(CounterAction::Add(10));

    assert_eq!(snapshot.count, 1);
    assert_eq!(store.state().count, 11);
}

#[test]
fn test_stores_are_isolated() {
    let mut store1 = store();
    let mut store2 = store();

    store1.dispatch(CounterAction::Increment);
    store1.dispatch(CounterAction::Increment);
    store2.dispatch(CounterAction::Increment);

    assert_eq!(store1.state().count, 2);
    assert_eq!(store2.state().count, 1);
}

#[test]
fn test_into_state() {
    let mut store = store();
    store.dispatch(CounterAction::Add(7));
    assert_eq!(store.into_state(), CounterState { count: 7 });
}

// ============================================================================
// Subscriptions
// ============================================================================

#[test]
fn test_subscribers_see_new_state_and_action() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = store();

    let sink = Rc::clone(&seen);
    store.subscribe(move |state: &CounterState, action: &CounterAction| {
        sink.borrow_mut().push((state.count, action.clone()));
    });

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Add(3));

    assert_eq!(
        *seen.borrow(),
        vec![(1, CounterAction::Increment), (4, CounterAction::Add(3))]
    );
}

#[test]
fn test_subscribers_run_in_subscription_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut store = store();

    for tag in ["first", "second"] {
        let order = Rc::clone(&order);
        store.subscribe(move |_: &CounterState, _: &CounterAction| order.borrow_mut().push(tag));
    }

    store.dispatch(CounterAction::Increment);
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn test_unsubscribe() {
    let calls = Rc::new(RefCell::new(0));
    let mut store = store();

    let counter = Rc::clone(&calls);
    let id = store.subscribe(move |_: &CounterState, _: &CounterAction| *counter.borrow_mut() += 1);

    store.dispatch(CounterAction::Increment);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.dispatch(CounterAction::Increment);

    assert_eq!(*calls.borrow(), 1);
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_history_is_bounded() {
    let config = StoreConfig::default().with_history_capacity(2);
    let mut store = Store::with_config(CounterState::default(), CounterReducer, config);

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Add(2));
    store.dispatch(CounterAction::Reset);

    let history: Vec<_> = store.history().cloned().collect();
    assert_eq!(history, vec![CounterAction::Add(2), CounterAction::Reset]);
    assert_eq!(store.dispatched(), 3);
}

#[test]
fn test_history_disabled() {
    let config = StoreConfig::default().with_history_capacity(0);
    let mut store = Store::with_config(CounterState::default(), CounterReducer, config);

    store.dispatch(CounterAction::Increment);

    assert_eq!(store.history().count(), 0);
    assert_eq!(store.state().count, 1);
}

#[test]
fn test_unbounded_history_capacity_does_not_preallocate() {
    let config = StoreConfig::default().with_history_capacity(usize::MAX);
    let mut store = Store::with_config(CounterState::default(), CounterReducer, config);

    store.dispatch(CounterAction::Add(4));

    assert_eq!(store.state().count, 4);
    assert_eq!(store.history().count(), 1);
}

#[test]
fn test_config_and_reducer_accessors() {
    let config = StoreConfig::default().with_history_capacity(5);
    let store = Store::with_config(CounterState::default(), CounterReducer, config);

    assert_eq!(*store.config(), config);
    let next = store
        .reducer()
        .reduce(store.state(), &CounterAction::Increment);
    assert_eq!(next.count, 1);
    assert_eq!(store.state().count, 0);
}

// ============================================================================
// Logging
// ============================================================================

/// Writer collecting formatted log output in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_dispatch_logs_action_type() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut store = store();
        store.dispatch(CounterAction::Add(2));
    });

    let output = logs.contents();
    assert!(output.contains("store_dispatch"), "missing span: {output}");
    assert!(output.contains("action_type"), "missing field: {output}");
    assert!(output.contains("ADD"), "missing action type: {output}");
    assert!(output.contains("Processing action"), "missing debug event: {output}");
    assert!(output.contains("State replaced"), "missing trace event: {output}");
}
