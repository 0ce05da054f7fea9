//! Integration tests for the todo list with a Store
//!
//! These tests drive the full dispatch flow: constructors build actions,
//! the store runs the root reducer and replaces its state.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use oneway_runtime::{Store, StoreConfig};
use std::cell::RefCell;
use std::rc::Rc;
use todo::{
    AppReducer, AppState, TodoAction, TodoId, TodoItem, TodoPatch, add_todo, app_reducer,
    clear_completed, complete_all, complete_todo, delete_todo, load_script, parse_script,
    update_todo,
};

fn store_with(todos: Vec<TodoItem>) -> Store<AppReducer> {
    Store::new(AppState::with_todos(todos), app_reducer())
}

#[test]
fn test_walkthrough_with_store() {
    oneway_testing::init_test_tracing();
    let mut store = store_with(vec![TodoItem::new(TodoId::new(1), "a")]);

    store.dispatch(add_todo("b"));
    assert_eq!(
        store.state().todos,
        vec![
            TodoItem::new(TodoId::new(1), "a"),
            TodoItem::new(TodoId::new(2), "b")
        ]
    );

    store.dispatch(complete_todo(TodoId::new(2)));
    assert!(store.state().todos[1].completed);

    store.dispatch(clear_completed());
    assert_eq!(store.state().todos, vec![TodoItem::new(TodoId::new(1), "a")]);
}

#[test]
fn test_first_demo_sequence() {
    let mut store = store_with(Vec::new());

    store.dispatch(add_todo("First todo"));
    store.dispatch(add_todo("Second todo"));

    let todo_to_delete = store.state().todos[0].clone();
    let returned = store.dispatch(delete_todo(todo_to_delete.clone()));

    assert_eq!(returned, delete_todo(todo_to_delete));
    assert_eq!(
        store.state().todos,
        vec![TodoItem::new(TodoId::new(1), "Second todo")]
    );
}

#[test]
fn test_old_snapshots_survive_dispatch() {
    let mut store = store_with(Vec::new());
    store.dispatch(add_todo("keep me"));
    let snapshot = store.state().clone();

    store.dispatch(update_todo(
        TodoPatch::for_id(TodoId::new(0)).with_text("changed"),
    ));
    store.dispatch(complete_all());

    assert_eq!(snapshot.todos, vec![TodoItem::new(TodoId::new(0), "keep me")]);
    assert_eq!(store.state().todos[0].text, "changed");
    assert!(store.state().todos[0].completed);
}

#[test]
fn test_ids_stay_unique_across_deletes() {
    let mut store = store_with(Vec::new());
    for text in ["a", "b", "c"] {
        store.dispatch(add_todo(text));
    }
    store.dispatch(delete_todo(TodoId::new(1)));
    store.dispatch(add_todo("d"));
    store.dispatch(delete_todo(TodoId::new(3)));
    store.dispatch(add_todo("e"));

    let mut ids: Vec<TodoId> = store.state().todos.iter().map(|t| t.id).collect();
    let len = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), len);
}

#[test]
fn test_subscriber_observes_each_dispatch() {
    let counts = Rc::new(RefCell::new(Vec::new()));
    let mut store = store_with(Vec::new());

    let sink = Rc::clone(&counts);
    store.subscribe(move |state: &AppState, _: &TodoAction| {
        sink.borrow_mut().push(state.count());
    });

    store.dispatch(add_todo("a"));
    store.dispatch(add_todo("b"));
    store.dispatch(delete_todo(TodoId::new(7)));

    assert_eq!(*counts.borrow(), vec![1, 2, 2]);
}

#[test]
fn test_history_records_dispatched_actions() {
    let config = StoreConfig::default().with_history_capacity(2);
    let mut store = Store::with_config(AppState::new(), app_reducer(), config);

    store.dispatch(add_todo("a"));
    store.dispatch(complete_all());
    store.dispatch(clear_completed());

    let history: Vec<TodoAction> = store.history().cloned().collect();
    assert_eq!(history, vec![complete_all(), clear_completed()]);
}

#[test]
fn test_replay_script() {
    let actions = parse_script(
        r#"[
            {"type": "ADD_TODO", "payload": {"text": "Buy milk"}},
            {"type": "ADD_TODO", "payload": {"text": "Walk dog"}},
            {"type": "EDIT_TODO", "payload": {"id": 1, "text": "Walk the dog"}},
            {"type": "COMPLETE_TODO", "payload": {"id": 0}},
            {"type": "DELETE_TODO"},
            {"type": "CLEAR_COMPLETED"}
        ]"#,
    )
    .unwrap();

    let mut store = store_with(Vec::new());
    for action in actions {
        store.dispatch(action);
    }

    assert_eq!(
        store.state().todos,
        vec![TodoItem::new(TodoId::new(1), "Walk the dog")]
    );
}

#[test]
fn test_state_serializes_as_named_slices() {
    let mut store = store_with(Vec::new());
    store.dispatch(add_todo("a"));

    let json = serde_json::to_value(store.state()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "todos": [ { "id": 0, "text": "a", "completed": false } ] })
    );
}

#[test]
fn test_replay_shipped_demo_script() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/actions.json");
    let actions = load_script(path).unwrap();
    assert_eq!(actions.len(), 10);

    let mut store = store_with(Vec::new());
    for action in actions {
        store.dispatch(action);
    }

    assert_eq!(
        store.state().todos,
        vec![TodoItem::new(TodoId::new(0), "Use Redux with Typescript")]
    );
}
