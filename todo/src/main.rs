//! Todo demo binary.
//!
//! Without arguments, runs a built-in sequence of actions. With a path,
//! replays the action script found there. Each dispatched action and the
//! resulting state are printed as JSON.
//!
//! ```text
//! cargo run -p todo
//! RUST_LOG=oneway_runtime=trace cargo run -p todo -- actions.json
//! ```

use anyhow::Context;
use oneway_core::action::Action;
use oneway_runtime::{Store, StoreConfig};
use todo::{
    AppReducer, AppState, TodoPatch, add_todo, app_reducer, clear_completed, complete_all,
    complete_todo, delete_todo, load_script, update_todo,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=info,oneway_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = StoreConfig::from_env().context("invalid store configuration")?;
    let mut store = Store::with_config(AppState::new(), app_reducer(), config);

    store.subscribe(|state: &AppState, action: &todo::TodoAction| {
        tracing::info!(
            action_type = action.action_type(),
            todos = state.count(),
            completed = state.completed_count(),
            "State changed"
        );
    });

    println!("=== Todo Example ===\n");
    print_state(&store)?;

    match std::env::args().nth(1) {
        Some(path) => {
            let actions =
                load_script(&path).with_context(|| format!("could not load script {path}"))?;
            tracing::info!(path = %path, actions = actions.len(), "Replaying action script");
            for action in actions {
                dispatch(&mut store, action)?;
            }
        }
        None => run_demo(&mut store)?,
    }

    tracing::info!(
        dispatched = store.dispatched(),
        history = store.history().count(),
        "Done"
    );
    println!("\n=== Demo Complete ===");
    Ok(())
}

fn run_demo(store: &mut Store<AppReducer>) -> anyhow::Result<()> {
    dispatch(store, add_todo("First todo"))?;
    dispatch(store, add_todo("Second todo"))?;

    let todo_to_delete = store
        .state()
        .todos
        .first()
        .cloned()
        .context("the demo expects at least one todo")?;
    println!("todoToDelete: {}", serde_json::to_string(&todo_to_delete)?);
    dispatch(store, delete_todo(todo_to_delete))?;

    dispatch(store, add_todo("Third todo"))?;

    let second = store
        .state()
        .todos
        .first()
        .map(|todo| todo.id)
        .context("the demo expects a remaining todo")?;
    dispatch(
        store,
        update_todo(TodoPatch::for_id(second).with_text("Second todo (edited)")),
    )?;
    dispatch(store, complete_todo(second))?;

    dispatch(store, complete_all())?;
    dispatch(store, complete_all())?;
    dispatch(store, complete_todo(second))?;
    dispatch(store, clear_completed())?;

    Ok(())
}

fn dispatch(store: &mut Store<AppReducer>, action: todo::TodoAction) -> anyhow::Result<()> {
    let action = store.dispatch(action);
    println!("\n>>> {}", serde_json::to_string(&action)?);
    print_state(store)
}

fn print_state(store: &Store<AppReducer>) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(store.state())?);
    Ok(())
}
