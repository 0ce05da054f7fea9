//! Todo list managed through actions and a pure reducer.
//!
//! Every change to the list is a [`TodoAction`] dispatched to a
//! [`Store`](oneway_runtime::Store). The [`AppReducer`] computes a brand new
//! [`AppState`] for each action; earlier states are never modified.
//!
//! - Add, delete, edit and toggle single todos
//! - Toggle all todos at once and clear the completed ones
//! - Read actions from JSON scripts
//!
//! # Quick Start
//!
//! ```
//! use oneway_runtime::Store;
//! use todo::{AppState, TodoId, add_todo, app_reducer, clear_completed, complete_todo};
//!
//! let mut store = Store::new(AppState::new(), app_reducer());
//!
//! store.dispatch(add_todo("Buy milk"));
//! store.dispatch(add_todo("Write documentation"));
//! store.dispatch(complete_todo(TodoId::new(0)));
//! assert_eq!(store.state().completed_count(), 1);
//!
//! store.dispatch(clear_completed());
//! assert_eq!(store.state().count(), 1);
//! assert_eq!(store.state().todos[0].text, "Write documentation");
//! ```

pub mod actions;
pub mod error;
pub mod reducer;
pub mod script;
pub mod types;

// Re-export commonly used types
pub use actions::{
    ActionEnvelope, TodoAction, add_todo, clear_completed, complete_all, complete_todo,
    delete_todo, update_todo,
};
pub use error::{ScriptError, UnknownActionType};
pub use reducer::{AppReducer, TodosReducer, app_reducer};
pub use script::{load_script, parse_script};
pub use types::{AppState, TodoId, TodoItem, TodoPatch};
