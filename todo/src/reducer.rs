//! Reducer logic for the todo list.
//!
//! [`TodosReducer`] owns the `Vec<TodoItem>` slice; [`AppReducer`] scopes it
//! onto [`AppState::todos`]. Every transition is total: a missing payload or
//! an id that matches nothing returns an equal list.

use crate::actions::TodoAction;
use crate::types::{AppState, TodoId, TodoItem, TodoPatch};
use oneway_core::composition::{ScopedReducer, scope_reducer};
use oneway_core::reducer::Reducer;

/// Reducer for the todo list slice
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Identifier for the next todo added to `todos`
    ///
    /// Max existing id + 1, or [`TodoId::FIRST`] for an empty list. Always
    /// recomputed from the list so it stays correct after deletions.
    /// `None` once the id space is exhausted.
    #[must_use]
    pub fn next_id(todos: &[TodoItem]) -> Option<TodoId> {
        match todos.iter().map(|todo| todo.id).max() {
            Some(max) => max.next(),
            None => Some(TodoId::FIRST),
        }
    }

    fn add(todos: &[TodoItem], patch: &TodoPatch) -> Vec<TodoItem> {
        let Some(id) = Self::next_id(todos) else {
            tracing::warn!("Todo ids exhausted, ignoring add");
            return todos.to_vec();
        };

        let text = patch.text.clone().unwrap_or_default();
        let mut next = Vec::with_capacity(todos.len() + 1);
        next.extend_from_slice(todos);
        next.push(TodoItem::new(id, text));
        next
    }

    fn delete(todos: &[TodoItem], id: TodoId) -> Vec<TodoItem> {
        todos.iter().filter(|todo| todo.id != id).cloned().collect()
    }

    /// Rebuilds the list, replacing the item matching `id` with `update(item)`
    fn replace<F>(todos: &[TodoItem], id: TodoId, update: F) -> Vec<TodoItem>
    where
        F: Fn(&TodoItem) -> TodoItem,
    {
        todos
            .iter()
            .map(|todo| {
                if todo.id == id {
                    update(todo)
                } else {
                    todo.clone()
                }
            })
            .collect()
    }

    fn complete_all(todos: &[TodoItem]) -> Vec<TodoItem> {
        // Vacuously true for an empty list.
        let all_completed = todos.iter().all(|todo| todo.completed);
        todos
            .iter()
            .map(|todo| todo.with_completed(!all_completed))
            .collect()
    }

    fn clear_completed(todos: &[TodoItem]) -> Vec<TodoItem> {
        todos.iter().filter(|todo| !todo.completed).cloned().collect()
    }
}

impl Reducer for TodosReducer {
    type State = Vec<TodoItem>;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        match action {
            TodoAction::AddTodo(Some(patch)) => Self::add(state, patch),

            TodoAction::DeleteTodo(Some(TodoPatch { id: Some(id), .. })) => {
                Self::delete(state, *id)
            }

            TodoAction::UpdateTodo(Some(patch @ TodoPatch { id: Some(id), .. })) => {
                Self::replace(state, *id, |todo| todo.patched(patch))
            }

            TodoAction::CompleteTodo(Some(TodoPatch { id: Some(id), .. })) => {
                Self::replace(state, *id, |todo| todo.with_completed(!todo.completed))
            }

            TodoAction::CompleteAll => Self::complete_all(state),

            TodoAction::ClearCompleted => Self::clear_completed(state),

            // Missing payload, or a payload without a target id
            TodoAction::AddTodo(None)
            | TodoAction::DeleteTodo(_)
            | TodoAction::UpdateTodo(_)
            | TodoAction::CompleteTodo(_) => state.clone(),
        }
    }
}

/// Root reducer over [`AppState`]
pub type AppReducer = ScopedReducer<AppState, Vec<TodoItem>, TodosReducer>;

fn todos_slice(state: &AppState) -> &Vec<TodoItem> {
    &state.todos
}

fn with_todos_slice(_state: &AppState, todos: Vec<TodoItem>) -> AppState {
    AppState { todos }
}

/// Creates the root reducer: [`TodosReducer`] scoped to `AppState::todos`
#[must_use]
pub const fn app_reducer() -> AppReducer {
    scope_reducer(TodosReducer::new(), todos_slice, with_todos_slice)
}
