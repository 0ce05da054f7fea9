//! Todo actions.
//!
//! Every change to the todo list is one of the [`TodoAction`] variants.
//! Payload-bearing variants hold an `Option<TodoPatch>`: a missing payload
//! makes the action a no-op rather than an error.
//!
//! On the wire an action is a tagged object:
//!
//! ```json
//! { "type": "ADD_TODO", "payload": { "text": "Buy milk" } }
//! ```
//!
//! The constructors below package a payload and perform no validation.

use crate::error::UnknownActionType;
use crate::types::TodoPatch;
use oneway_core::action::Action as _;
use oneway_macros::Action;
use serde::{Deserialize, Serialize};

/// Tag of [`TodoAction::AddTodo`]
pub const ADD_TODO: &str = "ADD_TODO";
/// Tag of [`TodoAction::DeleteTodo`]
pub const DELETE_TODO: &str = "DELETE_TODO";
/// Tag of [`TodoAction::UpdateTodo`]
pub const EDIT_TODO: &str = "EDIT_TODO";
/// Tag of [`TodoAction::CompleteTodo`]
pub const COMPLETE_TODO: &str = "COMPLETE_TODO";
/// Tag of [`TodoAction::CompleteAll`]
pub const COMPLETE_ALL: &str = "COMPLETE_ALL";
/// Tag of [`TodoAction::ClearCompleted`]
pub const CLEAR_COMPLETED: &str = "CLEAR_COMPLETED";

/// Actions that change the todo list
#[derive(Action, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ActionEnvelope", into = "ActionEnvelope")]
pub enum TodoAction {
    /// Append a new todo built from the payload's text
    AddTodo(Option<TodoPatch>),

    /// Remove the todo whose id matches the payload's id
    DeleteTodo(Option<TodoPatch>),

    /// Apply the payload's fields to the todo whose id matches
    #[action(rename = "EDIT_TODO")]
    UpdateTodo(Option<TodoPatch>),

    /// Toggle completion of the todo whose id matches
    CompleteTodo(Option<TodoPatch>),

    /// Mark every todo completed, or every todo active if all are completed
    CompleteAll,

    /// Drop every completed todo
    ClearCompleted,
}

impl TodoAction {
    /// The payload, if this action carries one
    #[must_use]
    pub const fn payload(&self) -> Option<&TodoPatch> {
        match self {
            Self::AddTodo(payload)
            | Self::DeleteTodo(payload)
            | Self::UpdateTodo(payload)
            | Self::CompleteTodo(payload) => payload.as_ref(),
            Self::CompleteAll | Self::ClearCompleted => None,
        }
    }
}

/// Creates an [`TodoAction::AddTodo`] for `text`
#[must_use]
pub fn add_todo(text: impl Into<String>) -> TodoAction {
    TodoAction::AddTodo(Some(TodoPatch::text(text)))
}

/// Creates a [`TodoAction::DeleteTodo`] targeting `todo`
///
/// Accepts a full item, a patch, or a bare [`TodoId`](crate::types::TodoId).
#[must_use]
pub fn delete_todo(todo: impl Into<TodoPatch>) -> TodoAction {
    TodoAction::DeleteTodo(Some(todo.into()))
}

/// Creates a [`TodoAction::UpdateTodo`] from a full or partial todo
#[must_use]
pub fn update_todo(todo: impl Into<TodoPatch>) -> TodoAction {
    TodoAction::UpdateTodo(Some(todo.into()))
}

/// Creates a [`TodoAction::CompleteTodo`] targeting `todo`
#[must_use]
pub fn complete_todo(todo: impl Into<TodoPatch>) -> TodoAction {
    TodoAction::CompleteTodo(Some(todo.into()))
}

/// Creates a [`TodoAction::CompleteAll`]
#[must_use]
pub const fn complete_all() -> TodoAction {
    TodoAction::CompleteAll
}

/// Creates a [`TodoAction::ClearCompleted`]
#[must_use]
pub const fn clear_completed() -> TodoAction {
    TodoAction::ClearCompleted
}

/// Wire representation of a [`TodoAction`]: `{ "type": ..., "payload": ... }`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    /// Action type tag
    #[serde(rename = "type")]
    pub action_type: String,
    /// Optional payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<TodoPatch>,
}

impl From<TodoAction> for ActionEnvelope {
    fn from(action: TodoAction) -> Self {
        let action_type = action.action_type().to_string();
        let payload = match action {
            TodoAction::AddTodo(payload)
            | TodoAction::DeleteTodo(payload)
            | TodoAction::UpdateTodo(payload)
            | TodoAction::CompleteTodo(payload) => payload,
            TodoAction::CompleteAll | TodoAction::ClearCompleted => None,
        };
        Self {
            action_type,
            payload,
        }
    }
}

impl TryFrom<ActionEnvelope> for TodoAction {
    type Error = UnknownActionType;

    fn try_from(envelope: ActionEnvelope) -> Result<Self, Self::Error> {
        let ActionEnvelope {
            action_type,
            payload,
        } = envelope;

        // Payloads sent with COMPLETE_ALL / CLEAR_COMPLETED are ignored.
        match action_type.as_str() {
            ADD_TODO => Ok(Self::AddTodo(payload)),
            DELETE_TODO => Ok(Self::DeleteTodo(payload)),
            EDIT_TODO => Ok(Self::UpdateTodo(payload)),
            COMPLETE_TODO => Ok(Self::CompleteTodo(payload)),
            COMPLETE_ALL => Ok(Self::CompleteAll),
            CLEAR_COMPLETED => Ok(Self::ClearCompleted),
            _ => Err(UnknownActionType(action_type)),
        }
    }
}
