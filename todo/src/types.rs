//! Domain types for the todo list.
//!
//! A todo list is an ordered `Vec<TodoItem>`. Order is the display order;
//! identity is the [`TodoId`], looked up by linear scan. Items are never
//! mutated in place: updates build a new item through the `with_*` copy
//! constructors.

use serde::{Deserialize, Serialize};

/// Identifier of a todo item, assigned by the reducer on creation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Identifier given to the first todo of an empty list
    pub const FIRST: Self = Self(0);

    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the following identifier, or `None` once the id space is exhausted
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Description of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed, todo item
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Copy of this item with `text` replaced
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Copy of this item with `completed` replaced
    #[must_use]
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            completed,
            ..self.clone()
        }
    }

    /// Copy of this item with every field present in `patch` applied
    ///
    /// The id is an identity and is never overwritten.
    #[must_use]
    pub fn patched(&self, patch: &TodoPatch) -> Self {
        Self {
            id: self.id,
            text: patch.text.clone().unwrap_or_else(|| self.text.clone()),
            completed: patch.completed.unwrap_or(self.completed),
        }
    }
}

/// A full or partial todo, carried as the payload of todo actions
///
/// Absent fields are omitted from JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoPatch {
    /// Target item (ignored when adding)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    /// New text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// New completion flag (ignored when adding)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch carrying only a target id
    #[must_use]
    pub const fn for_id(id: TodoId) -> Self {
        Self {
            id: Some(id),
            text: None,
            completed: None,
        }
    }

    /// Patch carrying only text
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Set the text
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the completion flag
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

impl From<&TodoItem> for TodoPatch {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: Some(item.id),
            text: Some(item.text.clone()),
            completed: Some(item.completed),
        }
    }
}

impl From<TodoItem> for TodoPatch {
    fn from(item: TodoItem) -> Self {
        Self {
            id: Some(item.id),
            text: Some(item.text),
            completed: Some(item.completed),
        }
    }
}

impl From<TodoId> for TodoPatch {
    fn from(id: TodoId) -> Self {
        Self::for_id(id)
    }
}

/// Application state
///
/// A struct of named slices; the todo list is currently the only one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// The todo list, in display order
    pub todos: Vec<TodoItem>,
}

impl AppState {
    /// Creates an empty state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Creates a state holding `todos`
    #[must_use]
    pub const fn with_todos(todos: Vec<TodoItem>) -> Self {
        Self { todos }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns the number of todos still to do
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.count() - self.completed_count()
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo exists
    #[must_use]
    pub fn exists(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }
}
