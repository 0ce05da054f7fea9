//! Error types for the todo crate.
//!
//! The reducer itself never fails. Errors only come from reading actions
//! from outside the process.

use std::path::PathBuf;
use thiserror::Error;

/// An action tag that is not one of the todo action types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown action type \"{0}\"")]
pub struct UnknownActionType(pub String);

/// Errors raised while loading an action script
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The script file could not be read
    #[error("Failed to read action script {path}: {source}")]
    Io {
        /// Path of the script
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The script is not a JSON array
    #[error("Action script is not a JSON array: {0}")]
    Json(#[source] serde_json::Error),

    /// One entry of the script is not a valid action
    #[error("Invalid action at index {index}: {source}")]
    InvalidAction {
        /// Position of the entry in the script
        index: usize,
        /// Why the entry was rejected (malformed payload, unknown type, ...)
        #[source]
        source: serde_json::Error,
    },
}
