//! Action scripts.
//!
//! A script is a JSON array of actions in their wire form, replayed in order
//! against a store:
//!
//! ```json
//! [
//!   { "type": "ADD_TODO", "payload": { "text": "Buy milk" } },
//!   { "type": "COMPLETE_TODO", "payload": { "id": 0 } },
//!   { "type": "CLEAR_COMPLETED" }
//! ]
//! ```

use crate::actions::TodoAction;
use crate::error::ScriptError;
use std::path::Path;

/// Parse a script from JSON text
///
/// # Errors
///
/// Returns [`ScriptError::Json`] if the input is not a JSON array and
/// [`ScriptError::InvalidAction`] for the first entry that is not an action.
pub fn parse_script(input: &str) -> Result<Vec<TodoAction>, ScriptError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(input).map_err(ScriptError::Json)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|source| ScriptError::InvalidAction { index, source })
        })
        .collect()
}

/// Read and parse a script file
///
/// # Errors
///
/// Returns [`ScriptError::Io`] if the file can not be read, otherwise the
/// errors of [`parse_script`].
pub fn load_script(path: impl AsRef<Path>) -> Result<Vec<TodoAction>, ScriptError> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let actions = parse_script(&input)?;
    tracing::debug!(path = %path.display(), actions = actions.len(), "Loaded action script");
    Ok(actions)
}
