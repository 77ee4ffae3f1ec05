//! Item Entity
//!
//! One entry in the todo list.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Opaque item identifier
///
/// New ids are random UUIDs; any string read back from storage is accepted
/// as-is so lists written by other clients keep their ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A todo entry
///
/// Stored as `{"id", "todo", "iscompleted"}`; `text` and `completed` are
/// accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, never reused
    pub id: ItemId,
    /// Item text content
    #[serde(rename = "todo", alias = "text")]
    pub text: String,
    /// Completion status
    #[serde(rename = "iscompleted", alias = "completed", default)]
    pub completed: bool,
}

impl Item {
    /// Create an incomplete item with the given id
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

/// Reject text that is empty or whitespace only
///
/// Accepted text is kept exactly as typed.
pub fn validate_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }
    Ok(())
}
