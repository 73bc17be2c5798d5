//! # Domain Model: Items, Priority, and the Wire Shape
//!
//! This module defines the core data structures: [`TodoItem`], [`Priority`], and
//! [`MoveDirection`].
//!
//! ## Wire Shape
//!
//! Items serialize to flat JSON records:
//!
//! ```json
//! {"id": 3, "text": "buy milk", "completed": false, "priority": 1,
//!  "created_at": "2026-08-06T12:00:00Z"}
//! ```
//!
//! `priority` travels as the integer 0/1/2, not as a variant name. That keeps
//! the stored list readable and compatible with payloads written by earlier
//! versions of the app.
//!
//! ## Legacy Payloads
//!
//! Earlier versions had no `created_at` field and used the creation instant
//! itself, in epoch milliseconds, as the item id. The custom deserializer
//! recovers a creation time from such ids so old lists load without loss.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction for the reorder operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Three-step priority cycle: none -> high -> medium -> none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    None,
    High,
    Medium,
}

impl Default for Priority {
    fn default() -> Self {
        Self::None
    }
}

impl Priority {
    /// The next step in the cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::None => Self::High,
            Self::High => Self::Medium,
            Self::Medium => Self::None,
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        match priority {
            Priority::None => 0,
            Priority::High => 1,
            Priority::Medium => 2,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::None),
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            other => Err(format!("invalid priority value: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority: Priority::None,
            created_at: Utc::now(),
        }
    }
}

// Custom deserializer to handle legacy records where `created_at` is missing.
// Those records carried the creation instant as a millisecond id, so the
// timestamp is recovered from the id when it converts; otherwise the load
// time is used.
impl<'de> Deserialize<'de> for TodoItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let helper = TodoItemHelper::deserialize(deserializer)?;

        let created_at = helper
            .created_at
            .or_else(|| DateTime::from_timestamp_millis(helper.id as i64))
            .unwrap_or_else(Utc::now);

        Ok(TodoItem {
            id: helper.id,
            text: helper.text,
            completed: helper.completed,
            priority: helper.priority,
            created_at,
        })
    }
}

#[derive(Deserialize)]
struct TodoItemHelper {
    id: u64,
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}
