//! # Storage Layer
//!
//! This module defines the storage abstraction: a single durable slot
//! holding the serialized list as one string value.
//!
//! ## One Slot, One Value
//!
//! The whole list travels as a unit. Every save overwrites the previous
//! value; there is no partial update, no per-item file, no index to keep in
//! step with anything. That makes the contract small enough to state fully:
//!
//! - `read` returns the last written value, or `None` on a fresh slot.
//! - `write` replaces the value atomically from the caller's perspective.
//! - `quarantine` stashes a payload the caller could not make sense of, so
//!   a corrupt slot can be diagnosed instead of silently discarded.
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: production. One JSON document in one file, written
//!   via temp file plus rename. Quarantine keeps a `.corrupt` sidecar.
//! - [`memory::InMemorySlot`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/todoz/
//! ├── todos.json           # The slot
//! └── todos.json.corrupt   # Last quarantined payload, if any
//! ```

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the durable list slot.
pub trait SlotStore {
    /// Read the raw payload.
    /// Returns Ok(None) if the slot was never written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the slot with the full payload.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&mut self, payload: &str) -> Result<()>;

    /// Keep an unreadable payload aside for diagnostics.
    /// The default implementation discards it.
    fn quarantine(&mut self, payload: &str) -> Result<()> {
        let _ = payload;
        Ok(())
    }
}
