//! # The Session: Owned State Plus Eager Persistence
//!
//! [`Session`] is the single source of truth while the application runs. It
//! owns the live [`TodoList`], the pending-input draft, and the storage slot,
//! and it is the only component that talks to the slot.
//!
//! ## Control Flow
//!
//! ```text
//! open()  : slot -> deserialize -> list          (once, at startup)
//! add() / toggle() / remove() / move_item() / cycle_priority():
//!           mutate list -> serialize -> slot     (after every dispatch)
//! close() : one final save                       (shutdown flush)
//! ```
//!
//! The save runs after every dispatch, including ones that turn out to be
//! no-ops, so the slot never lags behind the in-memory list. There is no
//! dirty state for callers to reason about: before `open` the session does
//! not exist, after `open` slot and list stay in step.
//!
//! ## Load Recovery
//!
//! An absent slot starts an empty list. A payload that does not parse also
//! starts an empty list, but the raw payload is handed to the slot's
//! quarantine hook first so nothing is silently destroyed, and a warning
//! [`Notice`] is queued for the host to render. Only real I/O errors
//! propagate out of `open`.
//!
//! ## Notices
//!
//! The session never prints. Anything the user should hear about is queued
//! as a [`Notice`] with a level; hosts drain the queue with
//! [`Session::take_notices`] and decide how to render it.

use crate::error::Result;
use crate::list::TodoList;
use crate::model::{MoveDirection, TodoItem};
use crate::store::SlotStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub content: String,
}

impl Notice {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            content: content.into(),
        }
    }
}

/// The live editing session.
///
/// Generic over [`SlotStore`] so hosts and tests can pick their backing:
/// production runs on `FileSlot`, tests on `InMemorySlot`.
pub struct Session<S: SlotStore> {
    store: S,
    list: TodoList,
    draft: String,
    notices: Vec<Notice>,
}

impl<S: SlotStore> Session<S> {
    /// Opens a session against the given slot, loading whatever it holds.
    pub fn open(mut store: S) -> Result<Self> {
        let mut notices = Vec::new();

        let list = match store.read()? {
            None => TodoList::new(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(list) => list,
                Err(err) => {
                    let mut warning =
                        format!("Stored list could not be read ({}); starting empty.", err);
                    match store.quarantine(&raw) {
                        Ok(()) => warning.push_str(" The unreadable payload was kept aside."),
                        Err(stash_err) => warning.push_str(&format!(
                            " Could not keep the payload aside: {}",
                            stash_err
                        )),
                    }
                    notices.push(Notice::warning(warning));
                    TodoList::new()
                }
            },
        };

        Ok(Self {
            store,
            list,
            draft: String::new(),
            notices,
        })
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The pending-input text, as typed so far by the host's input surface.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Appends a new item. Whitespace-only text is rejected: the list and
    /// the draft both stay as they are. On success the draft is cleared.
    pub fn add(&mut self, text: &str) -> Result<Option<TodoItem>> {
        let added = self.list.add(text).cloned();
        if added.is_some() {
            self.draft.clear();
        }
        self.persist()?;
        Ok(added)
    }

    /// Submits the current draft through [`Session::add`].
    pub fn submit_draft(&mut self) -> Result<Option<TodoItem>> {
        let text = self.draft.clone();
        self.add(&text)
    }

    /// Flips completion on the item with `id`. False when no item matches.
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let found = self.list.toggle(id);
        self.persist()?;
        Ok(found)
    }

    /// Deletes the item with `id`. False when no item matches.
    pub fn remove(&mut self, id: u64) -> Result<bool> {
        let found = self.list.remove(id);
        self.persist()?;
        Ok(found)
    }

    /// Swaps the item one position in `direction`. Boundary moves keep the
    /// order; false only when no item matches.
    pub fn move_item(&mut self, id: u64, direction: MoveDirection) -> Result<bool> {
        let found = self.list.move_item(id, direction);
        self.persist()?;
        Ok(found)
    }

    /// Advances the priority cycle on the item with `id`.
    pub fn cycle_priority(&mut self, id: u64) -> Result<bool> {
        let found = self.list.cycle_priority(id);
        self.persist()?;
        Ok(found)
    }

    /// Drains the queued notices for rendering.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Flushes a final save and ends the session.
    pub fn close(mut self) -> Result<()> {
        self.persist()
    }

    fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.list)?;
        self.store.write(&payload)
    }
}
