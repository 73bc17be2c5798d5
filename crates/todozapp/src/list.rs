//! # The Ordered List and Its Transformations
//!
//! [`TodoList`] is the single entity the application manages: an ordered
//! sequence of [`TodoItem`] plus the id counter. Order is significant; it
//! drives both display and the reorder operation.
//!
//! ## Operation Semantics
//!
//! Every operation is synchronous, total, and a no-op when its target id is
//! absent. Repeating a no-op has no cumulative effect. Operations that target
//! an id mutate the matching item in place; the reorder operation swaps
//! adjacent positions and leaves everything else untouched.
//!
//! ## Id Assignment
//!
//! Ids come from a monotonic counter that is persisted with the list, so an
//! id is never handed out twice, not even after the item that held it is
//! removed or the process restarts. Earlier versions derived ids from the
//! wall clock, which could collide under scripted insertion; the counter
//! closes that hole.
//!
//! ## Loading Foreign Payloads
//!
//! Deserialization accepts two shapes: the current `{next_id, items}` object
//! and the legacy bare array of items. Loading restores the structural
//! invariants regardless of what was stored: duplicate ids are dropped (first
//! occurrence wins) and the counter is raised above every id present.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{MoveDirection, TodoItem};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoList {
    next_id: u64,
    items: Vec<TodoItem>,
}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            next_id: 1,
            items: Vec::new(),
        }
    }
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new item built from `text`.
    ///
    /// Whitespace-only input is rejected and the list is left unchanged;
    /// `None` signals the rejection. Accepted text is stored trimmed.
    pub fn add(&mut self, text: &str) -> Option<&TodoItem> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let item = TodoItem::new(self.next_id, trimmed);
        self.next_id += 1;
        self.items.push(item);
        self.items.last()
    }

    /// Flips the completion flag of the item with `id`.
    ///
    /// Returns false (and changes nothing) when no item matches.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.find_mut(id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Deletes the item with `id`, preserving the relative order of the rest.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Swaps the item with its immediate neighbor in the given direction.
    ///
    /// Moving the first item up or the last item down leaves the order as it
    /// is. Returns false only when no item matches `id`.
    pub fn move_item(&mut self, id: u64, direction: MoveDirection) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };

        let target = match direction {
            MoveDirection::Up if index > 0 => index - 1,
            MoveDirection::Down if index + 1 < self.items.len() => index + 1,
            _ => return true, // boundary: the item exists, the order stands
        };

        self.items.swap(index, target);
        true
    }

    /// Advances the priority cycle of the item with `id` by one step.
    pub fn cycle_priority(&mut self, id: u64) -> bool {
        match self.find_mut(id) {
            Some(item) => {
                item.priority = item.priority.cycled();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Rebuilds a list from stored parts, restoring the invariants the rest
    /// of the code relies on: unique ids and a counter above every id.
    fn from_parts(next_id: Option<u64>, items: Vec<TodoItem>) -> Self {
        let mut seen = HashSet::new();
        let items: Vec<TodoItem> = items
            .into_iter()
            .filter(|item| seen.insert(item.id))
            .collect();

        let max_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        let floor = max_id.saturating_add(1);
        let next_id = next_id.map_or(floor, |stored| stored.max(floor));

        Self { next_id, items }
    }
}

// Custom deserializer so the store also accepts the legacy payload shape:
// a bare array of items with no counter, as written by the original app.
impl<'de> Deserialize<'de> for TodoList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = ListRepr::deserialize(deserializer)?;
        let (next_id, items) = match repr {
            ListRepr::Current { next_id, items } => (next_id, items),
            ListRepr::Legacy(items) => (None, items),
        };
        Ok(TodoList::from_parts(next_id, items))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListRepr {
    Current {
        #[serde(default)]
        next_id: Option<u64>,
        items: Vec<TodoItem>,
    },
    Legacy(Vec<TodoItem>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn list_with(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for text in texts {
            list.add(text).unwrap();
        }
        list
    }

    fn texts(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|item| item.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_with_defaults() {
        let mut list = TodoList::new();

        let item = list.add("buy milk").unwrap();
        assert_eq!(item.text, "buy milk");
        assert!(!item.completed);
        assert_eq!(item.priority, Priority::None);

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TodoList::new();
        let item = list.add("  walk dog  ").unwrap();
        assert_eq!(item.text, "walk dog");
    }

    #[test]
    fn test_add_rejects_empty_and_whitespace() {
        let mut list = TodoList::new();

        assert!(list.add("").is_none());
        assert!(list.add("   ").is_none());
        assert!(list.add("\t\n").is_none());

        assert!(list.is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap().id;
        let b = list.add("b").unwrap().id;
        let c = list.add("c").unwrap().id;

        assert!(a < b && b < c);
    }

    #[test]
    fn test_removed_id_is_never_reused() {
        let mut list = TodoList::new();
        let first = list.add("first").unwrap().id;
        let second = list.add("second").unwrap().id;

        list.remove(second);
        let third = list.add("third").unwrap().id;

        assert!(third > second);
        assert_ne!(third, first);
    }

    #[test]
    fn test_toggle_flips_only_the_target() {
        let mut list = list_with(&["a", "b"]);
        let a = list.items()[0].id;
        let b = list.items()[1].id;

        assert!(list.toggle(a));
        assert!(list.get(a).unwrap().completed);
        assert!(!list.get(b).unwrap().completed);
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let mut list = list_with(&["a"]);
        let id = list.items()[0].id;
        let original = list.clone();

        list.toggle(id);
        list.toggle(id);

        assert_eq!(list, original);
    }

    #[test]
    fn test_toggle_absent_id_is_noop() {
        let mut list = list_with(&["a"]);
        let original = list.clone();

        assert!(!list.toggle(999));
        assert!(!list.toggle(999));

        assert_eq!(list, original);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut list = list_with(&["a", "b", "c"]);
        let b = list.items()[1].id;

        assert!(list.remove(b));
        assert_eq!(texts(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut list = list_with(&["a", "b"]);
        let a = list.items()[0].id;

        assert!(list.remove(a));
        assert_eq!(list.len(), 1);

        assert!(!list.remove(a));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_cycle_priority_mapping() {
        let mut list = list_with(&["a"]);
        let id = list.items()[0].id;

        list.cycle_priority(id);
        assert_eq!(list.get(id).unwrap().priority, Priority::High);

        list.cycle_priority(id);
        assert_eq!(list.get(id).unwrap().priority, Priority::Medium);

        list.cycle_priority(id);
        assert_eq!(list.get(id).unwrap().priority, Priority::None);
    }

    #[test]
    fn test_cycle_priority_absent_id_is_noop() {
        let mut list = list_with(&["a"]);
        let original = list.clone();

        assert!(!list.cycle_priority(42));
        assert_eq!(list, original);
    }

    #[test]
    fn test_move_up_on_first_item_is_noop() {
        let mut list = list_with(&["a", "b", "c"]);
        let a = list.items()[0].id;

        assert!(list.move_item(a, MoveDirection::Up));
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_down_on_last_item_is_noop() {
        let mut list = list_with(&["a", "b", "c"]);
        let c = list.items()[2].id;

        assert!(list.move_item(c, MoveDirection::Down));
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_move_middle_item_up() {
        let mut list = list_with(&["a", "b", "c"]);
        let b = list.items()[1].id;

        list.move_item(b, MoveDirection::Up);
        assert_eq!(texts(&list), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_move_middle_item_down() {
        let mut list = list_with(&["a", "b", "c"]);
        let b = list.items()[1].id;

        list.move_item(b, MoveDirection::Down);
        assert_eq!(texts(&list), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_move_absent_id_is_noop() {
        let mut list = list_with(&["a", "b"]);
        let original = list.clone();

        assert!(!list.move_item(77, MoveDirection::Up));
        assert_eq!(list, original);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut list = list_with(&["buy milk", "walk dog", "file taxes"]);
        let first = list.items()[0].id;
        list.toggle(first);
        list.cycle_priority(first);

        let json = serde_json::to_string(&list).unwrap();
        let loaded: TodoList = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, list);
    }

    #[test]
    fn test_roundtrip_preserves_counter_after_removal() {
        let mut list = list_with(&["a", "b"]);
        let b = list.items()[1].id;
        list.remove(b);

        let json = serde_json::to_string(&list).unwrap();
        let mut loaded: TodoList = serde_json::from_str(&json).unwrap();

        let next = loaded.add("c").unwrap().id;
        assert!(next > b);
    }

    #[test]
    fn test_deserialize_legacy_bare_array() {
        // Payload shape written by the original app: a bare array with
        // millisecond-timestamp ids.
        let json = r#"[
            {"id": 1700000000000, "text": "old one", "completed": true, "priority": 1},
            {"id": 1700000000051, "text": "old two", "completed": false, "priority": 0}
        ]"#;

        let mut loaded: TodoList = serde_json::from_str(json).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(texts(&loaded), vec!["old one", "old two"]);
        assert!(loaded.items()[0].completed);
        assert_eq!(loaded.items()[0].priority, Priority::High);

        // The rebuilt counter must clear every legacy id.
        let fresh = loaded.add("new one").unwrap().id;
        assert!(fresh > 1_700_000_000_051);
    }

    #[test]
    fn test_deserialize_drops_duplicate_ids() {
        let json = r#"{"next_id": 3, "items": [
            {"id": 1, "text": "kept"},
            {"id": 1, "text": "dropped"},
            {"id": 2, "text": "other"}
        ]}"#;

        let loaded: TodoList = serde_json::from_str(json).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(texts(&loaded), vec!["kept", "other"]);
    }

    #[test]
    fn test_deserialize_raises_stale_counter() {
        // Hand-edited file where the counter lags behind the ids.
        let json = r#"{"next_id": 1, "items": [{"id": 9, "text": "a"}]}"#;

        let mut loaded: TodoList = serde_json::from_str(json).unwrap();
        let fresh = loaded.add("b").unwrap().id;

        assert_eq!(fresh, 10);
    }

    #[test]
    fn test_empty_list_roundtrip() {
        let list = TodoList::new();
        let json = serde_json::to_string(&list).unwrap();
        let loaded: TodoList = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, list);
    }
}
