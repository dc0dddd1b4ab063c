//! In-memory item store
//!
//! A plain keyed map with no synchronization of its own. The handler owns
//! it behind a single mutex so every request sees one consistent step.

use std::collections::HashMap;

use super::item::Item;

/// Item storage keyed by id.
///
/// `list` yields items in first-insertion order. Overwriting an id keeps
/// its original position.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: HashMap<String, Entry>,
    next_seq: u64,
}

#[derive(Debug)]
struct Entry {
    seq: u64,
    item: Item,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `id`
    pub fn put(&mut self, id: &str, item: Item) {
        if let Some(entry) = self.items.get_mut(id) {
            entry.item = item;
            return;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.items.insert(id.to_string(), Entry { seq, item });
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id).map(|entry| &entry.item)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Remove an item, returning it if it was present
    pub fn delete(&mut self, id: &str) -> Option<Item> {
        self.items.remove(id).map(|entry| entry.item)
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<Item> {
        let mut entries: Vec<&Entry> = self.items.values().collect();
        entries.sort_by_key(|entry| entry.seq);
        entries.into_iter().map(|entry| entry.item.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
