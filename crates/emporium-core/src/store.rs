//! In-memory catalog store.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::item::{Item, StoredItem};

/// Names of the demo items the store is seeded with.
const SEED_NAMES: [&str; 3] = ["Foo", "Bar", "Baz"];

/// Thread-safe in-memory item store with stable insertion order.
pub struct CatalogStore {
    /// Items in insertion order.
    items: RwLock<Vec<StoredItem>>,
    /// Next id handed out by [`CatalogStore::insert`].
    next_id: AtomicU64,
}

impl CatalogStore {
    /// Creates an empty store. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a store pre-populated with the demo catalog.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        for name in SEED_NAMES {
            store.insert(Item::new(name, 0.0));
        }
        store
    }

    /// Inserts an item, assigning the next id.
    pub fn insert(&self, item: Item) -> StoredItem {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = StoredItem { id, item };
        self.items.write().push(stored.clone());
        stored
    }

    /// Replaces the item with the given id, or appends it when absent.
    ///
    /// Upsert semantics: an update to an unknown id never fails, it
    /// creates the item under that id.
    pub fn update(&self, id: u64, item: Item) -> StoredItem {
        let stored = StoredItem { id, item };
        let mut items = self.items.write();
        match items.iter_mut().find(|existing| existing.id == id) {
            Some(slot) => *slot = stored.clone(),
            None => {
                items.push(stored.clone());
                // keep ids handed out by insert() clear of the upserted one
                self.next_id.fetch_max(id + 1, Ordering::Relaxed);
            }
        }
        stored
    }

    /// Returns the item with the given id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<StoredItem> {
        self.items.read().iter().find(|item| item.id == id).cloned()
    }

    /// Returns a window of the catalog in insertion order.
    ///
    /// A `skip` past the end yields an empty page.
    #[must_use]
    pub fn page(&self, skip: usize, limit: usize) -> Vec<StoredItem> {
        self.items
            .read()
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Returns the number of items in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = CatalogStore::seeded();
        let names: Vec<String> = store
            .page(0, 10)
            .into_iter()
            .map(|stored| stored.item.name)
            .collect();

        assert_eq!(names, vec!["Foo", "Bar", "Baz"]);
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = CatalogStore::new();
        let first = store.insert(Item::new("One", 1.0));
        let second = store.insert(Item::new("Two", 2.0));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_page_windows() {
        let store = CatalogStore::seeded();

        assert_eq!(store.page(1, 1)[0].item.name, "Bar");
        assert_eq!(store.page(0, 2).len(), 2);
        assert!(store.page(10, 10).is_empty());
        assert!(store.page(0, 0).is_empty());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = CatalogStore::seeded();
        store.update(2, Item::new("Quux", 5.0));

        let names: Vec<String> = store
            .page(0, 10)
            .into_iter()
            .map(|stored| stored.item.name)
            .collect();

        assert_eq!(names, vec!["Foo", "Quux", "Baz"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_update_unknown_id_appends() {
        let store = CatalogStore::new();
        let stored = store.update(42, Item::new("Late", 1.0));

        assert_eq!(stored.id, 42);
        assert_eq!(store.get(42).unwrap().item.name, "Late");

        // inserts after the upsert must not collide with it
        let next = store.insert(Item::new("After", 1.0));
        assert!(next.id > 42);
    }

    #[test]
    fn test_get_missing() {
        let store = CatalogStore::new();
        assert!(store.get(1).is_none());
    }
}
