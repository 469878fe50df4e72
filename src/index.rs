//! Key index: maps each live key to the arena slot holding its entry.
//!
//! The index stores only slot handles. Keys live once, inside the arena
//! entries, and every probe compares against the key stored in the slot the
//! candidate handle names. Callers pass the arena in for that reason.

use crate::entry::Entry;
use crate::list::{List, SlotId};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use hashbrown::HashTable;

/// Hash table of [`SlotId`]s keyed by the key stored in each slot.
///
/// The cache looks a key up before every insertion, so [`KeyIndex::insert`]
/// is never handed a slot whose key is already registered.
pub(crate) struct KeyIndex<S> {
    table: HashTable<SlotId>,
    hash_builder: S,
}

impl<S: BuildHasher> KeyIndex<S> {
    pub(crate) fn with_capacity_and_hasher(cap: usize, hash_builder: S) -> Self {
        KeyIndex {
            table: HashTable::with_capacity(cap),
            hash_builder,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns the slot registered for `key`, if any.
    #[inline]
    pub(crate) fn lookup<K, V, Q>(&self, list: &List<Entry<K, V>>, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .find(hash, |&id| Borrow::<Q>::borrow(&list.get(id).key) == key)
            .copied()
    }

    /// Registers the linked slot `id` under the key it holds.
    pub(crate) fn insert<K: Hash, V>(&mut self, list: &List<Entry<K, V>>, id: SlotId) {
        let hash_builder = &self.hash_builder;
        let hash = hash_builder.hash_one(&list.get(id).key);
        debug_assert!(
            self.table.find(hash, |&other| other == id).is_none(),
            "slot registered twice in the index"
        );
        self.table.insert_unique(hash, id, |&other| {
            hash_builder.hash_one(&list.get(other).key)
        });
    }

    /// Drops the registration for `key`. Absent keys yield `None`.
    ///
    /// The slot must still hold its entry when this is called.
    pub(crate) fn delete<K, V, Q>(&mut self, list: &List<Entry<K, V>>, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.hash_builder.hash_one(key);
        match self
            .table
            .find_entry(hash, |&id| Borrow::<Q>::borrow(&list.get(id).key) == key)
        {
            Ok(occupied) => Some(occupied.remove().0),
            Err(_) => None,
        }
    }

    /// Drops the registration of slot `id`, found through the key it holds.
    pub(crate) fn delete_slot<K: Hash, V>(&mut self, list: &List<Entry<K, V>>, id: SlotId) -> bool {
        let hash = self.hash_builder.hash_one(&list.get(id).key);
        match self.table.find_entry(hash, |&other| other == id) {
            Ok(occupied) => {
                occupied.remove();
                true
            }
            Err(_) => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.table.clear();
    }
}

impl<S> fmt::Debug for KeyIndex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyIndex")
            .field("len", &self.table.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[cfg(feature = "default-hasher")]
    use hashbrown::DefaultHashBuilder;

    #[cfg(not(feature = "default-hasher"))]
    use std::collections::hash_map::RandomState as DefaultHashBuilder;

    fn new_index(cap: usize) -> KeyIndex<DefaultHashBuilder> {
        KeyIndex::with_capacity_and_hasher(cap, DefaultHashBuilder::default())
    }

    #[test]
    fn test_lookup_insert_delete() {
        let mut list = List::with_capacity(2);
        let mut index = new_index(2);

        let a = list.push_front(Entry::new(String::from("a"), 1));
        index.insert(&list, a);
        assert_eq!(index.len(), 1);

        // Borrowed-form lookup.
        assert_eq!(index.lookup(&list, "a"), Some(a));
        assert_eq!(index.lookup(&list, "b"), None);

        assert_eq!(index.delete(&list, "a"), Some(a));
        assert_eq!(index.len(), 0);
        assert_eq!(index.lookup(&list, "a"), None);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let list: List<Entry<u32, u32>> = List::with_capacity(1);
        let mut index = new_index(1);
        assert_eq!(index.delete(&list, &7), None);
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_delete_slot() {
        let mut list = List::with_capacity(2);
        let mut index = new_index(2);
        let a = list.push_front(Entry::new(1u32, 10u32));
        let b = list.push_front(Entry::new(2u32, 20u32));
        index.insert(&list, a);
        index.insert(&list, b);

        assert!(index.delete_slot(&list, a));
        assert!(!index.delete_slot(&list, a));
        assert_eq!(index.lookup(&list, &1), None);
        assert_eq!(index.lookup(&list, &2), Some(b));
    }

    #[test]
    fn test_growth_rehashes_through_the_arena() {
        let mut list = List::with_capacity(0);
        let mut index = new_index(0);
        for k in 0..200u32 {
            let id = list.push_front(Entry::new(k, k * 2));
            index.insert(&list, id);
        }
        assert_eq!(index.len(), 200);
        for k in 0..200u32 {
            let id = index.lookup(&list, &k).unwrap();
            assert_eq!(list.get(id).value, k * 2);
        }
    }

    #[test]
    fn test_clear() {
        let mut list = List::with_capacity(2);
        let mut index = new_index(2);
        let a = list.push_front(Entry::new(1u32, 10u32));
        let b = list.push_front(Entry::new(2u32, 20u32));
        index.insert(&list, a);
        index.insert(&list, b);
        index.clear();
        assert_eq!(index.len(), 0);
        assert_eq!(index.lookup(&list, &1), None);
    }
}
