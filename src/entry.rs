//! Cache entry type.
//!
//! An [`Entry`] is one key/value association held by the cache. Its position
//! in the recency order is not stored here: the arena slot that owns the
//! entry carries the `prev`/`next` links, so an entry never points at another
//! entry directly.

use core::fmt;

/// One cached association.
///
/// The key is fixed for the lifetime of the entry; the value may be replaced
/// in place when the same key is written again.
pub(crate) struct Entry<K, V> {
    /// The cached key.
    pub(crate) key: K,
    /// The cached value.
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    #[inline]
    pub(crate) fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }

    /// Splits the entry into its key and value.
    #[inline]
    pub(crate) fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Borrows the key and value together.
    #[inline]
    pub(crate) fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
