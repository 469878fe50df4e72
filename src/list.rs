extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

/// Slot index of the head sentinel (the MRU side).
const HEAD: usize = 0;
/// Slot index of the tail sentinel (the LRU side).
const TAIL: usize = 1;
/// Link value carried by slots that are not currently in the list.
const UNLINKED: usize = usize::MAX;

/// Opaque handle to a slot in a [`List`].
///
/// A handle stays valid until the slot it names is removed from the list.
/// Handles never leave the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(usize);

impl SlotId {
    #[cfg(test)]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// A slot in the arena.
///
/// `prev` and `next` are indices into the same arena, so relinking never
/// needs more than plain integer writes.
struct Node<T> {
    /// `None` for the two sentinels and for freed slots.
    val: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Node<T> {
    fn new(val: T) -> Self {
        Node {
            val: Some(val),
            prev: UNLINKED,
            next: UNLINKED,
        }
    }

    fn new_sigil() -> Self {
        Node {
            val: None,
            prev: UNLINKED,
            next: UNLINKED,
        }
    }

    fn is_linked(&self) -> bool {
        self.prev != UNLINKED
    }
}

/// A doubly linked list whose nodes live in a single `Vec`.
///
/// Two sentinel slots bound the list, so every linked entry always has a
/// predecessor and a successor and no operation has to special-case the
/// empty or single-element list. Removed slots go onto a free list and are
/// reused by the next insertion.
///
/// The front of the list (right after the head sentinel) is the most
/// recently used entry; the back (right before the tail sentinel) is the
/// least recently used one.
///
/// # Examples
///
/// ```ignore
/// let mut list = List::with_capacity(3);
/// let a = list.push_front(10);
/// let _b = list.push_front(20);
///
/// list.move_to_front(a);
/// assert_eq!(list.pop_back(), Some(20));
/// ```
pub(crate) struct List<T> {
    nodes: Vec<Node<T>>,
    /// Slots available for reuse.
    free: Vec<usize>,
    /// Number of linked entries, sentinels excluded.
    len: usize,
}

impl<T> List<T> {
    /// Creates an empty list with room for `cap` entries before the arena
    /// has to grow.
    pub(crate) fn with_capacity(cap: usize) -> List<T> {
        let mut nodes = Vec::with_capacity(cap.saturating_add(2));
        nodes.push(Node::new_sigil());
        nodes.push(Node::new_sigil());

        let mut list = List {
            nodes,
            free: Vec::new(),
            len: 0,
        };
        list.link_sentinels();
        list
    }

    fn link_sentinels(&mut self) {
        self.nodes[HEAD].next = TAIL;
        self.nodes[HEAD].prev = HEAD;
        self.nodes[TAIL].prev = HEAD;
        self.nodes[TAIL].next = TAIL;
    }

    /// Returns the number of linked entries.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entries are linked.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `val` in a fresh or recycled slot without linking it.
    fn alloc(&mut self, val: T) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Node::new(val);
                idx
            }
            None => {
                self.nodes.push(Node::new(val));
                self.nodes.len() - 1
            }
        }
    }

    /// Takes the value out of an unlinked slot and puts the slot on the free list.
    fn release(&mut self, idx: usize) -> T {
        let node = &mut self.nodes[idx];
        debug_assert!(!node.is_linked(), "releasing linked slot {idx}");
        match node.val.take() {
            Some(val) => {
                self.free.push(idx);
                val
            }
            None => panic!("slot {idx} released twice"),
        }
    }

    /// Links an unlinked, occupied slot right after the head sentinel.
    ///
    /// # Panics
    ///
    /// Panics if the slot is a sentinel, is empty, or is already linked.
    pub(crate) fn attach(&mut self, id: SlotId) {
        let idx = id.0;
        assert!(idx > TAIL, "cannot attach sentinel slot {idx}");
        {
            let node = &self.nodes[idx];
            assert!(node.val.is_some(), "attach of empty slot {idx}");
            assert!(!node.is_linked(), "attach of already linked slot {idx}");
        }

        let first = self.nodes[HEAD].next;
        self.nodes[idx].prev = HEAD;
        self.nodes[idx].next = first;
        self.nodes[first].prev = idx;
        self.nodes[HEAD].next = idx;
        self.len += 1;
    }

    /// Unlinks a slot, joining its former neighbours directly to each other.
    ///
    /// The slot keeps its value and can be attached again.
    ///
    /// # Panics
    ///
    /// Panics if the slot is a sentinel or is not currently linked. A second
    /// unlink of the same slot would splice stale neighbours together, so it
    /// is rejected outright.
    pub(crate) fn detach(&mut self, id: SlotId) {
        let idx = id.0;
        assert!(idx > TAIL, "cannot detach sentinel slot {idx}");
        let (prev, next) = {
            let node = &self.nodes[idx];
            assert!(node.is_linked(), "detach of unlinked slot {idx}");
            (node.prev, node.next)
        };

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[idx].prev = UNLINKED;
        self.nodes[idx].next = UNLINKED;
        self.len -= 1;
    }

    /// Stores `val` and links it as the most recently used entry.
    pub(crate) fn push_front(&mut self, val: T) -> SlotId {
        let id = SlotId(self.alloc(val));
        self.attach(id);
        id
    }

    /// Moves a linked slot to the front of the list.
    pub(crate) fn move_to_front(&mut self, id: SlotId) {
        if self.nodes[HEAD].next == id.0 {
            return;
        }
        self.detach(id);
        self.attach(id);
    }

    /// Unlinks the least recently used entry and returns its value.
    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.nodes[TAIL].prev;
        Some(self.remove(SlotId(last)))
    }

    /// Unlinks an arbitrary slot and returns its value.
    pub(crate) fn remove(&mut self, id: SlotId) -> T {
        self.detach(id);
        self.release(id.0)
    }

    /// Returns the value stored in a live slot.
    ///
    /// # Panics
    ///
    /// Panics if the handle names a sentinel or a freed slot.
    pub(crate) fn get(&self, id: SlotId) -> &T {
        match self.nodes.get(id.0).and_then(|node| node.val.as_ref()) {
            Some(val) => val,
            None => panic!("stale slot handle {}", id.0),
        }
    }

    /// Mutable counterpart of [`List::get`].
    pub(crate) fn get_mut(&mut self, id: SlotId) -> &mut T {
        match self.nodes.get_mut(id.0).and_then(|node| node.val.as_mut()) {
            Some(val) => val,
            None => panic!("stale slot handle {}", id.0),
        }
    }

    /// Returns the handle of the least recently used entry.
    pub(crate) fn back_id(&self) -> Option<SlotId> {
        if self.is_empty() {
            return None;
        }
        Some(SlotId(self.nodes[TAIL].prev))
    }

    /// Returns the least recently used entry without unlinking it.
    pub(crate) fn back(&self) -> Option<&T> {
        self.back_id().map(|id| self.get(id))
    }

    /// Iterates from the most recently used entry to the least recently used.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.nodes[HEAD].next,
            back: self.nodes[TAIL].prev,
            remaining: self.len,
        }
    }

    /// Number of slots the arena has ever handed out, free ones included.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.len() - 2
    }

    /// Drops every entry and returns the arena to its freshly built state.
    ///
    /// The allocation is kept.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(2);
        self.free.clear();
        self.len = 0;
        self.link_sentinels();
    }
}

impl<T> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("length", &self.len)
            .field("slots", &(self.nodes.len() - 2))
            .field("free", &self.free.len())
            .finish()
    }
}

/// Borrowing iterator over a [`List`], front to back.
pub(crate) struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn value_at(&self, idx: usize) -> &'a T {
        let nodes: &'a [Node<T>] = self.nodes;
        match nodes[idx].val.as_ref() {
            Some(val) => val,
            None => panic!("linked slot {idx} holds no value"),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.front;
        self.front = self.nodes[idx].next;
        self.remaining -= 1;
        Some(self.value_at(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.back;
        self.back = self.nodes[idx].prev;
        self.remaining -= 1;
        Some(self.value_at(idx))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
