//! An array-backed max-heap of [Item]s paired with an index from key to slot.
//!
//! The heap uses 0-based slots: the parent of slot `i` is `(i - 1) / 2` and its children are
//! `2i + 1` and `2i + 2`. Every key stored in `slots` has exactly one entry in `index` pointing
//! back at the slot it occupies, which lets updates and deletions jump straight to an item
//! instead of scanning for it.

use crate::Item;
use std::{borrow::Borrow, collections::HashMap, hash::Hash};

/// Outcome of [Heap::push].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pushed {
    /// The key was not present and a new item was added.
    Inserted,
    /// The key was present and its item was updated in place.
    Updated,
}

pub(crate) struct Heap<K, V> {
    slots: Vec<Item<K, V>>,
    index: HashMap<K, usize>,
}

impl<K, V> Heap<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the item with the highest priority.
    pub(crate) fn peek(&self) -> Option<&Item<K, V>> {
        self.slots.first()
    }

    /// Iterate over items in slot order (not priority order).
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Item<K, V>> {
        self.slots.iter()
    }
}

impl<K: Eq + Hash + Clone, V> Heap<K, V> {
    /// Returns the item stored under `key`.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&Item<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = *self.index.get(key)?;
        Some(&self.slots[pos])
    }

    /// Insert `item`, or overwrite the priority and content of the item already stored under
    /// the same key.
    pub(crate) fn push(&mut self, item: Item<K, V>) -> Pushed {
        if let Some(&pos) = self.index.get(&item.key) {
            let slot = &mut self.slots[pos];
            slot.priority = item.priority;
            slot.content = item.content;
            self.resettle(pos);
            return Pushed::Updated;
        }

        let pos = self.slots.len();
        self.index.insert(item.key.clone(), pos);
        self.slots.push(item);
        self.sift_up(pos);
        Pushed::Inserted
    }

    /// Remove and return the item with the highest priority.
    pub(crate) fn pop(&mut self) -> Option<Item<K, V>> {
        self.remove_at(0)
    }

    /// Remove and return the item stored under `key`.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<Item<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = *self.index.get(key)?;
        self.remove_at(pos)
    }

    fn remove_at(&mut self, pos: usize) -> Option<Item<K, V>> {
        if pos >= self.slots.len() {
            return None;
        }

        // The last item fills the hole (unless the hole was the last slot)
        let item = self.slots.swap_remove(pos);
        self.index.remove(&item.key);
        if pos < self.slots.len() {
            self.place(pos);
            self.resettle(pos);
        }
        Some(item)
    }

    /// Restore the heap property around `pos` after its priority changed in either direction.
    fn resettle(&mut self, pos: usize) {
        let pos = self.sift_up(pos);
        self.sift_down(pos);
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.slots[pos].priority <= self.slots[parent].priority {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) -> usize {
        let len = self.slots.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            // Prefer the right child only if it strictly outranks the left
            let right = left + 1;
            let child = if right < len && self.slots[right].priority > self.slots[left].priority {
                right
            } else {
                left
            };
            if self.slots[pos].priority >= self.slots[child].priority {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
        pos
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
        self.place(a);
        self.place(b);
    }

    /// Point the index entry of the item in `pos` back at `pos`.
    fn place(&mut self, pos: usize) {
        if let Some(slot) = self.index.get_mut(&self.slots[pos].key) {
            *slot = pos;
        }
    }
}
