//! A keyed priority queue shared between producers and consumers.

use crate::{
    heap::{Heap, Pushed},
    metrics::Metrics,
    Config, Error, Item,
};
use prometheus_client::registry::Registry;
use std::{
    borrow::Borrow,
    fmt,
    hash::Hash,
    sync::{Condvar, Mutex, MutexGuard},
    time::{Duration, Instant},
};
use tracing::{debug, trace};

/// A thread-safe max-priority queue of keyed [Item]s.
///
/// Any number of producers may [push](Self::push) and [delete](Self::delete) items while
/// consumers drain them in priority order with [pop](Self::pop), which blocks until an item is
/// available. Items of equal priority are delivered in no particular order.
///
/// Keys are unique among queued items: pushing an item whose key is already queued replaces the
/// priority and content of the queued item instead of adding a second one.
///
/// Share the queue between threads by wrapping it in an [std::sync::Arc].
pub struct OrderedQueue<K, V> {
    heap: Mutex<Heap<K, V>>,
    // Signaled whenever an item becomes available to a waiting consumer.
    available: Condvar,
    metrics: Metrics,
}

impl<K, V> OrderedQueue<K, V> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an empty queue with the given configuration.
    pub fn with_config(cfg: Config) -> Self {
        Self {
            heap: Mutex::new(Heap::with_capacity(cfg.capacity)),
            available: Condvar::new(),
            metrics: Metrics::default(),
        }
    }

    /// Register the queue's metrics with the given registry.
    pub fn register(&self, registry: &mut Registry) {
        self.metrics.register(registry);
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.heap().len()
    }

    /// Returns true if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.heap().is_empty()
    }

    /// Apply `f` to the highest priority item without removing it.
    ///
    /// The queue is locked while `f` runs.
    pub fn peek_with<R>(&self, f: impl FnOnce(&Item<K, V>) -> R) -> Option<R> {
        self.heap().peek().map(f)
    }

    fn heap(&self) -> MutexGuard<'_, Heap<K, V>> {
        self.heap.lock().unwrap()
    }
}

impl<K: Eq + Hash + Clone, V> OrderedQueue<K, V> {
    /// Insert `item`, or update the queued item with the same key.
    ///
    /// An update overwrites the queued item's priority and content and moves it to its new place
    /// in the queue. Only inserts wake a waiting consumer.
    pub fn push(&self, item: Item<K, V>) {
        let priority = item.priority;
        let mut heap = self.heap();
        match heap.push(item) {
            Pushed::Updated => {
                self.metrics.updated.inc();
                trace!(priority, size = heap.len(), "updated item");
            }
            Pushed::Inserted => {
                self.metrics.inserted.inc();
                self.metrics.size.set(heap.len() as i64);
                trace!(priority, size = heap.len(), "inserted item");
                self.available.notify_one();
            }
        }
    }

    /// Remove and return the highest priority item, blocking until one is available.
    pub fn pop(&self) -> Item<K, V> {
        let mut heap = self.heap();
        loop {
            // The queue may have been drained by another consumer (or the wake-up may be
            // spurious), so re-check after every wait.
            if let Some(item) = self.take(&mut heap) {
                return item;
            }
            self.metrics.waiting.inc();
            debug!("waiting for item");
            heap = self.available.wait(heap).unwrap();
            self.metrics.waiting.dec();
        }
    }

    /// Remove and return the highest priority item, waiting at most `timeout` for one to arrive.
    pub fn pop_timeout(&self, timeout: Duration) -> Result<Item<K, V>, Error> {
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            return Ok(self.pop());
        };

        let mut heap = self.heap();
        loop {
            if let Some(item) = self.take(&mut heap) {
                return Ok(item);
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                debug!(?timeout, "timed out waiting for item");
                return Err(Error::Timeout(timeout));
            }
            self.metrics.waiting.inc();
            let (guard, _) = self.available.wait_timeout(heap, remaining).unwrap();
            self.metrics.waiting.dec();
            heap = guard;
        }
    }

    /// Remove and return the highest priority item, if any.
    pub fn try_pop(&self) -> Option<Item<K, V>> {
        let mut heap = self.heap();
        self.take(&mut heap)
    }

    /// Remove and return the item queued under `key`, if any.
    pub fn delete<Q>(&self, key: &Q) -> Option<Item<K, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut heap = self.heap();
        let item = heap.remove(key)?;
        self.metrics.deleted.inc();
        self.metrics.size.set(heap.len() as i64);
        trace!(priority = item.priority, size = heap.len(), "deleted item");
        Some(item)
    }

    /// Returns a copy of the highest priority item without removing it.
    pub fn peek(&self) -> Option<Item<K, V>>
    where
        V: Clone,
    {
        self.heap().peek().cloned()
    }

    /// Returns true if an item is queued under `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.heap().get(key).is_some()
    }

    /// Returns the priority of the item queued under `key`.
    pub fn priority<Q>(&self, key: &Q) -> Option<i64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.heap().get(key).map(|item| item.priority)
    }

    fn take(&self, heap: &mut Heap<K, V>) -> Option<Item<K, V>> {
        let item = heap.pop()?;
        self.metrics.popped.inc();
        self.metrics.size.set(heap.len() as i64);
        trace!(priority = item.priority, size = heap.len(), "popped item");

        // Pass the wake-up along so no waiter is left parked while items remain
        if !heap.is_empty() {
            self.available.notify_one();
        }
        Some(item)
    }
}

impl<K, V> Default for OrderedQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedQueue<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.heap().iter()).finish()
    }
}
