//! A unit of work submitted to the queue.

/// A prioritized, keyed unit of work.
///
/// Items with a higher `priority` are served first. The `key` identifies the item while it is
/// queued: pushing a second item with the same key updates the first rather than adding a
/// duplicate. The `content` is carried through the queue untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<K, V> {
    /// Higher values are served first.
    pub priority: i64,
    /// Identifier unique among the items currently queued.
    pub key: K,
    /// Payload owned by the queue until the item is popped or deleted.
    pub content: V,
}

impl<K, V> Item<K, V> {
    /// Create a new item.
    pub const fn new(priority: i64, key: K, content: V) -> Self {
        Self {
            priority,
            key,
            content,
        }
    }

    /// Consume the item, returning its content.
    pub fn into_content(self) -> V {
        self.content
    }
}
