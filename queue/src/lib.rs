//! Drain keyed, prioritized work submitted by many producers in priority order.
//!
//! [OrderedQueue] is an in-memory max-priority queue guarded by a single lock. Producers push
//! [Item]s tagged with a priority and a key, and may later update or retract them by key.
//! Consumers [pop](OrderedQueue::pop) the highest priority item, blocking until one exists.
//!
//! Internally, items live in an array-backed binary heap paired with an index from key to heap
//! slot, so pushing, popping, updating, and deleting any item are all `O(log n)`.
//!
//! # Example
//!
//! A common pattern is to submit work produced out of order (e.g. blocks of a file assembled in
//! parallel) and write it out in sequence, by using the negated sequence number as the priority:
//!
//! ```rust
//! use ordered_queue::{Item, OrderedQueue};
//! use std::{sync::Arc, thread};
//!
//! let queue: Arc<OrderedQueue<u64, String>> = Arc::new(OrderedQueue::new());
//! let producers: Vec<_> = [2u64, 0, 1]
//!     .into_iter()
//!     .map(|sequence| {
//!         let queue = queue.clone();
//!         thread::spawn(move || {
//!             let block = format!("block {sequence}");
//!             queue.push(Item::new(-(sequence as i64), sequence, block));
//!         })
//!     })
//!     .collect();
//! for producer in producers {
//!     producer.join().unwrap();
//! }
//!
//! // Retract a block we no longer need
//! assert_eq!(queue.delete(&1).unwrap().content, "block 1");
//!
//! assert_eq!(queue.pop().content, "block 0");
//! assert_eq!(queue.pop().content, "block 2");
//! assert!(queue.try_pop().is_none());
//! ```

mod config;
pub use config::Config;
mod error;
pub use error::Error;
mod heap;
mod item;
pub use item::Item;
mod metrics;
mod queue;
pub use queue::OrderedQueue;
