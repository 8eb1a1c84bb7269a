/// Configuration for [crate::OrderedQueue].
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Number of items to allocate space for up front.
    ///
    /// The queue grows past this as needed.
    pub capacity: usize,
}

impl Config {
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}
