//! Metrics for [super::OrderedQueue].

use prometheus_client::{
    metrics::{counter::Counter, gauge::Gauge},
    registry::Registry,
};

/// Metrics for [super::OrderedQueue].
#[derive(Default)]
pub(crate) struct Metrics {
    /// Items pushed under a key that was not yet queued.
    pub inserted: Counter,
    /// Pushes that updated an already queued key.
    pub updated: Counter,
    /// Items removed by a consumer.
    pub popped: Counter,
    /// Items retracted by key.
    pub deleted: Counter,
    /// Items currently queued.
    pub size: Gauge,
    /// Consumers parked waiting for an item.
    pub waiting: Gauge,
}

impl Metrics {
    /// Register all metrics with the given registry.
    ///
    /// Metrics keep counting whether or not they are ever registered.
    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "inserted",
            "Items pushed under a new key",
            self.inserted.clone(),
        );
        registry.register(
            "updated",
            "Pushes that updated a queued key",
            self.updated.clone(),
        );
        registry.register("popped", "Items removed by consumers", self.popped.clone());
        registry.register("deleted", "Items retracted by key", self.deleted.clone());
        registry.register("size", "Items currently queued", self.size.clone());
        registry.register(
            "waiting",
            "Consumers waiting for an item",
            self.waiting.clone(),
        );
    }
}
