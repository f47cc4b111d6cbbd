use metrics::{Counter, Gauge, Histogram, Key};
use metrics_util::registry::{AtomicStorage, Registry};

/// A process-wide set of metric instances.
///
/// `MetricSet` owns every counter, gauge, and histogram created by this
/// crate, mapped by [`Key`]. Creation is idempotent: the first caller for a
/// given key allocates zero-valued storage, and every subsequent caller with
/// an equal key gets a handle to the same instance. All operations are safe
/// under unbounded concurrent callers.
///
/// The set only grows. There is no removal operation; instances live until
/// the process exits, and host cardinality is bounded by the caller's own
/// traffic.
pub struct MetricSet {
    registry: Registry<Key, AtomicStorage>,
}

impl MetricSet {
    /// Creates an empty `MetricSet`.
    pub fn new() -> MetricSet {
        MetricSet { registry: Registry::atomic() }
    }

    /// Gets or creates the counter registered under `key`.
    ///
    /// Racing first-time creators converge on a single instance: the loser
    /// of the insertion race receives a handle to the winner's storage.
    pub fn get_or_create_counter(&self, key: &Key) -> Counter {
        self.registry.get_or_create_counter(key, |c| Counter::from_arc(c.clone()))
    }

    /// Gets or creates the gauge registered under `key`.
    pub fn get_or_create_gauge(&self, key: &Key) -> Gauge {
        self.registry.get_or_create_gauge(key, |g| Gauge::from_arc(g.clone()))
    }

    /// Gets or creates the histogram registered under `key`.
    pub fn get_or_create_histogram(&self, key: &Key) -> Histogram {
        self.registry.get_or_create_histogram(key, |h| Histogram::from_arc(h.clone()))
    }

    pub(crate) fn registry(&self) -> &Registry<Key, AtomicStorage> {
        &self.registry
    }
}

impl Default for MetricSet {
    fn default() -> Self {
        MetricSet::new()
    }
}
