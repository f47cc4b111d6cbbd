use std::collections::HashMap;
use std::sync::atomic::Ordering;

use metrics_util::{CompositeKey, MetricKind};
use ordered_float::OrderedFloat;

use crate::MetricSet;

/// A point-in-time value observed for a single metric instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MetricValue {
    /// Counter.
    Counter(u64),
    /// Gauge.
    Gauge(OrderedFloat<f64>),
    /// Histogram.
    Histogram(Vec<OrderedFloat<f64>>),
}

/// A point-in-time snapshot of every instance in a [`MetricSet`].
///
/// Entries are keyed by [`CompositeKey`] so a counter and a gauge registered
/// under the same name and labels can never be conflated. Each value is read
/// atomically from the instance's storage: an entry may be stale by the time
/// it is examined, but is never partially constructed.
pub struct Snapshot(Vec<(CompositeKey, MetricValue)>);

impl Snapshot {
    /// Consumes this snapshot, returning the observed entries.
    pub fn into_vec(self) -> Vec<(CompositeKey, MetricValue)> {
        self.0
    }

    /// Consumes this snapshot, returning the observed entries mapped by key.
    pub fn into_hashmap(self) -> HashMap<CompositeKey, MetricValue> {
        self.0.into_iter().collect()
    }
}

impl MetricSet {
    /// Takes a snapshot of every metric instance in the set.
    ///
    /// Safe to call at any time, concurrently with creation and mutation.
    /// Histogram samples are copied rather than drained, so taking a
    /// snapshot does not disturb the underlying instances.
    pub fn snapshot(&self) -> Snapshot {
        let registry = self.registry();
        let mut entries = Vec::new();

        registry.visit_counters(|key, counter| {
            let value = MetricValue::Counter(counter.load(Ordering::Acquire));
            entries.push((CompositeKey::new(MetricKind::Counter, key.clone()), value));
        });
        registry.visit_gauges(|key, gauge| {
            let value =
                MetricValue::Gauge(f64::from_bits(gauge.load(Ordering::Acquire)).into());
            entries.push((CompositeKey::new(MetricKind::Gauge, key.clone()), value));
        });
        registry.visit_histograms(|key, histogram| {
            let samples = histogram.data().into_iter().map(Into::into).collect();
            entries.push((
                CompositeKey::new(MetricKind::Histogram, key.clone()),
                MetricValue::Histogram(samples),
            ));
        });

        Snapshot(entries)
    }
}
