//! Per-host metrics for chunked HTTP transfers.
//!
//! Metric names are prefixed with `chonker_http_` and labeled with the host
//! of the request URL. The following series are exposed for requests to
//! `https://example.com`:
//!
//! ```text
//! chonker_http_requests_fetching{host="example.com"}
//! chonker_http_requests_total{host="example.com"}
//! chonker_http_requests_total{host="example.com",range="false"}
//! chonker_http_request_chunks_fetching{host="example.com",stage="do"}
//! chonker_http_request_chunks_fetching{host="example.com",stage="copy"}
//! chonker_http_request_chunks_total{host="example.com"}
//! chonker_http_request_chunk_duration_seconds{host="example.com"}
//! chonker_http_request_chunk_bytes{host="example.com"}
//! ```
//!
//! Every instance lives in a [`MetricSet`], an explicitly constructed set
//! shared between the fetch side and whatever exposes the metrics. The fetch
//! side resolves a [`HostMetrics`] bundle with [`MetricSet::host_metrics`]
//! and mutates the handles directly; an exposition component can enumerate
//! the whole set at any time with [`MetricSet::snapshot`].
#![deny(missing_docs)]

mod host;
mod set;
mod snapshot;

pub use host::{ChunkStage, HostMetrics};
pub use set::MetricSet;
pub use snapshot::{MetricValue, Snapshot};
