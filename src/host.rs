use metrics::{Counter, Gauge, Histogram, Key, Label};
use tracing::debug;

use crate::MetricSet;

const REQUESTS_FETCHING: &str = "chonker_http_requests_fetching";
const REQUESTS_TOTAL: &str = "chonker_http_requests_total";
const REQUEST_CHUNKS_FETCHING: &str = "chonker_http_request_chunks_fetching";
const REQUEST_CHUNKS_TOTAL: &str = "chonker_http_request_chunks_total";
const REQUEST_CHUNK_DURATION_SECONDS: &str = "chonker_http_request_chunk_duration_seconds";
const REQUEST_CHUNK_BYTES: &str = "chonker_http_request_chunk_bytes";

const HOST_LABEL: &str = "host";
const RANGE_LABEL: &str = "range";
const STAGE_LABEL: &str = "stage";

/// Phase of a single chunk operation.
///
/// Each chunk passes through two phases: issuing the request and streaming
/// the response body. The in-flight chunk gauges carry the phase as their
/// `stage` label so the two can be told apart.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChunkStage {
    /// The request for the chunk is being issued.
    Do,
    /// The response body for the chunk is being streamed.
    Copy,
}

impl ChunkStage {
    /// The `stage` label value for this phase.
    pub fn as_str(self) -> &'static str {
        match self {
            ChunkStage::Do => "do",
            ChunkStage::Copy => "copy",
        }
    }
}

/// Metric instances scoped to a single remote host.
///
/// A bundle is a cheap view over instances owned by the [`MetricSet`] it was
/// resolved from: the handles can be mutated directly and cloned freely, and
/// resolving the bundle again yields handles to the same instances.
#[derive(Clone)]
pub struct HostMetrics {
    /// Number of currently active requests to the host.
    pub requests_fetching: Gauge,
    /// Total number of requests completed to the host.
    pub requests_total: Counter,
    /// Total number of requests completed to the host that did not use range
    /// requests.
    pub requests_total_sans_range: Counter,
    /// Number of chunks currently having their request issued.
    pub request_chunks_fetching_stage_do: Gauge,
    /// Number of chunks currently having their response body streamed.
    pub request_chunks_fetching_stage_copy: Gauge,
    /// Total number of request chunks completed to the host.
    pub request_chunks_total: Counter,
    /// Duration of request chunks to the host, in seconds.
    pub request_chunk_duration_seconds: Histogram,
    /// Number of bytes fetched in request chunks to the host.
    pub request_chunk_bytes: Histogram,
}

impl HostMetrics {
    /// The in-flight chunk gauge for `stage`.
    pub fn chunks_fetching(&self, stage: ChunkStage) -> &Gauge {
        match stage {
            ChunkStage::Do => &self.request_chunks_fetching_stage_do,
            ChunkStage::Copy => &self.request_chunks_fetching_stage_copy,
        }
    }
}

impl MetricSet {
    /// Resolves the metric bundle for `host`, registering any series not yet
    /// present in the set.
    ///
    /// The host string is used verbatim as the `host` label value: no case
    /// folding, port stripping, or other normalization is applied, so two
    /// strings that differ at all name two distinct hosts. Empty strings are
    /// accepted and merely produce series with an unhelpful label value.
    ///
    /// Note that `chonker_http_requests_total` is exposed twice: once
    /// labeled only by host, counting all completed requests, and once with
    /// an additional `range="false"` label, counting only the subset that
    /// did not use range requests. The ranged total is the difference of the
    /// two only by this convention.
    pub fn host_metrics(&self, host: &str) -> HostMetrics {
        let host_label = Label::new(HOST_LABEL, host.to_owned());

        let requests_fetching =
            Key::from_parts(REQUESTS_FETCHING, vec![host_label.clone()]);
        if self.registry().get_gauge(&requests_fetching).is_none() {
            debug!(host, "registering metric series for new host");
        }

        HostMetrics {
            requests_fetching: self.get_or_create_gauge(&requests_fetching),
            requests_total: self.get_or_create_counter(&Key::from_parts(
                REQUESTS_TOTAL,
                vec![host_label.clone()],
            )),
            requests_total_sans_range: self.get_or_create_counter(&Key::from_parts(
                REQUESTS_TOTAL,
                vec![host_label.clone(), Label::new(RANGE_LABEL, "false")],
            )),
            request_chunks_fetching_stage_do: self.get_or_create_gauge(&Key::from_parts(
                REQUEST_CHUNKS_FETCHING,
                vec![host_label.clone(), Label::new(STAGE_LABEL, ChunkStage::Do.as_str())],
            )),
            request_chunks_fetching_stage_copy: self.get_or_create_gauge(&Key::from_parts(
                REQUEST_CHUNKS_FETCHING,
                vec![host_label.clone(), Label::new(STAGE_LABEL, ChunkStage::Copy.as_str())],
            )),
            request_chunks_total: self.get_or_create_counter(&Key::from_parts(
                REQUEST_CHUNKS_TOTAL,
                vec![host_label.clone()],
            )),
            request_chunk_duration_seconds: self.get_or_create_histogram(&Key::from_parts(
                REQUEST_CHUNK_DURATION_SECONDS,
                vec![host_label.clone()],
            )),
            request_chunk_bytes: self.get_or_create_histogram(&Key::from_parts(
                REQUEST_CHUNK_BYTES,
                vec![host_label],
            )),
        }
    }
}
