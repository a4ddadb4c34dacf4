//! Metric names and the per-request instruments

use std::time::Instant;

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram},
};

pub const REQUEST_COUNT: &str = "voxdrop.request.count";
pub const REQUEST_DURATION: &str = "voxdrop.request.duration";

/// Instruments recorded once per handled request
///
/// Created from the global meter, so they are no-ops until
/// [`crate::init`] installs a meter provider.
#[derive(Clone)]
pub struct RequestMetrics {
    count: Counter<u64>,
    duration: Histogram<f64>,
}

impl RequestMetrics {
    #[must_use]
    pub fn new() -> Self {
        let meter = global::meter("voxdrop");

        Self {
            count: meter
                .u64_counter(REQUEST_COUNT)
                .with_description("Handled speech file requests")
                .build(),
            duration: meter
                .f64_histogram(REQUEST_DURATION)
                .with_description("End to end request duration")
                .with_unit("s")
                .build(),
        }
    }

    /// Record one finished request with its envelope status code
    pub fn record(&self, status: u16, start: Instant) {
        let attributes = [KeyValue::new("status", i64::from(status))];
        self.count.add(1, &attributes);
        self.duration.record(start.elapsed().as_secs_f64(), &attributes);
    }
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self::new()
    }
}
