//! Prometheus metrics for the translation layer.
//!
//! Covers request chains built per search kind, releases parsed and
//! responses rejected. The server registers these alongside its own HTTP
//! metrics.

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

/// Request groups built, by search kind.
pub static REQUEST_GROUPS_BUILT: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "nebulance_request_groups_built_total",
            "Total request groups built for tracker searches",
        ),
        &["kind"], // "search", "tvsearch", "movie", "music", "book"
    )
    .unwrap()
});

/// Responses parsed successfully.
pub static RESPONSES_PARSED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "nebulance_responses_parsed_total",
        "Total tracker responses parsed successfully",
    )
    .unwrap()
});

/// Releases produced by the parser.
pub static RELEASES_PARSED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "nebulance_releases_parsed_total",
        "Total releases mapped from tracker responses",
    )
    .unwrap()
});

/// Responses rejected, by error kind.
pub static RESPONSE_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "nebulance_response_failures_total",
            "Total tracker responses that failed to parse",
        ),
        &["kind"], // "status", "decode", "api", "field"
    )
    .unwrap()
});

/// Releases per parsed response.
pub static RELEASES_PER_RESPONSE: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "nebulance_releases_per_response",
            "Number of releases returned per tracker response",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0]),
        &[],
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(REQUEST_GROUPS_BUILT.clone()),
        Box::new(RESPONSES_PARSED.clone()),
        Box::new(RELEASES_PARSED.clone()),
        Box::new(RESPONSE_FAILURES.clone()),
        Box::new(RELEASES_PER_RESPONSE.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::Registry;

    #[test]
    fn test_all_metrics_register_once() {
        let registry = Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }

        REQUEST_GROUPS_BUILT.with_label_values(&["tvsearch"]).inc();
        RESPONSE_FAILURES.with_label_values(&["status"]).inc();
        RESPONSES_PARSED.inc();

        let names: Vec<_> = registry
            .gather()
            .iter()
            .map(|family| family.get_name().to_string())
            .collect();
        assert!(names.contains(&"nebulance_request_groups_built_total".to_string()));
        assert!(names.contains(&"nebulance_response_failures_total".to_string()));
        assert!(names.contains(&"nebulance_responses_parsed_total".to_string()));
    }
}
