//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus,
//! statsd); without a recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `shaker_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `code` — cocktail code (e.g. "margarita", "kir")
//! - `status` — outcome: "ok" or "error"

/// Total outbound fetches issued by the store.
///
/// Labels: `code`, `status` ("ok" | "error").
pub const FETCHES_TOTAL: &str = "shaker_fetches_total";

/// Fetch duration in seconds.
///
/// Labels: `code`.
pub const FETCH_DURATION_SECONDS: &str = "shaker_fetch_duration_seconds";

/// Total `fetch_cocktails` calls answered from the cache without a request.
///
/// Labels: `code`.
pub const CACHE_HITS_TOTAL: &str = "shaker_cache_hits_total";
