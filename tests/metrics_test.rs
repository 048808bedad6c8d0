//! Tests for metrics emitted by the store.
//!
//! Uses `metrics_util::debugging::DebuggingRecorder` to capture and assert
//! on emitted metrics without needing a real exporter.

use std::sync::Arc;

use async_trait::async_trait;
use metrics_util::MetricKind;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use serde_json::json;

use shaker::{
    CocktailCode, CocktailStore, DrinksResponse, Recipe, RecipeSource, TransportError, telemetry,
};

// ============================================================================
// Mock sources
// ============================================================================

struct OneDrinkSource;

#[async_trait]
impl RecipeSource for OneDrinkSource {
    fn name(&self) -> &str {
        "one-drink"
    }

    async fn search(&self, code: CocktailCode) -> Result<DrinksResponse, TransportError> {
        let recipe: Recipe = serde_json::from_value(json!({
            "idDrink": "1",
            "strDrink": code.as_str(),
            "strCategory": "Cocktail",
            "strAlcoholic": "Alcoholic",
            "strGlass": "Cocktail glass",
            "strInstructions": "Shake.",
        }))
        .unwrap();
        Ok(DrinksResponse::new(vec![recipe]))
    }
}

struct FailingSource;

#[async_trait]
impl RecipeSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn search(&self, _code: CocktailCode) -> Result<DrinksResponse, TransportError> {
        Err(TransportError::Request {
            url: "http://failing/search.php".to_string(),
            message: "connection refused".to_string(),
        })
    }
}

// ============================================================================
// Snapshot type alias for readability
// ============================================================================

type SnapshotVec = Vec<(
    metrics_util::CompositeKey,
    Option<metrics::Unit>,
    Option<metrics::SharedString>,
    DebugValue,
)>;

// ============================================================================
// Helpers
// ============================================================================

/// Sum all counter values matching a given metric name and label value.
fn counter_total(snapshot: &SnapshotVec, name: &str, label: (&str, &str)) -> u64 {
    snapshot
        .iter()
        .filter(|(key, _, _, _)| key.kind() == MetricKind::Counter && key.key().name() == name)
        .filter(|(key, _, _, _)| {
            key.key()
                .labels()
                .any(|l| l.key() == label.0 && l.value() == label.1)
        })
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// Check if any histogram entries exist for a given metric name.
fn has_histogram(snapshot: &SnapshotVec, name: &str) -> bool {
    snapshot
        .iter()
        .any(|(key, _, _, _)| key.kind() == MetricKind::Histogram && key.key().name() == name)
}

/// Run `fetches` against a fresh store inside a local recorder scope.
///
/// `block_in_place` keeps the sync `with_local_recorder` closure on the
/// current thread while `block_on` drives the inner async work.
fn record(source: Arc<dyn RecipeSource>, fetches: &[CocktailCode]) -> SnapshotVec {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async {
                let store = CocktailStore::new(source);
                for code in fetches {
                    store.fetch_cocktails(*code).await;
                }
            })
        })
    });

    snapshotter.snapshot().into_vec()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn successful_fetch_records_metrics() {
    let snapshot = record(Arc::new(OneDrinkSource), &[CocktailCode::Mojito]);

    assert_eq!(
        counter_total(&snapshot, telemetry::FETCHES_TOTAL, ("status", "ok")),
        1
    );
    assert!(
        has_histogram(&snapshot, telemetry::FETCH_DURATION_SECONDS),
        "expected a duration histogram entry"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn cache_hit_records_hit_not_fetch() {
    let snapshot = record(
        Arc::new(OneDrinkSource),
        &[CocktailCode::Kir, CocktailCode::Kir, CocktailCode::Kir],
    );

    assert_eq!(
        counter_total(&snapshot, telemetry::FETCHES_TOTAL, ("code", "kir")),
        1
    );
    assert_eq!(
        counter_total(&snapshot, telemetry::CACHE_HITS_TOTAL, ("code", "kir")),
        2
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn failed_fetch_records_error_metrics() {
    let snapshot = record(
        Arc::new(FailingSource),
        &[CocktailCode::Margarita, CocktailCode::Margarita],
    );

    assert_eq!(
        counter_total(&snapshot, telemetry::FETCHES_TOTAL, ("status", "error")),
        2
    );
    assert_eq!(
        counter_total(&snapshot, telemetry::CACHE_HITS_TOTAL, ("code", "margarita")),
        0
    );
}

#[tokio::test]
async fn metrics_are_noop_without_recorder() {
    // Verify no panics when no recorder is installed.
    let store = CocktailStore::new(Arc::new(OneDrinkSource));
    store.fetch_cocktails(CocktailCode::A1).await;
    assert_eq!(store.get_cocktails(CocktailCode::A1).len(), 1);
}
