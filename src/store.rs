//! Recipe store: fetch-once cache keyed by cocktail code.
//!
//! [`CocktailStore`] is the single point of truth for "have we fetched this
//! code, and what did we get". It holds:
//!
//! - a mapping from [`CocktailCode`] to the recipes last fetched for it,
//!   in response order;
//! - one `loading` flag shared by every code;
//! - one last-error message shared by every code.
//!
//! # Caching policy
//!
//! A code with a non-empty entry is never fetched again for the lifetime
//! of the store. An empty entry (the source had no matches) does not count
//! as populated, so such a code is re-fetched on every call. There is no
//! eviction, expiry or invalidation.
//!
//! # Shared status
//!
//! `loading` and `error` are scalars, not per-code state. Two overlapping
//! fetches for different codes both set `loading`, and whichever finishes
//! first clears it while the other is still outstanding. Each outcome
//! overwrites `error`: a failure sets the fixed [`FETCH_ERROR_MESSAGE`], a
//! success clears it. Cache hits leave both untouched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use futures_util::future::join_all;
use moka::sync::Cache;
use tracing::{debug, warn};

use crate::client::{CocktailDbClient, RecipeSource};
use crate::telemetry;
use crate::types::{CocktailCode, Recipe};

/// User-facing message stored when a fetch fails. The cause is only logged.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load cocktails. Please try again.";

/// Point-in-time view of the shared status fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStatus {
    pub loading: bool,
    pub error: Option<String>,
}

/// Process-wide recipe cache with a fetch action.
///
/// Construct one at startup and share it behind an `Arc`; independent
/// instances do not interact.
pub struct CocktailStore {
    source: Arc<dyn RecipeSource>,
    cocktails: Cache<CocktailCode, Arc<[Recipe]>>,
    loading: AtomicBool,
    error: RwLock<Option<String>>,
}

impl CocktailStore {
    /// Empty store reading from `source`.
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        // The key domain is closed, so an unbounded cache never grows past it.
        let cocktails = Cache::builder()
            .initial_capacity(CocktailCode::ALL.len())
            .build();
        Self {
            source,
            cocktails,
            loading: AtomicBool::new(false),
            error: RwLock::new(None),
        }
    }

    /// Empty store reading from TheCocktailDB through `client`.
    pub fn with_client(client: CocktailDbClient) -> Self {
        Self::new(Arc::new(client))
    }

    /// Populate the entry for `code` unless it already holds recipes.
    ///
    /// Never fails: the outcome is observed through [`get_cocktails`],
    /// [`is_loading`] and [`error`].
    ///
    /// [`get_cocktails`]: Self::get_cocktails
    /// [`is_loading`]: Self::is_loading
    /// [`error`]: Self::error
    pub async fn fetch_cocktails(&self, code: CocktailCode) {
        if self.is_populated(code) {
            debug!(%code, "cocktails already cached");
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "code" => code.as_str()).increment(1);
            return;
        }

        let _loading = LoadingGuard::engage(&self.loading);
        let start = Instant::now();

        let ok = match self.source.search(code).await {
            Ok(response) => {
                let recipes = response.into_recipes();
                debug!(%code, count = recipes.len(), source = self.source.name(), "cocktails fetched");
                self.cocktails.insert(code, recipes.into());
                self.set_error(None);
                true
            }
            Err(e) => {
                warn!(%code, source = self.source.name(), error = %e, "failed to load cocktails");
                self.set_error(Some(FETCH_ERROR_MESSAGE.to_string()));
                false
            }
        };

        Self::record_fetch(code, start, ok);
    }

    /// Fetch every known code concurrently.
    ///
    /// The fetches overlap, so `loading` drops to `false` as soon as the
    /// first of them completes.
    pub async fn prefetch_all(&self) {
        join_all(CocktailCode::ALL.map(|code| self.fetch_cocktails(code))).await;
    }

    /// Recipes cached for `code`, or an empty slice. Never fetches.
    pub fn get_cocktails(&self, code: CocktailCode) -> Arc<[Recipe]> {
        self.cocktails
            .get(&code)
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    /// Whether `code` holds at least one recipe (and will not be re-fetched).
    pub fn is_populated(&self, code: CocktailCode) -> bool {
        self.cocktails
            .get(&code)
            .is_some_and(|recipes| !recipes.is_empty())
    }

    /// Codes with an entry (possibly empty), in route order.
    pub fn cached_codes(&self) -> Vec<CocktailCode> {
        CocktailCode::ALL
            .into_iter()
            .filter(|code| self.cocktails.contains_key(code))
            .collect()
    }

    /// Whether a fetch is outstanding, as far as the shared flag knows.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Message left by the most recent failed fetch, if not since overwritten.
    pub fn error(&self) -> Option<String> {
        self.error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of `loading` and `error`.
    pub fn status(&self) -> StoreStatus {
        StoreStatus {
            loading: self.is_loading(),
            error: self.error(),
        }
    }

    fn set_error(&self, message: Option<String>) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = message;
    }

    fn record_fetch(code: CocktailCode, start: Instant, ok: bool) {
        let status = if ok { "ok" } else { "error" };
        metrics::counter!(telemetry::FETCHES_TOTAL,
            "code" => code.as_str(),
            "status" => status,
        )
        .increment(1);
        metrics::histogram!(telemetry::FETCH_DURATION_SECONDS, "code" => code.as_str())
            .record(start.elapsed().as_secs_f64());
    }
}

/// Holds the shared loading flag up until dropped, on every exit path.
struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    fn engage(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
