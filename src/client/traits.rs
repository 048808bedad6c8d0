//! Recipe source trait.
//!
//! The store talks to the outside world only through [`RecipeSource`], so
//! tests can substitute an in-memory source and the HTTP client stays a
//! thin, replaceable wrapper.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::{CocktailCode, DrinksResponse};

/// Anything that can answer "which recipes match this code".
///
/// Implementations issue exactly one request per call: no retry, no
/// caching. Callers must not assume a timeout.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Source name for logging/debugging.
    fn name(&self) -> &str;

    /// Look up every recipe matching `code`.
    ///
    /// `Ok(DrinksResponse { drinks: None })` means "no matches"; it is not
    /// an error.
    async fn search(&self, code: CocktailCode) -> Result<DrinksResponse, TransportError>;
}
