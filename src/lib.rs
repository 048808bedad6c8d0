//! Shaker - fetch-once cocktail recipe cache for TheCocktailDB
//!
//! Recipes are fetched per [`CocktailCode`] through a [`RecipeSource`]
//! (by default the HTTP [`CocktailDbClient`](client::CocktailDbClient))
//! and kept in a [`CocktailStore`] for the lifetime of the process.
//!
//! # Example
//!
//! ```rust,no_run
//! use shaker::{CocktailCode, CocktailStore};
//! use shaker::client::CocktailDbClient;
//!
//! #[tokio::main]
//! async fn main() -> shaker::Result<()> {
//!     let store = CocktailStore::with_client(CocktailDbClient::new()?);
//!
//!     store.fetch_cocktails(CocktailCode::Mojito).await;
//!     if let Some(message) = store.error() {
//!         eprintln!("{message}");
//!     }
//!
//!     for recipe in store.get_cocktails(CocktailCode::Mojito).iter() {
//!         println!("{} ({})", recipe.name, recipe.glass);
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod client;
#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod router;
pub mod store;
pub mod telemetry;
pub mod types;
mod version;

// Re-export main types at crate root
pub use app::{CocktailApp, View};
pub use client::RecipeSource;
pub use error::{Result, ShakerError, TransportError};
pub use router::{Resolution, Route};
pub use store::{CocktailStore, FETCH_ERROR_MESSAGE, StoreStatus};
pub use version::{PKG_VERSION, version_string};

// Re-export all types
pub use types::{CocktailCode, DrinksResponse, IngredientSlot, LocalizedInstructions, Recipe};
