//! Fetch client for the remote recipe source.

mod cocktaildb;
mod traits;

pub use cocktaildb::{ClientConfig, CocktailDbClient, DEFAULT_BASE_URL};
pub use traits::RecipeSource;
