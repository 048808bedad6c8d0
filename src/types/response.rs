//! Response envelope of the search endpoint.

use serde::{Deserialize, Serialize};

use super::Recipe;

/// Body of `GET /search.php?s={code}`.
///
/// The source reports "no matches" as `"drinks": null`, not as an empty
/// list. [`DrinksResponse::into_recipes`] folds both into an empty `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinksResponse {
    #[serde(default)]
    pub drinks: Option<Vec<Recipe>>,
}

impl DrinksResponse {
    /// Wrap a list of recipes as the source would send it.
    pub fn new(drinks: Vec<Recipe>) -> Self {
        Self {
            drinks: Some(drinks),
        }
    }

    /// The "no results" envelope (`"drinks": null`).
    pub fn absent() -> Self {
        Self { drinks: None }
    }

    /// Recipes in response order; the absence marker becomes an empty list.
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.drinks.unwrap_or_default()
    }
}
