//! Public data types for recipes and their category codes.

mod code;
mod recipe;
mod response;

pub use code::CocktailCode;
pub use recipe::{IngredientSlot, LocalizedInstructions, MAX_INGREDIENT_SLOTS, Recipe};
pub use response::DrinksResponse;
