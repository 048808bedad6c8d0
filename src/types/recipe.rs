//! Recipe records as returned by TheCocktailDB.
//!
//! The wire format spreads ingredients over numbered keys
//! (`strIngredient1`, `strMeasure1`, `strIngredient2`, ...). [`Recipe`]
//! folds them into an ordered list of [`IngredientSlot`]s on the way in
//! and spreads them back out on the way out, so a `Recipe` serializes to
//! the same shape the API sends.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// Highest ingredient index accepted from a payload. Keys above it are ignored.
pub const MAX_INGREDIENT_SLOTS: usize = 100;

/// One numbered ingredient/measure pair. Either half may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

impl IngredientSlot {
    fn is_empty(&self) -> bool {
        self.ingredient.is_none() && self.measure.is_none()
    }
}

/// Instructions translated by the source, where available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedInstructions {
    #[serde(rename = "strInstructionsES", default)]
    pub es: Option<String>,
    #[serde(rename = "strInstructionsDE", default)]
    pub de: Option<String>,
    #[serde(rename = "strInstructionsFR", default)]
    pub fr: Option<String>,
    #[serde(rename = "strInstructionsIT", default)]
    pub it: Option<String>,
    #[serde(rename = "strInstructionsZH-HANS", default)]
    pub zh_hans: Option<String>,
    #[serde(rename = "strInstructionsZH-HANT", default)]
    pub zh_hant: Option<String>,
}

/// One cocktail's full descriptive record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecipe", into = "RawRecipe")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub alternate_name: Option<String>,
    pub tags: Option<String>,
    pub video: Option<String>,
    pub category: String,
    pub iba: Option<String>,
    pub alcoholic: String,
    pub glass: String,
    pub instructions: String,
    pub localized_instructions: LocalizedInstructions,
    pub thumbnail: Option<String>,
    pub image_source: Option<String>,
    pub image_attribution: Option<String>,
    pub creative_commons_confirmed: Option<String>,
    pub date_modified: Option<String>,
    /// Slot `i` holds `strIngredient{i+1}` / `strMeasure{i+1}`.
    pub ingredients: Vec<IngredientSlot>,
}

impl Recipe {
    /// Comma-separated `strTags` split into trimmed, non-empty tags.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Slots that name an ingredient, with their 1-based index.
    pub fn populated_ingredients(&self) -> impl Iterator<Item = (usize, &IngredientSlot)> {
        self.ingredients
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.ingredient.is_some())
            .map(|(i, slot)| (i + 1, slot))
    }
}

/// Wire shape of a drink object.
#[derive(Serialize, Deserialize)]
struct RawRecipe {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink")]
    name: String,
    #[serde(rename = "strDrinkAlternate", default)]
    alternate_name: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strVideo", default)]
    video: Option<String>,
    #[serde(rename = "strCategory")]
    category: String,
    #[serde(rename = "strIBA", default)]
    iba: Option<String>,
    #[serde(rename = "strAlcoholic")]
    alcoholic: String,
    #[serde(rename = "strGlass")]
    glass: String,
    #[serde(rename = "strInstructions")]
    instructions: String,
    #[serde(flatten)]
    localized_instructions: LocalizedInstructions,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strImageSource", default)]
    image_source: Option<String>,
    #[serde(rename = "strImageAttribution", default)]
    image_attribution: Option<String>,
    #[serde(rename = "strCreativeCommonsConfirmed", default)]
    creative_commons_confirmed: Option<String>,
    #[serde(rename = "dateModified", default)]
    date_modified: Option<String>,
    /// Everything else, including the numbered ingredient keys.
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl From<RawRecipe> for Recipe {
    fn from(raw: RawRecipe) -> Self {
        Self {
            ingredients: collect_slots(&raw.rest),
            id: raw.id,
            name: raw.name,
            alternate_name: raw.alternate_name,
            tags: raw.tags,
            video: raw.video,
            category: raw.category,
            iba: raw.iba,
            alcoholic: raw.alcoholic,
            glass: raw.glass,
            instructions: raw.instructions,
            localized_instructions: raw.localized_instructions,
            thumbnail: raw.thumbnail,
            image_source: raw.image_source,
            image_attribution: raw.image_attribution,
            creative_commons_confirmed: raw.creative_commons_confirmed,
            date_modified: raw.date_modified,
        }
    }
}

impl From<Recipe> for RawRecipe {
    fn from(recipe: Recipe) -> Self {
        let mut rest = Map::new();
        for (i, slot) in recipe.ingredients.into_iter().enumerate() {
            let n = i + 1;
            rest.insert(
                format!("{INGREDIENT_PREFIX}{n}"),
                slot.ingredient.map_or(Value::Null, Value::String),
            );
            rest.insert(
                format!("{MEASURE_PREFIX}{n}"),
                slot.measure.map_or(Value::Null, Value::String),
            );
        }
        Self {
            id: recipe.id,
            name: recipe.name,
            alternate_name: recipe.alternate_name,
            tags: recipe.tags,
            video: recipe.video,
            category: recipe.category,
            iba: recipe.iba,
            alcoholic: recipe.alcoholic,
            glass: recipe.glass,
            instructions: recipe.instructions,
            localized_instructions: recipe.localized_instructions,
            thumbnail: recipe.thumbnail,
            image_source: recipe.image_source,
            image_attribution: recipe.image_attribution,
            creative_commons_confirmed: recipe.creative_commons_confirmed,
            date_modified: recipe.date_modified,
            rest,
        }
    }
}

/// Parse `{prefix}{n}` into `n` when `1 <= n <= MAX_INGREDIENT_SLOTS`.
fn slot_index(key: &str, prefix: &str) -> Option<usize> {
    let n: usize = key.strip_prefix(prefix)?.parse().ok()?;
    (1..=MAX_INGREDIENT_SLOTS).contains(&n).then_some(n)
}

/// Null, non-string and blank values count as absent.
fn populated(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Fold numbered keys into slots `1..=N`, N being the highest populated index.
fn collect_slots(rest: &Map<String, Value>) -> Vec<IngredientSlot> {
    let mut by_index: BTreeMap<usize, IngredientSlot> = BTreeMap::new();
    for (key, value) in rest {
        if let Some(n) = slot_index(key, INGREDIENT_PREFIX) {
            by_index.entry(n).or_default().ingredient = populated(value);
        } else if let Some(n) = slot_index(key, MEASURE_PREFIX) {
            by_index.entry(n).or_default().measure = populated(value);
        }
    }
    by_index.retain(|_, slot| !slot.is_empty());

    let len = by_index.keys().next_back().copied().unwrap_or(0);
    let mut slots = vec![IngredientSlot::default(); len];
    for (n, slot) in by_index {
        slots[n - 1] = slot;
    }
    slots
}
