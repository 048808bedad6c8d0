//! Category codes: the fixed key domain of the recipe cache.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ShakerError;

/// One of the known cocktail category codes.
///
/// The set is closed: anything else is rejected at parse time, so the
/// store and the fetch client never see an unknown code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CocktailCode {
    Margarita,
    Mojito,
    A1,
    Kir,
}

impl CocktailCode {
    /// Every known code, in route order. The first is the default route.
    pub const ALL: [CocktailCode; 4] = [Self::Margarita, Self::Mojito, Self::A1, Self::Kir];

    /// Code used when no path is given.
    pub const fn default_route() -> Self {
        Self::ALL[0]
    }

    /// Literal string sent as the `s` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Margarita => "margarita",
            Self::Mojito => "mojito",
            Self::A1 => "a1",
            Self::Kir => "kir",
        }
    }
}

impl fmt::Display for CocktailCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CocktailCode {
    type Err = ShakerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ShakerError::UnknownCode(s.to_string()))
    }
}

impl Serialize for CocktailCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CocktailCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
