//! Path routing for the cocktail views.
//!
//! Route table, first match wins:
//!
//! | path | result |
//! |---|---|
//! | `/` | redirect to `/{first code}` |
//! | `/404` | [`Route::NotFound`] |
//! | `/:code`, code known | [`Route::Cocktail`] |
//! | `/:code`, code unknown | redirect to `/404` |
//! | anything else | redirect to `/404` |
//!
//! One trailing slash is ignored. Matching is case-sensitive.

use tracing::debug;

use crate::types::CocktailCode;

/// Path of the not-found view.
pub const NOT_FOUND_PATH: &str = "/404";

/// Upper bound on redirects followed by [`navigate`].
const MAX_REDIRECTS: usize = 4;

/// A view the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Recipe list for one code.
    Cocktail(CocktailCode),
    /// Not-found view.
    NotFound,
}

impl Route {
    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Cocktail(code) => format!("/{code}"),
            Self::NotFound => NOT_FOUND_PATH.to_string(),
        }
    }
}

/// Result of matching one path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(String),
}

/// Match `path` against the route table, without following redirects.
pub fn resolve(path: &str) -> Resolution {
    let path = path.strip_suffix('/').filter(|p| !p.is_empty()).unwrap_or(path);

    if path.is_empty() || path == "/" {
        return Resolution::Redirect(Route::Cocktail(CocktailCode::default_route()).path());
    }
    if path == NOT_FOUND_PATH {
        return Resolution::Render(Route::NotFound);
    }

    match path.strip_prefix('/') {
        Some(segment) if !segment.is_empty() && !segment.contains('/') => {
            match segment.parse::<CocktailCode>() {
                Ok(code) => Resolution::Render(Route::Cocktail(code)),
                Err(_) => Resolution::Redirect(NOT_FOUND_PATH.to_string()),
            }
        }
        _ => Resolution::Redirect(NOT_FOUND_PATH.to_string()),
    }
}

/// Resolve `path`, following redirects to the route that ends up rendered.
pub fn navigate(path: &str) -> Route {
    let mut current = path.to_string();
    for _ in 0..MAX_REDIRECTS {
        match resolve(&current) {
            Resolution::Render(route) => return route,
            Resolution::Redirect(target) => {
                debug!(from = %current, to = %target, "redirect");
                current = target;
            }
        }
    }
    Route::NotFound
}
