//! Navigation glue between the router and the store.

use std::sync::Arc;

use tracing::info;

use crate::router::{self, Route};
use crate::store::CocktailStore;
use crate::types::Recipe;

/// What a view has to show after a navigation settles.
#[derive(Debug, Clone)]
pub struct View {
    pub route: Route,
    /// Recipes for a cocktail route; empty for not-found.
    pub recipes: Arc<[Recipe]>,
    pub error: Option<String>,
}

/// Application shell: owns the store and reacts to navigation.
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use shaker::{CocktailApp, CocktailStore};
/// use shaker::client::CocktailDbClient;
///
/// # async fn run() -> shaker::Result<()> {
/// let store = Arc::new(CocktailStore::with_client(CocktailDbClient::new()?));
/// let app = CocktailApp::new(store);
/// let view = app.visit("/mojito").await;
/// println!("{} recipes", view.recipes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CocktailApp {
    store: Arc<CocktailStore>,
}

impl CocktailApp {
    pub fn new(store: Arc<CocktailStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CocktailStore> {
        &self.store
    }

    /// Resolve `path` and, for a cocktail route, fetch its recipes.
    ///
    /// Unknown codes end on [`Route::NotFound`] without touching the store.
    pub async fn visit(&self, path: &str) -> View {
        let route = router::navigate(path);
        info!(%path, resolved = %route.path(), "navigate");

        match route {
            Route::Cocktail(code) => {
                self.store.fetch_cocktails(code).await;
                View {
                    route,
                    recipes: self.store.get_cocktails(code),
                    error: self.store.error(),
                }
            }
            Route::NotFound => View {
                route,
                recipes: Arc::from(Vec::new()),
                error: None,
            },
        }
    }
}
