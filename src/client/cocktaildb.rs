//! TheCocktailDB search client.
//!
//! See: <https://www.thecocktaildb.com/api.php>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use super::traits::RecipeSource;
use crate::error::TransportError;
use crate::types::{CocktailCode, DrinksResponse};
use crate::version;
use crate::{Result, ShakerError};

/// Default base URL for TheCocktailDB v1 API (free key `1`).
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Connection settings for [`CocktailDbClient`].
///
/// ```rust
/// # use shaker::client::ClientConfig;
/// let config = ClientConfig::default();
/// assert!(config.base_url.contains("thecocktaildb.com"));
/// assert!(config.timeout.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL; `/search.php` is appended.
    pub base_url: String,
    /// Overall request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Config with a custom base URL and no timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// HTTP client for the `search.php` endpoint.
#[derive(Debug, Clone)]
pub struct CocktailDbClient {
    http: Client,
    base_url: String,
}

impl CocktailDbClient {
    /// Client against the public TheCocktailDB endpoint.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::with_base_url(base_url))
    }

    /// Build a client from explicit settings.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(version::version_string());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ShakerError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every recipe matching `code`.
    ///
    /// Failures are logged and returned unchanged; nothing is retried.
    pub async fn search(
        &self,
        code: CocktailCode,
    ) -> std::result::Result<DrinksResponse, TransportError> {
        let result = self.send_search(code).await;
        if let Err(ref e) = result {
            error!(%code, error = %e, "error fetching cocktails");
        }
        result
    }

    async fn send_search(
        &self,
        code: CocktailCode,
    ) -> std::result::Result<DrinksResponse, TransportError> {
        let endpoint = format!("{}/search.php", self.base_url);
        let request = self
            .http
            .get(&endpoint)
            .query(&[("s", code.as_str())])
            .build()
            .map_err(|e| TransportError::Request {
                url: endpoint.clone(),
                message: e.to_string(),
            })?;
        let url = request.url().to_string();
        debug!(%url, "searching cocktails");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| TransportError::Request {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| TransportError::Request {
            url: url.clone(),
            message: format!("failed to read response body: {e}"),
        })?;

        serde_json::from_slice(&body).map_err(|e| TransportError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RecipeSource for CocktailDbClient {
    fn name(&self) -> &str {
        "thecocktaildb"
    }

    async fn search(
        &self,
        code: CocktailCode,
    ) -> std::result::Result<DrinksResponse, TransportError> {
        CocktailDbClient::search(self, code).await
    }
}
