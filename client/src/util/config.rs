//! Backend base URL discovery.
//!
//! The server reads `GEMINIWIRE_API_BASE_URL` and writes it into the page as
//! `<meta name="geminiwire-api-base">`. After hydration the browser reads the
//! same tag back, so SSR and WASM agree on the backend without a rebuild.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use wires::{DEFAULT_API_BASE_URL, Endpoints};

/// Environment variable holding the backend base URL.
pub const API_BASE_ENV: &str = "GEMINIWIRE_API_BASE_URL";

/// `name` of the `<meta>` tag carrying the base URL to the browser.
pub const API_BASE_META: &str = "geminiwire-api-base";

/// Backend location, provided to components via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    endpoints: Endpoints,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { endpoints: Endpoints::new(base_url) }
    }

    /// Browser: read the `<meta>` tag. Elsewhere: read [`API_BASE_ENV`].
    /// Falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{API_BASE_META}\"]");
            let base = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            Self::new(base.as_deref().unwrap_or(DEFAULT_API_BASE_URL))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let base = std::env::var(API_BASE_ENV).ok();
            Self::new(base.as_deref().unwrap_or(DEFAULT_API_BASE_URL))
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.endpoints.base()
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
