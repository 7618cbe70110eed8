//! Application configuration.
//!
//! The WASM client cannot read environment variables at runtime, so the API
//! base URL is baked in at compile time with `MOVIEREVIEW_API_URL` (defaults
//! to `/api`, i.e. same-origin behind a reverse proxy). The SSR binary loads
//! its own settings via `Config::from_env()` after `dotenvy::dotenv()`.

/// Base URL of the external movie review REST API.
pub fn api_base_url() -> &'static str {
    option_env!("MOVIEREVIEW_API_URL").unwrap_or("/api")
}

/// Settings for the shell server, loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream API the client was compiled against, for startup logging.
    pub api_url: Option<String>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from a `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("MOVIEREVIEW_API_URL").ok(),
        }
    }

    pub fn has_api_url(&self) -> bool {
        self.api_url.is_some()
    }
}

#[cfg(feature = "ssr")]
impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_is_same_origin() {
        // When MOVIEREVIEW_API_URL is not set at build time we expect the
        // same-origin default.
        assert!(api_base_url().starts_with('/') || api_base_url().starts_with("http"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn config_reports_presence_of_api_url() {
        let config = Config { api_url: None };
        assert!(!config.has_api_url());

        let config = Config {
            api_url: Some("http://backend:8080/api".into()),
        };
        assert!(config.has_api_url());
    }
}
