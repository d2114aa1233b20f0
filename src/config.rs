use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SHOPIFY_HOSTNAME: &str = "";
pub const DEFAULT_SHOPIFY_API_KEY: &str = "";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

pub const SHOPIFY_HOSTNAME_VAR: &str = "SHOPIFY_HOSTNAME";
pub const SHOPIFY_API_KEY_VAR: &str = "SHOPIFY_API_KEY";

/// Admin API version the products endpoint is pinned to.
pub const SHOPIFY_API_VERSION: &str = "2024-10";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_shopify_hostname() -> String {
    env::var(SHOPIFY_HOSTNAME_VAR).unwrap_or_else(|_| DEFAULT_SHOPIFY_HOSTNAME.to_string())
}

pub fn get_shopify_api_key() -> String {
    env::var(SHOPIFY_API_KEY_VAR).unwrap_or_else(|_| DEFAULT_SHOPIFY_API_KEY.to_string())
}

/// Connection settings for the commerce platform admin API.
///
/// Built once at startup and handed to the fetcher explicitly. Neither value
/// is validated: an empty hostname or key is carried through and surfaces as
/// a failed request at fetch time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopifyConfig {
    pub hostname: String,
    pub api_key: String,
}

impl ShopifyConfig {
    pub fn new(hostname: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(get_shopify_hostname(), get_shopify_api_key())
    }

    /// Full URL of the products listing endpoint.
    pub fn products_url(&self) -> String {
        format!(
            "{}/admin/api/{}/products.json",
            sanitize_hostname(&self.hostname),
            SHOPIFY_API_VERSION
        )
    }

    /// Names of the settings that were left empty.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.hostname.trim().is_empty() {
            missing.push(SHOPIFY_HOSTNAME_VAR);
        }
        if self.api_key.trim().is_empty() {
            missing.push(SHOPIFY_API_KEY_VAR);
        }
        missing
    }
}

pub fn sanitize_hostname(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
