use crate::config::ShopifyConfig;

#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub shopify: ShopifyConfig,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(client: reqwest::Client, shopify: ShopifyConfig) -> Self {
        Self {
            client,
            shopify,
            custom_css: None,
        }
    }
}
