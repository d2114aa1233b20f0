use storefront::config::{self, ShopifyConfig};
use std::env;

#[test]
fn test_products_url_joins_hostname_and_path() {
    let shopify = ShopifyConfig::new("https://shop.example.com", "key");
    assert_eq!(
        shopify.products_url(),
        "https://shop.example.com/admin/api/2024-10/products.json"
    );
}

#[test]
fn test_products_url_trims_trailing_slash() {
    let shopify = ShopifyConfig::new("https://shop.example.com///", "key");
    assert_eq!(
        shopify.products_url(),
        "https://shop.example.com/admin/api/2024-10/products.json"
    );
}

#[test]
fn test_products_url_with_empty_hostname_is_not_defaulted() {
    let shopify = ShopifyConfig::default();
    assert_eq!(shopify.products_url(), "/admin/api/2024-10/products.json");
}

#[test]
fn test_sanitize_hostname_with_whitespace() {
    assert_eq!(
        config::sanitize_hostname("  https://shop.example.com/  "),
        "https://shop.example.com"
    );
}

#[test]
fn test_missing_settings_lists_empty_values() {
    let shopify = ShopifyConfig::new("", "  ");
    assert_eq!(
        shopify.missing_settings(),
        vec![config::SHOPIFY_HOSTNAME_VAR, config::SHOPIFY_API_KEY_VAR]
    );
    assert!(ShopifyConfig::new("https://shop.example.com", "key").missing_settings().is_empty());
}

// Single test so the environment is not mutated from several threads at once.
#[test]
fn test_from_env_reads_variables_and_defaults_to_empty() {
    env::set_var("SHOPIFY_HOSTNAME", "https://shop.example.com");
    env::set_var("SHOPIFY_API_KEY", "shpat_123");

    let shopify = ShopifyConfig::from_env();
    assert_eq!(shopify.hostname, "https://shop.example.com");
    assert_eq!(shopify.api_key, "shpat_123");

    env::remove_var("SHOPIFY_HOSTNAME");
    env::remove_var("SHOPIFY_API_KEY");

    let shopify = ShopifyConfig::from_env();
    assert_eq!(shopify, ShopifyConfig::default());
}
