use httpmock::prelude::*;
use serde_json::json;
use storefront::api::fetch_products;
use storefront::{ShopifyConfig, StoreError};

const PRODUCTS_PATH: &str = "/admin/api/2024-10/products.json";

#[tokio::test]
async fn test_fetch_returns_body_unchanged() {
    storefront::api::set_silent(true);
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path(PRODUCTS_PATH);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"products": []}));
        })
        .await;

    let shopify = ShopifyConfig::new(server.base_url(), "shpat_test");
    let products = fetch_products(&reqwest::Client::new(), &shopify).await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(products, json!({"products": []}));
}

#[tokio::test]
async fn test_fetch_sends_access_token_header() {
    storefront::api::set_silent(true);
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(PRODUCTS_PATH)
                .header("X-Shopify-Access-Token", "shpat_secret");
            then.status(200).json_body(json!({"products": [{"id": 1}]}));
        })
        .await;

    let shopify = ShopifyConfig::new(server.base_url(), "shpat_secret");
    let products = fetch_products(&reqwest::Client::new(), &shopify).await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(products["products"][0]["id"], 1);
}

#[tokio::test]
async fn test_fetch_does_not_inspect_status() {
    storefront::api::set_silent(true);
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PRODUCTS_PATH);
            then.status(401).json_body(json!({"errors": "Invalid API key or access token"}));
        })
        .await;

    let shopify = ShopifyConfig::new(server.base_url(), "wrong");
    let body = fetch_products(&reqwest::Client::new(), &shopify).await.unwrap();

    assert_eq!(body, json!({"errors": "Invalid API key or access token"}));
}

#[tokio::test]
async fn test_fetch_non_json_body_fails() {
    storefront::api::set_silent(true);
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PRODUCTS_PATH);
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let shopify = ShopifyConfig::new(server.base_url(), "shpat_test");
    let result = fetch_products(&reqwest::Client::new(), &shopify).await;

    assert!(matches!(result, Err(StoreError::Decode { .. })));
}

#[tokio::test]
async fn test_fetch_unreachable_endpoint_fails() {
    storefront::api::set_silent(true);
    let shopify = ShopifyConfig::new("http://127.0.0.1:1", "shpat_test");
    let result = fetch_products(&reqwest::Client::new(), &shopify).await;

    assert!(matches!(result, Err(StoreError::Transport { .. })));
}

#[tokio::test]
async fn test_fetch_with_empty_hostname_fails() {
    storefront::api::set_silent(true);
    let result = fetch_products(&reqwest::Client::new(), &ShopifyConfig::default()).await;

    assert!(matches!(result, Err(StoreError::Transport { .. })));
}
