use serde_json::Value;

use crate::config::ShopifyConfig;
use crate::error::StoreError;
use super::client::{echo_request, echo_response, ACCESS_TOKEN_HEADER};

/// Fetch the product list from the admin API.
///
/// Sends one GET to the products endpoint with the access-token header and
/// returns whatever JSON comes back. The status code is not inspected and no
/// shape is asserted on the body.
///
/// # Errors
///
/// Returns `StoreError::Transport` when no response arrives and
/// `StoreError::Decode` when the body is not JSON.
pub async fn fetch_products(
    client: &reqwest::Client,
    shopify: &ShopifyConfig,
) -> Result<Value, StoreError> {
    let url = shopify.products_url();
    echo_request("GET", &url, &shopify.api_key);

    let response = client
        .get(&url)
        .header(ACCESS_TOKEN_HEADER, &shopify.api_key)
        .send()
        .await
        .map_err(|source| StoreError::Transport { url: url.clone(), source })?;

    tracing::debug!(status = %response.status(), %url, "Products response received");

    let products: Value = response
        .json()
        .await
        .map_err(|source| StoreError::Decode { url: url.clone(), source })?;

    echo_response(&products);
    tracing::info!(products = %products, "products");

    Ok(products)
}

/// One line of the product summary printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: String,
    pub title: String,
    pub vendor: String,
    pub product_type: String,
    pub status: String,
    pub variants: usize,
}

impl ProductRow {
    pub const HEADERS: [&'static str; 6] = ["ID", "Title", "Vendor", "Type", "Status", "Variants"];

    pub fn cells(&self) -> [String; 6] {
        [
            self.id.clone(),
            self.title.clone(),
            self.vendor.clone(),
            self.product_type.clone(),
            self.status.clone(),
            self.variants.to_string(),
        ]
    }
}

/// Summarise the `products` array of a listing response.
///
/// Returns `None` when the body has no `products` array (an error envelope,
/// for instance). Fields missing from an entry are left blank; entries that
/// are not objects are skipped.
pub fn product_rows(body: &Value) -> Option<Vec<ProductRow>> {
    let products = body.get("products")?.as_array()?;
    Some(
        products
            .iter()
            .filter_map(Value::as_object)
            .map(|p| ProductRow {
                id: p.get("id").map(scalar_text).unwrap_or_default(),
                title: p.get("title").map(scalar_text).unwrap_or_default(),
                vendor: p.get("vendor").map(scalar_text).unwrap_or_default(),
                product_type: p.get("product_type").map(scalar_text).unwrap_or_default(),
                status: p.get("status").map(scalar_text).unwrap_or_default(),
                variants: p
                    .get("variants")
                    .and_then(Value::as_array)
                    .map_or(0, Vec::len),
            })
            .collect(),
    )
}

// Product ids arrive as JSON numbers; strings are shown without quotes.
fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
