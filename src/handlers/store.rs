use axum::{extract::OriginalUri, response::Response};

use crate::models::CategoryParams;
use crate::templates::{CategoryTemplate, STORE_NAME};

use super::helpers::{page_title, render_template};

const STORE_PREFIX: &str = "/store";

pub fn render_category(params: CategoryParams) -> Response {
    tracing::debug!(?params, "Category page");
    render_template(CategoryTemplate {
        page_title: page_title("Store"),
        store_name: STORE_NAME.to_string(),
        category: params.display(),
    })
}

/// `/store` with no segments: the optional catch-all left empty.
pub async fn store_index() -> Response {
    render_category(CategoryParams::default())
}

// Segments are taken from the still-encoded path; the `Path` extractor
// decodes before splitting and would break `%2F` apart.
pub async fn store_category(OriginalUri(uri): OriginalUri) -> Response {
    let path = uri.path();
    let tail = path.strip_prefix(STORE_PREFIX).unwrap_or(path);
    render_category(CategoryParams::from_encoded_path(tail))
}
