/// Error types for the storefront
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::handlers::helpers::render_error_page;

/// Errors that can occur while fetching from the commerce platform
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a response (DNS, connect, TLS, timeout, bad URL)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not valid JSON
    #[error("Response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Page render aborted");
        render_error_page(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
