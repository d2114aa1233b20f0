//! Server-rendered storefront.
//!
//! Renders the home page, the store layout and dynamic category pages, and
//! pulls the product list from the commerce platform admin API.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod templates;

pub use config::ShopifyConfig;
pub use error::StoreError;
pub use models::{AppState, CategoryParams, DescriptionState};
pub use routes::build_router;
