// Commerce platform admin API
pub mod client;
pub mod products;

pub use client::{build_client, set_silent};
pub use products::{fetch_products, product_rows, ProductRow};
