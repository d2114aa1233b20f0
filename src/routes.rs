use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;

use crate::models::AppState;
use crate::handlers;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise use embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::home::home_get))
        .route("/description/border", post(handlers::description::toggle_border))
        .route("/description/select", post(handlers::description::toggle_select))
        // `/store/:category` and `/store/*categories` cannot both be registered;
        // the wildcard handler picks the single or catch-all form by segment count.
        .route("/store", get(handlers::store::store_index))
        .route("/store/", get(handlers::store::store_index))
        .route("/store/*categories", get(handlers::store::store_category))
        .route("/static/styles.css", get(move || {
            let css = stylesheet_content.clone();
            async move { ([(CONTENT_TYPE, "text/css")], css) }
        }))
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new("static")),
        )
        .fallback(handlers::helpers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
