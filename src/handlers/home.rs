use axum::{extract::State, response::Response};
use axum_extra::extract::cookie::CookieJar;

use crate::api::fetch_products;
use crate::error::StoreError;
use crate::models::{AppState, DescriptionState};
use crate::templates::{HomeTemplate, STORE_NAME};

use super::helpers::{page_title, render_template};

pub async fn home_get(State(state): State<AppState>, jar: CookieJar) -> Result<Response, StoreError> {
    let description = DescriptionState::from_jar(&jar);
    tracing::debug!(
        has_border = description.has_border,
        has_select = description.has_select,
        "Description state"
    );

    // The product list is only logged for now; the section shows a heading.
    fetch_products(&state.client, &state.shopify).await?;

    Ok(render_template(HomeTemplate {
        page_title: page_title(""),
        store_name: STORE_NAME.to_string(),
        description,
    }))
}
