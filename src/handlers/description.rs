use axum::response::{IntoResponse, Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::models::DescriptionState;

pub async fn toggle_border(jar: CookieJar) -> impl IntoResponse {
    let mut state = DescriptionState::from_jar(&jar);
    state.toggle_border();
    tracing::debug!(has_border = state.has_border, "Toggled description border");
    (state.store(jar), Redirect::to("/"))
}

pub async fn toggle_select(jar: CookieJar) -> impl IntoResponse {
    let mut state = DescriptionState::from_jar(&jar);
    state.toggle_select();
    tracing::debug!(has_select = state.has_select, "Toggled description swatch");
    (state.store(jar), Redirect::to("/"))
}
