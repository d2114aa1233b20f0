use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::templates::{BaseTemplate, ErrorTemplate, STORE_NAME};

pub const ERROR_PAGE_MESSAGE: &str = "We could not load this page. Please try again later.";

pub fn page_title(section: &str) -> String {
    if section.is_empty() {
        STORE_NAME.to_string()
    } else {
        format!("{} | {}", section, STORE_NAME)
    }
}

pub fn plain_html<S: AsRef<str>>(s: S) -> Response {
    Html(format!("<!DOCTYPE html><html><body><p>{}</p></body></html>", s.as_ref())).into_response()
}

pub fn render_template<T: askama::Template + BaseTemplate>(t: T) -> Response {
    tracing::debug!(title = t.page_title(), "Rendering header");
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Generic error page shown in place of a page that failed to render.
/// Details stay in the logs.
pub fn render_error_page(status: StatusCode) -> Response {
    let page = ErrorTemplate {
        page_title: page_title("Error"),
        store_name: STORE_NAME.to_string(),
        message: ERROR_PAGE_MESSAGE.to_string(),
    };
    let mut response = render_template(page);
    *response.status_mut() = status;
    response
}

pub async fn not_found() -> Response {
    let mut response = plain_html("Page not found");
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}
