use askama::Template;

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub page_title: String,
    pub store_name: String,
    pub message: String,
}

crate::impl_base_template!(ErrorTemplate);
