use askama::Template;

#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub page_title: String,
    pub store_name: String,
    pub category: String,
}

crate::impl_base_template!(CategoryTemplate);
