use askama::Template;
use crate::models::DescriptionState;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page_title: String,
    pub store_name: String,
    pub description: DescriptionState,
}

crate::impl_base_template!(HomeTemplate);
