// Base template trait and macro
pub mod base_template;

// Page templates
pub mod home_template;
pub mod category_template;
pub mod error_template;

pub use base_template::BaseTemplate;
pub use home_template::HomeTemplate;
pub use category_template::CategoryTemplate;
pub use error_template::ErrorTemplate;

pub const STORE_NAME: &str = "Future world";
