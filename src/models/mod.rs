pub mod app_state;
pub mod category_params;
pub mod description_state;

pub use app_state::AppState;
pub use category_params::CategoryParams;
pub use description_state::DescriptionState;
