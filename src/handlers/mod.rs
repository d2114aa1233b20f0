pub mod helpers;
pub mod home;
pub mod store;
pub mod description;
