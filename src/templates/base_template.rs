/// Base template trait providing the fields every page layout reads.
pub trait BaseTemplate {
    fn page_title(&self) -> &str;
    fn store_name(&self) -> &str;
}

/// Macro to implement BaseTemplate for a struct with standard fields
#[macro_export]
macro_rules! impl_base_template {
    ($struct_name:ty) => {
        impl $crate::templates::BaseTemplate for $struct_name {
            fn page_title(&self) -> &str {
                &self.page_title
            }
            fn store_name(&self) -> &str {
                &self.store_name
            }
        }
    };
}
