pub mod csv;
pub mod json;
pub mod labels;
pub mod table;

pub use labels::category_label;
