pub mod autocomplete;
pub mod base;
pub mod dropdown;
pub mod text;
pub mod text_edit;
pub mod traits;
pub mod validators;
