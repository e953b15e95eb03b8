pub mod form;
pub mod metadata;
