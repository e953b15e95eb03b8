//! Field metadata for aggregates
//!
//! Compile-time descriptions of the fields each hub lists, shows in the detail
//! panel and collects in the create wizard.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::HubEntity;
//!
//! for field in Product::fields() {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldType;
pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
