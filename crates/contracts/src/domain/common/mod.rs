//! Common types and traits for all aggregates

pub mod aggregate_id;
pub mod aggregate_root;
pub mod base_aggregate;
pub mod bulk;
pub mod collection;
pub mod entity_metadata;
pub mod hub_entity;
pub mod list_filter;

// Re-exports
pub use aggregate_id::{sample_uuid, AggregateId};
pub use aggregate_root::AggregateRoot;
pub use base_aggregate::BaseAggregate;
pub use bulk::{BulkAction, BulkRequest, BulkResponse};
pub use entity_metadata::EntityMetadata;
pub use hub_entity::{base_cell, id_for_insert, HubEntity};
pub use list_filter::{matches_active, matches_search, ListFilter};
