use super::{AggregateId, BaseAggregate, EntityMetadata};

/// Root of an aggregate.
///
/// Instance accessors are derived from the embedded [`BaseAggregate`]; the
/// static part describes the aggregate class (index, collection, UI names).
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id: AggregateId;

    // ============================================================================
    // Instance data
    // ============================================================================

    fn base(&self) -> &BaseAggregate<Self::Id>;

    fn base_mut(&mut self) -> &mut BaseAggregate<Self::Id>;

    fn id(&self) -> Self::Id {
        self.base().id
    }

    /// Business code (e.g. "CAT-001", "SKU-10042")
    fn code(&self) -> &str {
        &self.base().code
    }

    /// Display name of the record
    fn description(&self) -> &str {
        &self.base().description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base().metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base_mut().metadata
    }

    fn is_active(&self) -> bool {
        self.base().is_active
    }

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Index of the aggregate in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name, also the URL root segment (e.g. "categories")
    fn collection_name() -> &'static str;

    /// UI name of a single element (e.g. "Category")
    fn element_name() -> &'static str;

    /// UI name of the list (e.g. "Categories")
    fn list_name() -> &'static str;

    /// Full system name (e.g. "a001_categories")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
