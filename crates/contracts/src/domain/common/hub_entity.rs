use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use super::{AggregateId, AggregateRoot, BaseAggregate, ListFilter};
use crate::shared::form::FormValues;
use crate::shared::metadata::FieldMetadata;

/// An aggregate managed by a hub (list, detail panel, create wizard).
///
/// Ties the aggregate to its typed DTO and filter and to the field metadata
/// the generic hub UI renders from.
pub trait HubEntity:
    AggregateRoot + Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Create/update payload
    type Dto: Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// List filter, also the query string of the list endpoint
    type Filter: ListFilter<Self>
        + Clone
        + Debug
        + Default
        + PartialEq
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    /// All editable and listable fields, in form order
    fn fields() -> &'static [FieldMetadata];

    /// Sample records served when the REST backend is unreachable in development
    fn samples() -> Vec<Self>;

    /// Titles of the create wizard steps; `FieldMetadata::step` indexes this
    fn wizard_steps() -> &'static [&'static str];

    /// Display value of a field for tables and the detail panel
    fn cell(&self, field: &str) -> String;

    fn to_dto(&self) -> Self::Dto;

    fn dto_id(dto: &Self::Dto) -> Option<&str>;

    fn dto_to_form(dto: &Self::Dto) -> FormValues;

    /// Parses raw form values into a typed DTO
    fn dto_from_form(id: Option<String>, values: &FormValues) -> Result<Self::Dto, String>;

    /// Builds a new aggregate for insertion. A valid id in the DTO is kept.
    fn create_from_dto(dto: Self::Dto) -> Result<Self, String>;

    /// Copies DTO fields onto the aggregate (id and lifecycle untouched)
    fn apply_dto(&mut self, dto: &Self::Dto);

    fn validate(&self) -> Result<(), String>;

    fn id_string(&self) -> String {
        self.id().as_string()
    }

    fn form_values(&self) -> FormValues {
        Self::dto_to_form(&self.to_dto())
    }

    fn list_fields() -> Vec<&'static FieldMetadata> {
        Self::fields()
            .iter()
            .filter(|f| f.visible_in_list())
            .collect()
    }

    fn set_active(&mut self, active: bool) {
        self.base_mut().set_active(active);
    }

    /// Validation hook before the aggregate is written
    fn before_write(&mut self) {
        self.base_mut().touch();
    }
}

/// Display values of the fields every aggregate shares
pub fn base_cell<Id>(base: &BaseAggregate<Id>, field: &str) -> Option<String> {
    let value = match field {
        "code" => base.code.clone(),
        "description" => base.description.clone(),
        "comment" => base.comment.clone().unwrap_or_default(),
        "isActive" => if base.is_active { "Active" } else { "Inactive" }.to_string(),
        "createdAt" => base.metadata.created_at.format("%Y-%m-%d %H:%M").to_string(),
        "updatedAt" => base.metadata.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        _ => return None,
    };
    Some(value)
}

/// Resolves the id of a DTO for creation: keeps a parseable id, otherwise
/// generates a fresh one
pub fn id_for_insert<Id: AggregateId>(dto_id: Option<&str>, fresh: impl FnOnce() -> Id) -> Id {
    dto_id
        .and_then(|s| Id::from_string(s).ok())
        .unwrap_or_else(fresh)
}
