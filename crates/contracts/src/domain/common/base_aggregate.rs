use serde::{Deserialize, Serialize};
use super::EntityMetadata;

/// Fields shared by every aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    /// Business code (e.g. "CAT-001", "EMP-0042")
    pub code: String,
    /// Display name
    pub description: String,
    pub comment: Option<String>,
    /// Inactive records stay visible to admins but are hidden from the storefront
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            is_active: true,
            metadata: EntityMetadata::new(),
        }
    }

    /// Update timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment.filter(|c| !c.trim().is_empty());
    }

    pub fn set_active(&mut self, active: bool) {
        if self.is_active != active {
            self.is_active = active;
            self.touch();
        }
    }

    /// Shared validation of code and description
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if self.code.trim().is_empty() {
            return Err("Code must not be empty".into());
        }
        Ok(())
    }
}
