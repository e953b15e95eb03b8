use serde::{Deserialize, Serialize};

use crate::domain::common::{
    base_cell, id_for_insert, matches_active, sample_uuid, AggregateId, AggregateRoot,
    BaseAggregate, HubEntity, ListFilter,
};
use crate::enums::StaffRole;
use crate::shared::form::{self, FormValues};
use crate::shared::metadata::{FieldMetadata, FieldType};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Unique identifier of a staff member
    StaffId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Back-office employee. `base.code` is the employee number, `base.description`
/// the full name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    #[serde(flatten)]
    pub base: BaseAggregate<StaffId>,

    pub email: String,

    pub phone: Option<String>,

    pub role: StaffRole,
}

impl Staff {
    pub fn new_with_id(id: StaffId, code: &str, full_name: &str, email: &str, role: StaffRole) -> Self {
        Self {
            base: BaseAggregate::new(id, code.into(), full_name.into()),
            email: email.to_lowercase(),
            phone: None,
            role,
        }
    }
}

impl AggregateRoot for Staff {
    type Id = StaffId;

    fn base(&self) -> &BaseAggregate<StaffId> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate<StaffId> {
        &mut self.base
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "staff"
    }

    fn element_name() -> &'static str {
        "Staff member"
    }

    fn list_name() -> &'static str {
        "Staff"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a staff member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffDto {
    pub id: Option<String>,
    pub code: Option<String>,
    /// Full name
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub email: String,
    pub phone: Option<String>,
    pub role: StaffRole,
}

impl Default for StaffDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            comment: None,
            is_active: true,
            email: String::new(),
            phone: None,
            role: StaffRole::default(),
        }
    }
}

/// List filter of the staff hub
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffFilter {
    /// Matches employee number, name and e-mail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<StaffRole>,
}

impl ListFilter<Staff> for StaffFilter {
    fn matches(&self, item: &Staff) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                item.base.code.to_lowercase().contains(&needle)
                    || item.base.description.to_lowercase().contains(&needle)
                    || item.email.contains(&needle)
            }
        };
        search_ok
            && matches_active(&item.base, self.active)
            && self.role.map_or(true, |r| item.role == r)
    }

    fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    fn set_search(&mut self, search: Option<String>) {
        self.search = search;
    }

    fn active(&self) -> Option<bool> {
        self.active
    }

    fn set_active(&mut self, active: Option<bool>) {
        self.active = active;
    }
}

// ============================================================================
// Hub wiring
// ============================================================================

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("code", "Employee no.", FieldType::Text)
        .required()
        .max_length(16)
        .placeholder("EMP-0001"),
    FieldMetadata::new("description", "Full name", FieldType::Text)
        .required()
        .max_length(120),
    FieldMetadata::new("email", "E-mail", FieldType::Email).required(),
    FieldMetadata::new("phone", "Phone", FieldType::Text)
        .max_length(32)
        .hidden_in_list(),
    FieldMetadata::new("role", "Role", FieldType::Enum)
        .required()
        .values(&["admin", "manager", "support", "warehouse"])
        .step(1),
    FieldMetadata::new("isActive", "Status", FieldType::Bool).step(1),
    FieldMetadata::new("comment", "Comment", FieldType::TextArea)
        .step(1)
        .hidden_in_list(),
];

impl HubEntity for Staff {
    type Dto = StaffDto;
    type Filter = StaffFilter;

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn samples() -> Vec<Self> {
        sample_data()
    }

    fn wizard_steps() -> &'static [&'static str] {
        &["Person", "Access"]
    }

    fn cell(&self, field: &str) -> String {
        if let Some(v) = base_cell(&self.base, field) {
            return v;
        }
        match field {
            "email" => self.email.clone(),
            "phone" => self.phone.clone().unwrap_or_default(),
            "role" => self.role.display_name().to_string(),
            _ => String::new(),
        }
    }

    fn to_dto(&self) -> StaffDto {
        StaffDto {
            id: Some(self.base.id.as_string()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            comment: self.base.comment.clone(),
            is_active: self.base.is_active,
            email: self.email.clone(),
            phone: self.phone.clone(),
            role: self.role,
        }
    }

    fn dto_id(dto: &StaffDto) -> Option<&str> {
        dto.id.as_deref()
    }

    fn dto_to_form(dto: &StaffDto) -> FormValues {
        form::form_values([
            ("code", dto.code.clone().unwrap_or_default()),
            ("description", dto.description.clone()),
            ("email", dto.email.clone()),
            ("phone", dto.phone.clone().unwrap_or_default()),
            ("role", dto.role.code().to_string()),
            ("isActive", dto.is_active.to_string()),
            ("comment", dto.comment.clone().unwrap_or_default()),
        ])
    }

    fn dto_from_form(id: Option<String>, values: &FormValues) -> Result<StaffDto, String> {
        form::validate_fields(FIELDS, values, None)?;
        let role = StaffRole::from_code(form::value(values, "role"))
            .ok_or_else(|| "Unknown role".to_string())?;
        Ok(StaffDto {
            id,
            code: form::optional(values, "code"),
            description: form::text(values, "description"),
            comment: form::optional(values, "comment"),
            is_active: form::flag(values, "isActive"),
            email: form::text(values, "email").to_lowercase(),
            phone: form::optional(values, "phone"),
            role,
        })
    }

    fn create_from_dto(dto: StaffDto) -> Result<Self, String> {
        let id = id_for_insert(dto.id.as_deref(), StaffId::new_v4);
        let code = dto
            .code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| format!("EMP-{}", &id.as_string()[..8]));
        let mut aggregate = Staff::new_with_id(id, &code, &dto.description, &dto.email, dto.role);
        aggregate.apply_dto(&dto);
        aggregate.validate()?;
        Ok(aggregate)
    }

    fn apply_dto(&mut self, dto: &StaffDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.description.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.base.is_active = dto.is_active;
        self.email = dto.email.trim().to_lowercase();
        self.phone = dto.phone.clone().filter(|p| !p.trim().is_empty());
        self.role = dto.role;
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        let valid_email = self
            .email
            .split_once('@')
            .map_or(false, |(user, domain)| !user.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err("E-mail address is invalid".into());
        }
        Ok(())
    }
}

// ============================================================================
// Sample data
// ============================================================================

pub fn sample_id(n: u16) -> StaffId {
    StaffId(sample_uuid(0xa004, n))
}

/// Sample staff for the dev backend seed and the offline fallback
pub fn sample_data() -> Vec<Staff> {
    let mut alice = Staff::new_with_id(sample_id(1), "EMP-0001", "Alice Moreau", "alice@shop.example", StaffRole::Admin);
    alice.phone = Some("+33 1 23 45 67 89".into());
    let bob = Staff::new_with_id(sample_id(2), "EMP-0002", "Bob Tanaka", "bob@shop.example", StaffRole::Manager);
    let chen = Staff::new_with_id(sample_id(3), "EMP-0003", "Chen Wei", "chen@shop.example", StaffRole::Support);
    let mut dana = Staff::new_with_id(sample_id(4), "EMP-0004", "Dana Kowalski", "dana@shop.example", StaffRole::Warehouse);
    dana.base.is_active = false;
    dana.base.comment = Some("On parental leave".into());

    vec![alice, bob, chen, dana]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_is_rejected() {
        let dto = StaffDto {
            description: "Eve".into(),
            email: "eve-at-shop".into(),
            ..Default::default()
        };
        assert!(Staff::create_from_dto(dto).is_err());
    }

    #[test]
    fn test_search_covers_email() {
        let items = sample_data();
        let filter = StaffFilter {
            search: Some("CHEN@".into()),
            ..Default::default()
        };
        let found: Vec<_> = items.iter().filter(|s| filter.matches(s)).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].description(), "Chen Wei");
    }

    #[test]
    fn test_filter_by_role_and_active() {
        let items = sample_data();
        let filter = StaffFilter {
            role: Some(StaffRole::Warehouse),
            active: Some(true),
            ..Default::default()
        };
        assert_eq!(items.iter().filter(|s| filter.matches(s)).count(), 0);
    }

    #[test]
    fn test_form_round_trip_keeps_values() {
        let original = sample_data().remove(0);
        let dto = Staff::dto_from_form(Some(original.id_string()), &original.form_values()).unwrap();
        assert_eq!(dto, original.to_dto());
    }
}
