use serde::{Deserialize, Serialize};

use crate::domain::common::{
    base_cell, id_for_insert, matches_active, matches_search, sample_uuid, AggregateId,
    AggregateRoot, BaseAggregate, HubEntity, ListFilter,
};
use crate::shared::form::{self, FormValues};
use crate::shared::metadata::{FieldMetadata, FieldType};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Unique identifier of a catalog category
    CategoryId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog category; categories form a tree through `parent_id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,

    /// URL-safe name used by the storefront
    pub slug: String,

    #[serde(rename = "parentId")]
    pub parent_id: Option<CategoryId>,

    #[serde(rename = "sortOrder")]
    pub sort_order: i32,
}

impl Category {
    pub fn new_with_id(id: CategoryId, code: &str, description: &str, slug: &str) -> Self {
        Self {
            base: BaseAggregate::new(id, code.into(), description.into()),
            slug: slug.into(),
            parent_id: None,
            sort_order: 0,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn base(&self) -> &BaseAggregate<CategoryId> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate<CategoryId> {
        &mut self.base
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    pub slug: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<CategoryId>,
    #[serde(rename = "sortOrder")]
    pub sort_order: i32,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            comment: None,
            is_active: true,
            slug: String::new(),
            parent_id: None,
            sort_order: 0,
        }
    }
}

/// List filter of the categories hub
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, rename = "parentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,
}

impl ListFilter<Category> for CategoryFilter {
    fn matches(&self, item: &Category) -> bool {
        matches_search(&item.base, self.search.as_deref())
            && matches_active(&item.base, self.active)
            && self.parent_id.map_or(true, |p| item.parent_id == Some(p))
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
    FieldMetadata::new("code", "Code", FieldType::Text)
        .required()
        .max_length(32)
        .placeholder("CAT-001"),
    FieldMetadata::new("description", "Name", FieldType::Text)
        .required()
        .max_length(120),
    FieldMetadata::new("slug", "Slug", FieldType::Text)
        .required()
        .max_length(80)
        .placeholder("home-and-garden"),
    FieldMetadata::new("parentId", "Parent category", FieldType::AggregateRef)
        .references("a001")
        .step(1)
        .hidden_in_list(),
    FieldMetadata::new("sortOrder", "Sort order", FieldType::Integer)
        .range(Some(0.0), None)
        .step(1),
    FieldMetadata::new("isActive", "Status", FieldType::Bool).step(1),
    FieldMetadata::new("comment", "Comment", FieldType::TextArea)
        .step(1)
        .hidden_in_list(),
];

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl HubEntity for Category {
    type Dto = CategoryDto;
    type Filter = CategoryFilter;

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn samples() -> Vec<Self> {
        sample_data()
    }

    fn wizard_steps() -> &'static [&'static str] {
        &["General", "Placement"]
    }

    fn cell(&self, field: &str) -> String {
        if let Some(v) = base_cell(&self.base, field) {
            return v;
        }
        match field {
            "slug" => self.slug.clone(),
            "parentId" => self.parent_id.map(|p| p.as_string()).unwrap_or_default(),
            "sortOrder" => self.sort_order.to_string(),
            _ => String::new(),
        }
    }

    fn to_dto(&self) -> CategoryDto {
        CategoryDto {
            id: Some(self.base.id.as_string()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            comment: self.base.comment.clone(),
            is_active: self.base.is_active,
            slug: self.slug.clone(),
            parent_id: self.parent_id,
            sort_order: self.sort_order,
        }
    }

    fn dto_id(dto: &CategoryDto) -> Option<&str> {
        dto.id.as_deref()
    }

    fn dto_to_form(dto: &CategoryDto) -> FormValues {
        form::form_values([
            ("code", dto.code.clone().unwrap_or_default()),
            ("description", dto.description.clone()),
            ("slug", dto.slug.clone()),
            (
                "parentId",
                dto.parent_id.map(|p| p.as_string()).unwrap_or_default(),
            ),
            ("sortOrder", dto.sort_order.to_string()),
            ("isActive", dto.is_active.to_string()),
            ("comment", dto.comment.clone().unwrap_or_default()),
        ])
    }

    fn dto_from_form(id: Option<String>, values: &FormValues) -> Result<CategoryDto, String> {
        form::validate_fields(FIELDS, values, None)?;
        let parent_id = form::optional(values, "parentId")
            .map(|p| CategoryId::from_string(&p))
            .transpose()?;
        Ok(CategoryDto {
            id,
            code: form::optional(values, "code"),
            description: form::text(values, "description"),
            comment: form::optional(values, "comment"),
            is_active: form::flag(values, "isActive"),
            slug: form::text(values, "slug"),
            parent_id,
            sort_order: form::integer(values, "sortOrder")? as i32,
        })
    }

    fn create_from_dto(dto: CategoryDto) -> Result<Self, String> {
        let id = id_for_insert(dto.id.as_deref(), CategoryId::new_v4);
        let code = dto
            .code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| format!("CAT-{}", &id.as_string()[..8]));
        let mut aggregate = Category::new_with_id(id, &code, &dto.description, &dto.slug);
        aggregate.apply_dto(&dto);
        aggregate.validate()?;
        Ok(aggregate)
    }

    fn apply_dto(&mut self, dto: &CategoryDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.description.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.base.is_active = dto.is_active;
        self.slug = dto.slug.trim().to_string();
        self.parent_id = dto.parent_id;
        self.sort_order = dto.sort_order;
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if !is_valid_slug(&self.slug) {
            return Err("Slug may contain only lowercase letters, digits and inner hyphens".into());
        }
        if self.parent_id == Some(self.base.id) {
            return Err("A category cannot be its own parent".into());
        }
        if self.sort_order < 0 {
            return Err("Sort order must not be negative".into());
        }
        Ok(())
    }
}

// ============================================================================
// Sample data
// ============================================================================

pub fn sample_id(n: u16) -> CategoryId {
    CategoryId(sample_uuid(0xa001, n))
}

/// Sample categories for the dev backend seed and the offline fallback
pub fn sample_data() -> Vec<Category> {
    let child = |n: u16, code: &str, name: &str, slug: &str, parent: u16, order: i32| {
        let mut c = Category::new_with_id(sample_id(n), code, name, slug);
        c.parent_id = Some(sample_id(parent));
        c.sort_order = order;
        c
    };

    let mut electronics = Category::new_with_id(sample_id(1), "CAT-001", "Electronics", "electronics");
    electronics.base.comment = Some("Top-level storefront section".into());
    let mut home = Category::new_with_id(sample_id(2), "CAT-002", "Home & Garden", "home-and-garden");
    home.sort_order = 1;
    let mut apparel = Category::new_with_id(sample_id(3), "CAT-003", "Apparel", "apparel");
    apparel.sort_order = 2;
    let mut seasonal = Category::new_with_id(sample_id(6), "CAT-006", "Seasonal", "seasonal");
    seasonal.sort_order = 3;
    seasonal.base.is_active = false;

    vec![
        electronics,
        home,
        apparel,
        child(4, "CAT-004", "Smartphones", "smartphones", 1, 0),
        child(5, "CAT-005", "Laptops", "laptops", 1, 1),
        seasonal,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_dto_generates_code_and_validates() {
        let dto = CategoryDto {
            description: "Toys".into(),
            slug: "toys".into(),
            ..Default::default()
        };
        let c = Category::create_from_dto(dto).unwrap();
        assert!(c.base.code.starts_with("CAT-"));
        assert!(c.is_active());
        assert!(c.is_root());
    }

    #[test]
    fn test_invalid_slug_is_rejected() {
        let dto = CategoryDto {
            description: "Toys".into(),
            slug: "Toys & Games".into(),
            ..Default::default()
        };
        assert!(Category::create_from_dto(dto).is_err());
    }

    #[test]
    fn test_self_parent_is_rejected() {
        let mut c = sample_data().remove(0);
        c.parent_id = Some(c.base.id);
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_form_round_trip_keeps_values() {
        let original = sample_data().remove(3);
        let values = original.form_values();
        let dto = Category::dto_from_form(Some(original.id_string()), &values).unwrap();
        assert_eq!(dto, original.to_dto());
    }

    #[test]
    fn test_filter_by_parent_and_search() {
        let items = sample_data();
        let filter = CategoryFilter {
            parent_id: Some(sample_id(1)),
            ..Default::default()
        };
        let names: Vec<_> = items
            .iter()
            .filter(|c| filter.matches(c))
            .map(|c| c.description())
            .collect();
        assert_eq!(names, vec!["Smartphones", "Laptops"]);

        let filter = CategoryFilter {
            search: Some("GARDEN".into()),
            ..Default::default()
        };
        assert_eq!(items.iter().filter(|c| filter.matches(c)).count(), 1);
    }

    #[test]
    fn test_json_uses_flat_camel_case_fields() {
        let c = sample_data().remove(3);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["description"], "Smartphones");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["parentId"], sample_id(1).as_string());
        let back: Category = serde_json::from_value(json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_sample_data_is_valid() {
        for c in sample_data() {
            c.validate().unwrap();
        }
    }
}
