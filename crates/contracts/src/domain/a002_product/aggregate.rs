use serde::{Deserialize, Serialize};

use crate::domain::a001_category::aggregate::{self as category, CategoryId};
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
    /// Unique identifier of a product
    ProductId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Sellable catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    #[serde(rename = "categoryId")]
    pub category_id: Option<CategoryId>,

    pub price: f64,

    /// Units on hand
    pub stock: i64,

    /// Unit of measure ("pcs", "kg", ...)
    pub unit: String,
}

impl Product {
    pub fn new_with_id(id: ProductId, sku: &str, description: &str, price: f64) -> Self {
        Self {
            base: BaseAggregate::new(id, sku.into(), description.into()),
            category_id: None,
            price,
            stock: 0,
            unit: "pcs".into(),
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn base(&self) -> &BaseAggregate<ProductId> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate<ProductId> {
        &mut self.base
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<String>,
    /// SKU
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "categoryId")]
    pub category_id: Option<CategoryId>,
    pub price: f64,
    pub stock: i64,
    pub unit: String,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            comment: None,
            is_active: true,
            category_id: None,
            price: 0.0,
            stock: 0,
            unit: "pcs".into(),
        }
    }
}

/// List filter of the products hub
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, rename = "categoryId", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(default, rename = "minPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, rename = "inStock", skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl ListFilter<Product> for ProductFilter {
    fn matches(&self, item: &Product) -> bool {
        matches_search(&item.base, self.search.as_deref())
            && matches_active(&item.base, self.active)
            && self.category_id.map_or(true, |c| item.category_id == Some(c))
            && self.min_price.map_or(true, |min| item.price >= min)
            && self.max_price.map_or(true, |max| item.price <= max)
            && self.in_stock.map_or(true, |s| item.in_stock() == s)
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

    fn validate(&self) -> Result<(), String> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) if min > max => {
                Err("Minimum price must not exceed maximum price".into())
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// Hub wiring
// ============================================================================

static FIELDS: &[FieldMetadata] = &[
    FieldMetadata::new("code", "SKU", FieldType::Text)
        .required()
        .max_length(40)
        .placeholder("SKU-10001"),
    FieldMetadata::new("description", "Name", FieldType::Text)
        .required()
        .max_length(200),
    FieldMetadata::new("categoryId", "Category", FieldType::AggregateRef)
        .references("a001")
        .hidden_in_list(),
    FieldMetadata::new("price", "Price", FieldType::Number)
        .required()
        .range(Some(0.0), None)
        .step(1),
    FieldMetadata::new("stock", "Stock", FieldType::Integer)
        .range(Some(0.0), None)
        .step(1),
    FieldMetadata::new("unit", "Unit", FieldType::Text)
        .max_length(16)
        .placeholder("pcs")
        .step(1)
        .hidden_in_list(),
    FieldMetadata::new("isActive", "Status", FieldType::Bool).step(2),
    FieldMetadata::new("comment", "Comment", FieldType::TextArea)
        .step(2)
        .hidden_in_list(),
];

impl HubEntity for Product {
    type Dto = ProductDto;
    type Filter = ProductFilter;

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn samples() -> Vec<Self> {
        sample_data()
    }

    fn wizard_steps() -> &'static [&'static str] {
        &["Basics", "Pricing & stock", "Publishing"]
    }

    fn cell(&self, field: &str) -> String {
        if let Some(v) = base_cell(&self.base, field) {
            return v;
        }
        match field {
            "categoryId" => self.category_id.map(|c| c.as_string()).unwrap_or_default(),
            "price" => format!("{:.2}", self.price),
            "stock" => self.stock.to_string(),
            "unit" => self.unit.clone(),
            _ => String::new(),
        }
    }

    fn to_dto(&self) -> ProductDto {
        ProductDto {
            id: Some(self.base.id.as_string()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            comment: self.base.comment.clone(),
            is_active: self.base.is_active,
            category_id: self.category_id,
            price: self.price,
            stock: self.stock,
            unit: self.unit.clone(),
        }
    }

    fn dto_id(dto: &ProductDto) -> Option<&str> {
        dto.id.as_deref()
    }

    fn dto_to_form(dto: &ProductDto) -> FormValues {
        form::form_values([
            ("code", dto.code.clone().unwrap_or_default()),
            ("description", dto.description.clone()),
            (
                "categoryId",
                dto.category_id.map(|c| c.as_string()).unwrap_or_default(),
            ),
            ("price", dto.price.to_string()),
            ("stock", dto.stock.to_string()),
            ("unit", dto.unit.clone()),
            ("isActive", dto.is_active.to_string()),
            ("comment", dto.comment.clone().unwrap_or_default()),
        ])
    }

    fn dto_from_form(id: Option<String>, values: &FormValues) -> Result<ProductDto, String> {
        form::validate_fields(FIELDS, values, None)?;
        let category_id = form::optional(values, "categoryId")
            .map(|c| CategoryId::from_string(&c))
            .transpose()?;
        Ok(ProductDto {
            id,
            code: form::optional(values, "code"),
            description: form::text(values, "description"),
            comment: form::optional(values, "comment"),
            is_active: form::flag(values, "isActive"),
            category_id,
            price: form::number(values, "price")?,
            stock: form::integer(values, "stock")?,
            unit: form::optional(values, "unit").unwrap_or_else(|| "pcs".into()),
        })
    }

    fn create_from_dto(dto: ProductDto) -> Result<Self, String> {
        let id = id_for_insert(dto.id.as_deref(), ProductId::new_v4);
        let sku = dto
            .code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| format!("SKU-{}", &id.as_string()[..8]));
        let mut aggregate = Product::new_with_id(id, &sku, &dto.description, dto.price);
        aggregate.apply_dto(&dto);
        aggregate.validate()?;
        Ok(aggregate)
    }

    fn apply_dto(&mut self, dto: &ProductDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_string();
        }
        self.base.description = dto.description.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.base.is_active = dto.is_active;
        self.category_id = dto.category_id;
        self.price = dto.price;
        self.stock = dto.stock;
        self.unit = dto.unit.trim().to_string();
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative amount".into());
        }
        if self.stock < 0 {
            return Err("Stock must not be negative".into());
        }
        if self.unit.is_empty() {
            return Err("Unit must not be empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// Sample data
// ============================================================================

pub fn sample_id(n: u16) -> ProductId {
    ProductId(sample_uuid(0xa002, n))
}

/// Sample products for the dev backend seed and the offline fallback
pub fn sample_data() -> Vec<Product> {
    let product = |n: u16, sku: &str, name: &str, price: f64, stock: i64, cat: u16| {
        let mut p = Product::new_with_id(sample_id(n), sku, name, price);
        p.stock = stock;
        p.category_id = Some(category::sample_id(cat));
        p
    };

    let mut discontinued = product(6, "SKU-10006", "Wired Earbuds", 9.99, 0, 4);
    discontinued.base.is_active = false;
    let mut soil = product(5, "SKU-10005", "Potting Soil 20L", 7.5, 120, 2);
    soil.unit = "bag".into();

    vec![
        product(1, "SKU-10001", "Pixel Phone 128GB", 699.0, 25, 4),
        product(2, "SKU-10002", "Ultrabook 14\"", 1249.0, 8, 5),
        product(3, "SKU-10003", "Cotton T-Shirt", 19.9, 300, 3),
        product(4, "SKU-10004", "Garden Hose 15m", 34.5, 0, 2),
        soil,
        discontinued,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_price_is_rejected() {
        let dto = ProductDto {
            description: "Broken".into(),
            price: -1.0,
            ..Default::default()
        };
        assert!(Product::create_from_dto(dto).is_err());
    }

    #[test]
    fn test_filter_by_price_range_and_stock() {
        let items = sample_data();
        let filter = ProductFilter {
            min_price: Some(10.0),
            max_price: Some(700.0),
            in_stock: Some(true),
            ..Default::default()
        };
        let skus: Vec<_> = items
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.code())
            .collect();
        assert_eq!(skus, vec!["SKU-10001", "SKU-10003"]);
    }

    #[test]
    fn test_contradictory_price_range_is_invalid() {
        let filter = ProductFilter {
            min_price: Some(50.0),
            max_price: Some(10.0),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn test_form_rejects_text_in_price() {
        let mut values = sample_data().remove(0).form_values();
        values.insert("price".into(), "cheap".into());
        assert_eq!(
            Product::dto_from_form(None, &values).unwrap_err(),
            "Price must be a number"
        );
    }

    #[test]
    fn test_form_round_trip_keeps_values() {
        let original = sample_data().remove(4);
        let dto = Product::dto_from_form(Some(original.id_string()), &original.form_values()).unwrap();
        assert_eq!(dto, original.to_dto());
    }
}
