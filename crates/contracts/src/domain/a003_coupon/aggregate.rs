use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    base_cell, id_for_insert, matches_active, matches_search, sample_uuid, AggregateId,
    AggregateRoot, BaseAggregate, HubEntity, ListFilter,
};
use crate::enums::DiscountKind;
use crate::shared::form::{self, FormValues};
use crate::shared::metadata::{FieldMetadata, FieldType};

// ============================================================================
// ID Type
// ============================================================================

crate::uuid_aggregate_id!(
    /// Unique identifier of a coupon
    CouponId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Discount coupon. `base.code` is the code customers type at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(flatten)]
    pub base: BaseAggregate<CouponId>,

    #[serde(rename = "discountKind")]
    pub discount_kind: DiscountKind,

    #[serde(rename = "discountValue")]
    pub discount_value: f64,

    #[serde(rename = "validFrom")]
    pub valid_from: Option<NaiveDate>,

    #[serde(rename = "validUntil")]
    pub valid_until: Option<NaiveDate>,

    /// `None` means unlimited
    #[serde(rename = "usageLimit")]
    pub usage_limit: Option<u32>,

    #[serde(rename = "timesUsed")]
    pub times_used: u32,
}

impl Coupon {
    pub fn new_with_id(
        id: CouponId,
        code: &str,
        description: &str,
        discount_kind: DiscountKind,
        discount_value: f64,
    ) -> Self {
        Self {
            base: BaseAggregate::new(id, code.to_uppercase(), description.into()),
            discount_kind,
            discount_value,
            valid_from: None,
            valid_until: None,
            usage_limit: None,
            times_used: 0,
        }
    }

    /// Whether the coupon can be redeemed on `date`
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.base.is_active
            && self.valid_from.map_or(true, |from| date >= from)
            && self.valid_until.map_or(true, |until| date <= until)
            && self.usage_limit.map_or(true, |limit| self.times_used < limit)
    }
}

impl AggregateRoot for Coupon {
    type Id = CouponId;

    fn base(&self) -> &BaseAggregate<CouponId> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseAggregate<CouponId> {
        &mut self.base
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "coupons"
    }

    fn element_name() -> &'static str {
        "Coupon"
    }

    fn list_name() -> &'static str {
        "Coupons"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a coupon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub description: String,
    pub comment: Option<String>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "discountKind")]
    pub discount_kind: DiscountKind,
    #[serde(rename = "discountValue")]
    pub discount_value: f64,
    #[serde(rename = "validFrom")]
    pub valid_from: Option<NaiveDate>,
    #[serde(rename = "validUntil")]
    pub valid_until: Option<NaiveDate>,
    #[serde(rename = "usageLimit")]
    pub usage_limit: Option<u32>,
}

impl Default for CouponDto {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            description: String::new(),
            comment: None,
            is_active: true,
            discount_kind: DiscountKind::Percent,
            discount_value: 0.0,
            valid_from: None,
            valid_until: None,
            usage_limit: None,
        }
    }
}

/// List filter of the coupons hub
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CouponFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, rename = "discountKind", skip_serializing_if = "Option::is_none")]
    pub discount_kind: Option<DiscountKind>,
    /// Only coupons redeemable on this date
    #[serde(default, rename = "validOn", skip_serializing_if = "Option::is_none")]
    pub valid_on: Option<NaiveDate>,
}

impl ListFilter<Coupon> for CouponFilter {
    fn matches(&self, item: &Coupon) -> bool {
        matches_search(&item.base, self.search.as_deref())
            && matches_active(&item.base, self.active)
            && self.discount_kind.map_or(true, |k| item.discount_kind == k)
            && self.valid_on.map_or(true, |d| item.is_valid_on(d))
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
    FieldMetadata::new("code", "Coupon code", FieldType::Text)
        .required()
        .max_length(24)
        .placeholder("SPRING25"),
    FieldMetadata::new("description", "Name", FieldType::Text)
        .required()
        .max_length(120),
    FieldMetadata::new("discountKind", "Discount type", FieldType::Enum)
        .required()
        .values(&["percent", "fixed"])
        .step(1),
    FieldMetadata::new("discountValue", "Discount", FieldType::Number)
        .required()
        .range(Some(0.0), None)
        .step(1),
    FieldMetadata::new("validFrom", "Valid from", FieldType::Date).step(2),
    FieldMetadata::new("validUntil", "Valid until", FieldType::Date).step(2),
    FieldMetadata::new("usageLimit", "Usage limit", FieldType::Integer)
        .range(Some(1.0), None)
        .step(2)
        .hidden_in_list(),
    FieldMetadata::new("timesUsed", "Times used", FieldType::Integer).hidden_in_form(),
    FieldMetadata::new("isActive", "Status", FieldType::Bool).step(2),
    FieldMetadata::new("comment", "Comment", FieldType::TextArea)
        .step(2)
        .hidden_in_list(),
];

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

impl HubEntity for Coupon {
    type Dto = CouponDto;
    type Filter = CouponFilter;

    fn fields() -> &'static [FieldMetadata] {
        FIELDS
    }

    fn samples() -> Vec<Self> {
        sample_data()
    }

    fn wizard_steps() -> &'static [&'static str] {
        &["Coupon", "Discount", "Validity"]
    }

    fn cell(&self, field: &str) -> String {
        if let Some(v) = base_cell(&self.base, field) {
            return v;
        }
        match field {
            "discountKind" => self.discount_kind.display_name().to_string(),
            "discountValue" => match self.discount_kind {
                DiscountKind::Percent => format!("{}%", self.discount_value),
                DiscountKind::Fixed => format!("{:.2}", self.discount_value),
            },
            "validFrom" => format_date(self.valid_from),
            "validUntil" => format_date(self.valid_until),
            "usageLimit" => self
                .usage_limit
                .map(|l| l.to_string())
                .unwrap_or_else(|| "Unlimited".into()),
            "timesUsed" => self.times_used.to_string(),
            _ => String::new(),
        }
    }

    fn to_dto(&self) -> CouponDto {
        CouponDto {
            id: Some(self.base.id.as_string()),
            code: Some(self.base.code.clone()),
            description: self.base.description.clone(),
            comment: self.base.comment.clone(),
            is_active: self.base.is_active,
            discount_kind: self.discount_kind,
            discount_value: self.discount_value,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            usage_limit: self.usage_limit,
        }
    }

    fn dto_id(dto: &CouponDto) -> Option<&str> {
        dto.id.as_deref()
    }

    fn dto_to_form(dto: &CouponDto) -> FormValues {
        form::form_values([
            ("code", dto.code.clone().unwrap_or_default()),
            ("description", dto.description.clone()),
            ("discountKind", dto.discount_kind.code().to_string()),
            ("discountValue", dto.discount_value.to_string()),
            ("validFrom", format_date(dto.valid_from)),
            ("validUntil", format_date(dto.valid_until)),
            (
                "usageLimit",
                dto.usage_limit.map(|l| l.to_string()).unwrap_or_default(),
            ),
            ("isActive", dto.is_active.to_string()),
            ("comment", dto.comment.clone().unwrap_or_default()),
        ])
    }

    fn dto_from_form(id: Option<String>, values: &FormValues) -> Result<CouponDto, String> {
        form::validate_fields(FIELDS, values, None)?;
        let discount_kind = DiscountKind::from_code(form::value(values, "discountKind"))
            .ok_or_else(|| "Unknown discount type".to_string())?;
        let usage_limit = form::optional_integer(values, "usageLimit")?
            .map(|l| u32::try_from(l).map_err(|_| "Usage limit is out of range".to_string()))
            .transpose()?;
        Ok(CouponDto {
            id,
            code: form::optional(values, "code").map(|c| c.to_uppercase()),
            description: form::text(values, "description"),
            comment: form::optional(values, "comment"),
            is_active: form::flag(values, "isActive"),
            discount_kind,
            discount_value: form::number(values, "discountValue")?,
            valid_from: form::optional_date(values, "validFrom")?,
            valid_until: form::optional_date(values, "validUntil")?,
            usage_limit,
        })
    }

    fn create_from_dto(dto: CouponDto) -> Result<Self, String> {
        let id = id_for_insert(dto.id.as_deref(), CouponId::new_v4);
        let code = dto
            .code
            .clone()
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| "Coupon code is required".to_string())?;
        let mut aggregate = Coupon::new_with_id(
            id,
            &code,
            &dto.description,
            dto.discount_kind,
            dto.discount_value,
        );
        aggregate.apply_dto(&dto);
        aggregate.validate()?;
        Ok(aggregate)
    }

    fn apply_dto(&mut self, dto: &CouponDto) {
        if let Some(code) = dto.code.as_ref().filter(|c| !c.trim().is_empty()) {
            self.base.code = code.trim().to_uppercase();
        }
        self.base.description = dto.description.trim().to_string();
        self.base.set_comment(dto.comment.clone());
        self.base.is_active = dto.is_active;
        self.discount_kind = dto.discount_kind;
        self.discount_value = dto.discount_value;
        self.valid_from = dto.valid_from;
        self.valid_until = dto.valid_until;
        self.usage_limit = dto.usage_limit;
    }

    fn validate(&self) -> Result<(), String> {
        self.base.validate()?;
        if self.base.code.chars().any(char::is_whitespace) {
            return Err("Coupon code must not contain spaces".into());
        }
        match self.discount_kind {
            DiscountKind::Percent if !(self.discount_value > 0.0 && self.discount_value <= 100.0) => {
                return Err("Percent discount must be between 0 and 100".into());
            }
            DiscountKind::Fixed if !(self.discount_value > 0.0 && self.discount_value.is_finite()) => {
                return Err("Fixed discount must be a positive amount".into());
            }
            _ => {}
        }
        if let (Some(from), Some(until)) = (self.valid_from, self.valid_until) {
            if until < from {
                return Err("Valid until must not be earlier than valid from".into());
            }
        }
        if self.usage_limit == Some(0) {
            return Err("Usage limit must be at least 1".into());
        }
        Ok(())
    }
}

// ============================================================================
// Sample data
// ============================================================================

pub fn sample_id(n: u16) -> CouponId {
    CouponId(sample_uuid(0xa003, n))
}

/// Sample coupons for the dev backend seed and the offline fallback
pub fn sample_data() -> Vec<Coupon> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);

    let mut spring = Coupon::new_with_id(sample_id(1), "SPRING25", "Spring sale", DiscountKind::Percent, 25.0);
    spring.valid_from = date(2025, 3, 1);
    spring.valid_until = date(2025, 5, 31);

    let mut welcome = Coupon::new_with_id(sample_id(2), "WELCOME10", "Welcome discount", DiscountKind::Fixed, 10.0);
    welcome.usage_limit = Some(1000);
    welcome.times_used = 412;

    let mut vip = Coupon::new_with_id(sample_id(3), "VIP50", "VIP customers", DiscountKind::Percent, 50.0);
    vip.usage_limit = Some(50);
    vip.times_used = 50;

    let mut legacy = Coupon::new_with_id(sample_id(4), "BF2023", "Black Friday 2023", DiscountKind::Percent, 30.0);
    legacy.valid_from = date(2023, 11, 24);
    legacy.valid_until = date(2023, 11, 27);
    legacy.base.is_active = false;

    vec![spring, welcome, vip, legacy]
}
