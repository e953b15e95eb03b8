use serde::{Deserialize, Serialize};

/// How a coupon discount is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Percentage of the order total
    #[default]
    Percent,
    /// Fixed amount off the order total
    Fixed,
}

impl DiscountKind {
    pub fn code(&self) -> &'static str {
        match self {
            DiscountKind::Percent => "percent",
            DiscountKind::Fixed => "fixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DiscountKind::Percent => "Percent",
            DiscountKind::Fixed => "Fixed amount",
        }
    }

    pub fn all() -> Vec<DiscountKind> {
        vec![DiscountKind::Percent, DiscountKind::Fixed]
    }

    pub fn from_code(code: &str) -> Option<DiscountKind> {
        Self::all().into_iter().find(|k| k.code() == code)
    }
}
