use serde::{Deserialize, Serialize};

/// Role of a staff member in the admin back office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Manager,
    #[default]
    Support,
    Warehouse,
}

impl StaffRole {
    pub fn code(&self) -> &'static str {
        match self {
            StaffRole::Admin => "admin",
            StaffRole::Manager => "manager",
            StaffRole::Support => "support",
            StaffRole::Warehouse => "warehouse",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StaffRole::Admin => "Administrator",
            StaffRole::Manager => "Manager",
            StaffRole::Support => "Support",
            StaffRole::Warehouse => "Warehouse",
        }
    }

    pub fn all() -> Vec<StaffRole> {
        vec![
            StaffRole::Admin,
            StaffRole::Manager,
            StaffRole::Support,
            StaffRole::Warehouse,
        ]
    }

    pub fn from_code(code: &str) -> Option<StaffRole> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}
