pub mod discount_kind;
pub mod staff_role;

pub use discount_kind::DiscountKind;
pub use staff_role::StaffRole;
