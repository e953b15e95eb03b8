//! Entity hubs, each an instance of the generic hub dashboard

pub mod a001_category;
pub mod a002_product;
pub mod a003_coupon;
pub mod a004_staff;

use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_coupon::aggregate::Coupon;
use contracts::domain::a004_staff::aggregate::Staff;
use contracts::domain::common::AggregateRoot;

/// Navigation entry of a hub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HubLink {
    pub collection: &'static str,
    pub label: &'static str,
}

impl HubLink {
    fn of<E: AggregateRoot>() -> Self {
        Self {
            collection: E::collection_name(),
            label: E::list_name(),
        }
    }

    pub fn path(&self, mount_base: &str) -> String {
        let base = mount_base.trim_end_matches('/');
        format!("{}/{}", base, self.collection)
    }
}

/// Landing page of the hubs mounted under `mount_base`
pub fn home_path(mount_base: &str) -> String {
    let base = mount_base.trim_matches('/');
    if base.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", base)
    }
}

pub fn hub_links() -> [HubLink; 4] {
    [
        HubLink::of::<Category>(),
        HubLink::of::<Product>(),
        HubLink::of::<Coupon>(),
        HubLink::of::<Staff>(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_links() {
        let collections: Vec<_> = hub_links().iter().map(|l| l.collection).collect();
        assert_eq!(collections, ["categories", "products", "coupons", "staff"]);
        assert_eq!(hub_links()[3].path("/admin/"), "/admin/staff");
        assert_eq!(hub_links()[0].path(""), "/categories");
    }

    #[test]
    fn test_home_path() {
        assert_eq!(home_path(""), "/");
        assert_eq!(home_path("/"), "/");
        assert_eq!(home_path("/admin/"), "/admin");
        assert_eq!(home_path("admin"), "/admin");
    }
}
