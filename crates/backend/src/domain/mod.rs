pub mod a001_category;
pub mod a002_product;
pub mod a003_coupon;
pub mod a004_staff;
pub mod service;

use contracts::domain::common::HubEntity;

use crate::shared::data::MemoryRepository;

/// A hub entity with a process-wide store
pub trait Stored: HubEntity {
    fn repository() -> &'static MemoryRepository<Self>;
}

/// Seeds every collection with its sample records
pub async fn seed_all() -> anyhow::Result<()> {
    use contracts::domain::a001_category::aggregate::Category;
    use contracts::domain::a002_product::aggregate::Product;
    use contracts::domain::a003_coupon::aggregate::Coupon;
    use contracts::domain::a004_staff::aggregate::Staff;

    service::insert_test_data(Category::repository()).await?;
    service::insert_test_data(Product::repository()).await?;
    service::insert_test_data(Coupon::repository()).await?;
    service::insert_test_data(Staff::repository()).await?;
    Ok(())
}
