use contracts::domain::a003_coupon::aggregate::Coupon;
use once_cell::sync::Lazy;

use crate::domain::Stored;
use crate::shared::data::MemoryRepository;

static COUPONS: Lazy<MemoryRepository<Coupon>> = Lazy::new(MemoryRepository::new);

impl Stored for Coupon {
    fn repository() -> &'static MemoryRepository<Self> {
        &COUPONS
    }
}
