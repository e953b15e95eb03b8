use contracts::domain::a002_product::aggregate::Product;
use once_cell::sync::Lazy;

use crate::domain::Stored;
use crate::shared::data::MemoryRepository;

static PRODUCTS: Lazy<MemoryRepository<Product>> = Lazy::new(MemoryRepository::new);

impl Stored for Product {
    fn repository() -> &'static MemoryRepository<Self> {
        &PRODUCTS
    }
}
