use contracts::domain::a001_category::aggregate::Category;
use once_cell::sync::Lazy;

use crate::domain::Stored;
use crate::shared::data::MemoryRepository;

static CATEGORIES: Lazy<MemoryRepository<Category>> = Lazy::new(MemoryRepository::new);

impl Stored for Category {
    fn repository() -> &'static MemoryRepository<Self> {
        &CATEGORIES
    }
}
