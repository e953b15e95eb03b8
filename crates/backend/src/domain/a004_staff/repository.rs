use contracts::domain::a004_staff::aggregate::Staff;
use once_cell::sync::Lazy;

use crate::domain::Stored;
use crate::shared::data::MemoryRepository;

static STAFF: Lazy<MemoryRepository<Staff>> = Lazy::new(MemoryRepository::new);

impl Stored for Staff {
    fn repository() -> &'static MemoryRepository<Self> {
        &STAFF
    }
}
