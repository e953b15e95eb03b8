//! Operations on an in-memory entity collection, shared by the dev backend
//! store and the frontend mock fallback

use super::{AggregateRoot, BulkAction, HubEntity, ListFilter};

/// Live records matching `filter`, sorted by description
pub fn query<'a, E: HubEntity>(
    items: impl IntoIterator<Item = &'a E>,
    filter: &E::Filter,
) -> Vec<E> {
    let mut result: Vec<E> = items
        .into_iter()
        .filter(|e| !e.metadata().is_deleted && filter.matches(e))
        .cloned()
        .collect();
    result.sort_by(|a, b| {
        a.description()
            .to_lowercase()
            .cmp(&b.description().to_lowercase())
    });
    result
}

/// Copy of `current` with the DTO applied, validated and versioned
pub fn updated<E: HubEntity>(current: &E, dto: &E::Dto) -> Result<E, String> {
    let mut next = current.clone();
    next.apply_dto(dto);
    next.validate()?;
    next.before_write();
    next.metadata_mut().increment_version();
    Ok(next)
}

/// Applies a bulk action to one record; returns whether it changed
pub fn apply_bulk<E: HubEntity>(item: &mut E, action: BulkAction) -> bool {
    if item.metadata().is_deleted {
        return false;
    }
    match action {
        BulkAction::Activate | BulkAction::Deactivate => {
            let active = action == BulkAction::Activate;
            if item.is_active() == active {
                return false;
            }
            item.set_active(active);
        }
        BulkAction::Delete => item.metadata_mut().mark_deleted(),
    }
    item.metadata_mut().increment_version();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_staff::aggregate::{sample_data, Staff, StaffFilter};

    #[test]
    fn test_query_sorts_and_skips_deleted() {
        let mut items: Vec<Staff> = sample_data();
        items[0].base.metadata.mark_deleted();
        let names: Vec<String> = query(&items, &StaffFilter::default())
            .iter()
            .map(|s| s.base.description.clone())
            .collect();
        let mut sorted = names.clone();
        sorted.sort_by_key(|n| n.to_lowercase());
        assert_eq!(names, sorted);
        assert_eq!(names.len(), items.len() - 1);
    }

    #[test]
    fn test_updated_increments_version_and_validates() {
        let current = sample_data().remove(0);
        let mut dto = current.to_dto();
        dto.phone = Some("+1 555 0100".into());
        let next = updated(&current, &dto).unwrap();
        assert_eq!(next.metadata().version, current.metadata().version + 1);
        assert_eq!(next.phone.as_deref(), Some("+1 555 0100"));

        dto.email = "not-an-email".into();
        assert!(updated(&current, &dto).is_err());
    }

    #[test]
    fn test_bulk_reports_only_changes() {
        let mut staff = sample_data().remove(0);
        assert!(staff.is_active());
        assert!(!apply_bulk(&mut staff, BulkAction::Activate));
        assert!(apply_bulk(&mut staff, BulkAction::Deactivate));
        assert!(!staff.is_active());
        assert!(apply_bulk(&mut staff, BulkAction::Delete));
        assert!(!apply_bulk(&mut staff, BulkAction::Delete));
    }
}
