use std::collections::HashMap;

use contracts::domain::common::collection;
use contracts::domain::common::{AggregateId, AggregateRoot, BulkAction, HubEntity};
use tokio::sync::RwLock;

use super::error::StoreError;

/// In-memory store of one entity collection, keyed by id.
///
/// Deleted records stay in the map with `is_deleted` set.
pub struct MemoryRepository<E: HubEntity> {
    items: RwLock<HashMap<String, E>>,
}

impl<E: HubEntity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HubEntity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Canonical form of an id from a URL or DTO
    pub fn parse_id(id: &str) -> Result<String, StoreError> {
        E::Id::from_string(id.trim())
            .map(|id| id.as_string())
            .map_err(|_| StoreError::InvalidId(id.to_string()))
    }

    pub async fn list(&self, filter: &E::Filter) -> Vec<E> {
        let items = self.items.read().await;
        collection::query(items.values(), filter)
    }

    pub async fn get(&self, id: &str) -> Result<Option<E>, StoreError> {
        let key = Self::parse_id(id)?;
        let items = self.items.read().await;
        Ok(items
            .get(&key)
            .filter(|e| !e.metadata().is_deleted)
            .cloned())
    }

    pub async fn insert(&self, aggregate: E) -> Result<String, StoreError> {
        let key = aggregate.id_string();
        let mut items = self.items.write().await;
        if items.contains_key(&key) {
            return Err(StoreError::Conflict(key));
        }
        items.insert(key.clone(), aggregate);
        Ok(key)
    }

    /// Replaces a live record with `change(current)`
    pub async fn update<F>(&self, id: &str, change: F) -> Result<E, StoreError>
    where
        F: FnOnce(&E) -> Result<E, String>,
    {
        let key = Self::parse_id(id)?;
        let mut items = self.items.write().await;
        let current = items
            .get(&key)
            .filter(|e| !e.metadata().is_deleted)
            .ok_or_else(|| StoreError::NotFound(key.clone()))?;
        let next = change(current).map_err(StoreError::Validation)?;
        items.insert(key, next.clone());
        Ok(next)
    }

    pub async fn soft_delete(&self, id: &str) -> Result<(), StoreError> {
        let key = Self::parse_id(id)?;
        let mut items = self.items.write().await;
        if items
            .get_mut(&key)
            .is_some_and(|item| collection::apply_bulk(item, BulkAction::Delete))
        {
            Ok(())
        } else {
            Err(StoreError::NotFound(key))
        }
    }

    /// Applies `action` to every known id; unknown and invalid ids are skipped
    pub async fn bulk(&self, action: BulkAction, ids: &[String]) -> usize {
        let mut items = self.items.write().await;
        ids.iter()
            .filter_map(|id| Self::parse_id(id).ok())
            .filter(|key| {
                items
                    .get_mut(key)
                    .is_some_and(|item| collection::apply_bulk(item, action))
            })
            .count()
    }

    /// Drops every record and stores `aggregates` instead
    pub async fn replace_all(&self, aggregates: Vec<E>) -> usize {
        let mut items = self.items.write().await;
        items.clear();
        items.extend(aggregates.into_iter().map(|e| (e.id_string(), e)));
        items.len()
    }

    /// Number of live records
    pub async fn count(&self) -> usize {
        let items = self.items.read().await;
        items.values().filter(|e| !e.metadata().is_deleted).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product::aggregate::{sample_data, Product, ProductFilter};

    async fn seeded() -> MemoryRepository<Product> {
        let repo = MemoryRepository::new();
        repo.replace_all(sample_data()).await;
        repo
    }

    #[tokio::test]
    async fn test_get_and_invalid_id() {
        let repo = seeded().await;
        let first = sample_data().remove(0);
        let found = repo.get(&first.id_string()).await.unwrap();
        assert_eq!(found.map(|p| p.base.code), Some(first.base.code));
        assert_eq!(
            repo.get("not-a-uuid").await,
            Err(StoreError::InvalidId("not-a-uuid".into()))
        );
    }

    #[tokio::test]
    async fn test_insert_conflict() {
        let repo = seeded().await;
        let first = sample_data().remove(0);
        assert!(matches!(
            repo.insert(first).await,
            Err(StoreError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_soft_delete_hides_record() {
        let repo = seeded().await;
        let id = sample_data()[1].id_string();
        let before = repo.count().await;

        repo.soft_delete(&id).await.unwrap();
        assert_eq!(repo.get(&id).await.unwrap(), None);
        assert_eq!(repo.count().await, before - 1);
        assert_eq!(
            repo.list(&ProductFilter::default()).await.len(),
            before - 1
        );
        assert!(matches!(
            repo.soft_delete(&id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_validation_keeps_record() {
        let repo = seeded().await;
        let id = sample_data()[0].id_string();
        let result = repo
            .update(&id, |_| Err("Price must be a non-negative amount".into()))
            .await;
        assert_eq!(
            result,
            Err(StoreError::Validation(
                "Price must be a non-negative amount".into()
            ))
        );
        assert!(repo.get(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_bulk_counts_changes_only() {
        let repo = seeded().await;
        let ids: Vec<String> = sample_data().iter().map(|p| p.id_string()).collect();
        let inactive = sample_data().iter().filter(|p| !p.base.is_active).count();

        let affected = repo.bulk(BulkAction::Activate, &ids).await;
        assert_eq!(affected, inactive);

        let with_junk = vec![ids[0].clone(), "junk".into()];
        assert_eq!(repo.bulk(BulkAction::Deactivate, &with_junk).await, 1);
    }
}
