//! CRUD services shared by every hub collection

use contracts::domain::common::{BulkRequest, BulkResponse, HubEntity, ListFilter};

use crate::shared::data::{MemoryRepository, StoreError};

/// Records matching `filter`, sorted by description
pub async fn list<E: HubEntity>(
    repo: &MemoryRepository<E>,
    filter: &E::Filter,
) -> anyhow::Result<Vec<E>> {
    filter.validate().map_err(StoreError::Validation)?;
    Ok(repo.list(filter).await)
}

pub async fn get_by_id<E: HubEntity>(
    repo: &MemoryRepository<E>,
    id: &str,
) -> anyhow::Result<Option<E>> {
    Ok(repo.get(id).await?)
}

/// Creation of a new record; returns its id
pub async fn create<E: HubEntity>(repo: &MemoryRepository<E>, dto: E::Dto) -> anyhow::Result<String> {
    let mut aggregate = E::create_from_dto(dto).map_err(StoreError::Validation)?;
    aggregate.before_write();
    let id = repo.insert(aggregate).await?;
    tracing::info!("{}: created {}", E::collection_name(), id);
    Ok(id)
}

/// Update of an existing record; the DTO id, when present, must match `id`
pub async fn update<E: HubEntity>(
    repo: &MemoryRepository<E>,
    id: &str,
    dto: E::Dto,
) -> anyhow::Result<E> {
    let key = MemoryRepository::<E>::parse_id(id)?;
    if let Some(dto_id) = E::dto_id(&dto).filter(|s| !s.trim().is_empty()) {
        if MemoryRepository::<E>::parse_id(dto_id).ok().as_deref() != Some(key.as_str()) {
            return Err(StoreError::Validation(format!(
                "Id in body ({}) does not match id in path ({})",
                dto_id, id
            ))
            .into());
        }
    }
    let updated = repo
        .update(&key, |current| contracts::domain::common::collection::updated(current, &dto))
        .await?;
    tracing::info!("{}: updated {}", E::collection_name(), key);
    Ok(updated)
}

/// Soft delete
pub async fn delete<E: HubEntity>(repo: &MemoryRepository<E>, id: &str) -> anyhow::Result<()> {
    repo.soft_delete(id).await?;
    tracing::info!("{}: deleted {}", E::collection_name(), id);
    Ok(())
}

pub async fn bulk<E: HubEntity>(
    repo: &MemoryRepository<E>,
    request: &BulkRequest,
) -> anyhow::Result<BulkResponse> {
    let affected = repo.bulk(request.action, &request.ids).await;
    tracing::info!(
        "{}: {} applied to {} of {} records",
        E::collection_name(),
        request.action.label(),
        affected,
        request.ids.len()
    );
    Ok(BulkResponse { affected })
}

/// Replaces the collection with the sample records
pub async fn insert_test_data<E: HubEntity>(repo: &MemoryRepository<E>) -> anyhow::Result<usize> {
    let count = repo.replace_all(E::samples()).await;
    tracing::info!("{}: seeded {} records", E::collection_name(), count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{
        sample_data, sample_id, Category, CategoryDto, CategoryFilter,
    };
    use contracts::domain::a002_product::aggregate::{Product, ProductFilter};
    use contracts::domain::common::{AggregateId, AggregateRoot, BulkAction};

    async fn seeded() -> MemoryRepository<Category> {
        let repo = MemoryRepository::new();
        insert_test_data(&repo).await.unwrap();
        repo
    }

    fn store_error(err: &anyhow::Error) -> Option<&StoreError> {
        err.downcast_ref::<StoreError>()
    }

    #[tokio::test]
    async fn test_list_filters_and_sorts() {
        let repo = seeded().await;
        let filter = CategoryFilter {
            active: Some(true),
            ..Default::default()
        };
        let names: Vec<String> = list(&repo, &filter)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.base.description)
            .collect();
        assert_eq!(
            names,
            vec!["Apparel", "Electronics", "Home & Garden", "Laptops", "Smartphones"]
        );
    }

    #[tokio::test]
    async fn test_list_rejects_contradictory_filter() {
        let repo: MemoryRepository<Product> = MemoryRepository::new();
        let filter = ProductFilter {
            min_price: Some(10.0),
            max_price: Some(1.0),
            ..Default::default()
        };
        let err = list(&repo, &filter).await.unwrap_err();
        assert!(matches!(store_error(&err), Some(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let repo = seeded().await;
        let dto = CategoryDto {
            description: "Toys".into(),
            slug: "toys".into(),
            ..Default::default()
        };
        let id = create(&repo, dto).await.unwrap();
        let created = get_by_id(&repo, &id).await.unwrap().unwrap();
        assert_eq!(created.base.description, "Toys");
        assert!(created.base.code.starts_with("CAT-"));
    }

    #[tokio::test]
    async fn test_create_invalid_is_validation_error() {
        let repo = seeded().await;
        let dto = CategoryDto {
            description: "Toys".into(),
            slug: "Not A Slug".into(),
            ..Default::default()
        };
        let err = create(&repo, dto).await.unwrap_err();
        assert!(matches!(store_error(&err), Some(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_bumps_version() {
        let repo = seeded().await;
        let id = sample_id(2).as_string();
        let current = get_by_id(&repo, &id).await.unwrap().unwrap();
        let mut dto = current.to_dto();
        dto.description = "Home".into();

        let updated = update(&repo, &id, dto).await.unwrap();
        assert_eq!(updated.base.description, "Home");
        assert_eq!(updated.metadata().version, current.metadata().version + 1);
    }

    #[tokio::test]
    async fn test_update_rejects_mismatched_id() {
        let repo = seeded().await;
        let mut dto = sample_data()[0].to_dto();
        dto.id = Some(sample_id(3).as_string());
        let err = update(&repo, &sample_id(1).as_string(), dto).await.unwrap_err();
        assert!(matches!(store_error(&err), Some(StoreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let repo = seeded().await;
        let mut dto = sample_data()[0].to_dto();
        dto.id = None;
        let missing = sample_id(99).as_string();
        let err = update(&repo, &missing, dto).await.unwrap_err();
        assert!(matches!(store_error(&err), Some(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_and_bulk() {
        let repo = seeded().await;
        let id = sample_id(4).as_string();
        delete(&repo, &id).await.unwrap();
        assert_eq!(get_by_id(&repo, &id).await.unwrap(), None);

        let request = BulkRequest {
            action: BulkAction::Deactivate,
            ids: vec![id, sample_id(5).as_string(), sample_id(6).as_string()],
        };
        // deleted and already inactive records are left alone
        let response = bulk(&repo, &request).await.unwrap();
        assert_eq!(response.affected, 1);
    }
}
