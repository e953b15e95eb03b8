use contracts::domain::common::collection;
use contracts::domain::common::{AggregateRoot, BulkAction, BulkRequest, HubEntity, ListFilter};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use super::config::HubConfig;
use crate::shared::routing::EntitySelection;

/// Where the items currently shown come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    /// Sample data; once the backend failed the hub stays on it
    Mock,
}

/// Data hook of one hub: the loaded collection, the selected entity and
/// the CRUD calls.
///
/// Requests go to the REST backend. When the backend is unreachable and
/// `mock_fallback` is set, the hook switches to an in-memory copy of the
/// sample data and applies filters and mutations locally.
pub struct HubData<E: HubEntity> {
    pub items: RwSignal<Vec<E>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub selected: RwSignal<Option<E>>,
    pub source: RwSignal<DataSource>,
    pub filter: RwSignal<E::Filter>,
    mock: RwSignal<Vec<E>>,
    config: StoredValue<HubConfig>,
    /// Ticket of the latest list request; older responses are dropped
    generation: StoredValue<u64>,
}

impl<E: HubEntity> Clone for HubData<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: HubEntity> Copy for HubData<E> {}

impl<E: HubEntity> HubData<E> {
    pub fn new(config: HubConfig) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            selected: RwSignal::new(None),
            source: RwSignal::new(DataSource::Remote),
            filter: RwSignal::new(E::Filter::default()),
            mock: RwSignal::new(E::samples()),
            config: StoredValue::new(config),
            generation: StoredValue::new(0),
        }
    }

    fn api_base(&self) -> String {
        self.config.with_value(|c| c.api_base.clone())
    }

    fn is_mock(&self) -> bool {
        self.source.get_untracked() == DataSource::Mock
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Reloads the collection with the current filter.
    ///
    /// Only the latest request updates the items. A backend that cannot be
    /// reached switches the hub to sample data when `mock_fallback` is set;
    /// error responses are reported as they are.
    pub fn refresh(&self) {
        let filter = self.filter.get_untracked();
        if let Err(e) = filter.validate() {
            self.error.set(Some(e));
            return;
        }
        let ticket = self.begin_request();
        if self.is_mock() {
            self.load_mock(&filter);
            return;
        }

        let this = *self;
        let base = self.api_base();
        self.loading.set(true);
        spawn_local(async move {
            let result = api::fetch_list::<E>(&base, &filter).await;
            if !this.is_current(ticket) {
                log::debug!("{}: dropped stale list response", E::list_name());
                return;
            }
            match result {
                Ok(items) => {
                    this.items.set(items);
                    this.error.set(None);
                }
                Err(e) if e.is_unreachable() => this.fail_over(e.to_string(), &filter),
                Err(e) => {
                    log::error!("{}: {}", E::list_name(), e);
                    this.error.set(Some(e.to_string()));
                }
            }
            this.loading.set(false);
        });
    }

    fn begin_request(&self) -> u64 {
        self.generation.update_value(|g| *g += 1);
        self.generation.get_value()
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.get_value() == ticket
    }

    fn fail_over(&self, error: String, filter: &E::Filter) {
        if !self.config.with_value(|c| c.mock_fallback) {
            log::error!("{}: {}", E::list_name(), error);
            self.error.set(Some(error));
            return;
        }
        log::warn!(
            "{}: backend unavailable ({}), serving sample data",
            E::list_name(),
            error
        );
        self.source.set(DataSource::Mock);
        self.load_mock(filter);
    }

    fn load_mock(&self, filter: &E::Filter) {
        let items = self
            .mock
            .with_untracked(|store| collection::query(store.iter(), filter));
        self.items.set(items);
        self.error.set(None);
    }

    /// Applies a new filter and reloads
    pub fn set_filter(&self, filter: E::Filter) {
        self.filter.set(filter);
        self.refresh();
    }

    /// Loads one entity regardless of the list filter
    pub async fn fetch_one(self, id: String) -> Result<Option<E>, String> {
        if self.is_mock() {
            return Ok(self.mock_get(&id));
        }
        api::fetch_by_id::<E>(&self.api_base(), &id)
            .await
            .map_err(|e| e.to_string())
    }

    fn mock_get(&self, id: &str) -> Option<E> {
        self.mock.with_untracked(|store| {
            store
                .iter()
                .find(|e| e.id_string() == id && !e.metadata().is_deleted)
                .cloned()
        })
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn select(&self, entity: E) {
        self.selected.set(Some(entity));
    }

    /// Selects a loaded entity; returns false when `id` is not loaded
    pub fn select_by_id(&self, id: &str) -> bool {
        match self.lookup(id) {
            Some(entity) => {
                self.select(entity);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&self) {
        if self.selected.with_untracked(Option::is_some) {
            self.selected.set(None);
        }
    }

    /// Entity with `id` among the loaded items
    pub fn lookup(&self, id: &str) -> Option<E> {
        self.items
            .with_untracked(|items| items.iter().find(|e| e.id_string() == id).cloned())
    }

    /// Display name of a loaded or selected entity (tracked)
    pub fn display_name(&self, id: &str) -> Option<String> {
        let selected = self.selected.with(|s| {
            s.as_ref()
                .filter(|e| e.id_string() == id)
                .map(|e| e.description().to_string())
        });
        selected.or_else(|| {
            self.items.with(|items| {
                items
                    .iter()
                    .find(|e| e.id_string() == id)
                    .map(|e| e.description().to_string())
            })
        })
    }

    fn selected_is(&self, id: &str) -> bool {
        self.selected
            .with_untracked(|s| s.as_ref().is_some_and(|e| e.id_string() == id))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Creates an entity and returns its id
    pub async fn create(self, dto: E::Dto) -> Result<String, String> {
        let entity = E::create_from_dto(dto.clone())?;
        let id = if self.is_mock() {
            let id = entity.id_string();
            self.mock.update(|store| store.push(entity));
            id
        } else {
            api::create::<E>(&self.api_base(), &dto)
                .await
                .map_err(|e| e.to_string())?
        };
        log::info!("{} {} created", E::element_name(), id);
        self.refresh();
        Ok(id)
    }

    /// Saves a DTO carrying the id of an existing entity
    pub async fn update(self, dto: E::Dto) -> Result<(), String> {
        let id = E::dto_id(&dto)
            .map(str::to_string)
            .ok_or_else(|| "Entity id is missing".to_string())?;
        if let Some(current) = self.lookup(&id) {
            collection::updated(&current, &dto)?;
        }

        if self.is_mock() {
            let mut result = Err(format!("{} not found", E::element_name()));
            self.mock.update(|store| {
                if let Some(item) = store.iter_mut().find(|e| e.id_string() == id) {
                    result = collection::updated(item, &dto).map(|next| *item = next);
                }
            });
            result?;
        } else {
            api::update::<E>(&self.api_base(), &id, &dto)
                .await
                .map_err(|e| e.to_string())?;
        }

        if self.selected_is(&id) {
            match self.fetch_one(id.clone()).await {
                Ok(Some(entity)) => self.select(entity),
                Ok(None) => self.clear_selection(),
                Err(e) => log::warn!("{}: reload after save failed: {}", E::list_name(), e),
            }
        }
        self.refresh();
        Ok(())
    }

    pub async fn delete(self, id: String) -> Result<(), String> {
        if self.is_mock() {
            let mut found = false;
            self.mock.update(|store| {
                if let Some(item) = store.iter_mut().find(|e| e.id_string() == id) {
                    found = collection::apply_bulk(item, BulkAction::Delete);
                }
            });
            if !found {
                return Err(format!("{} not found", E::element_name()));
            }
        } else {
            api::delete::<E>(&self.api_base(), &id)
                .await
                .map_err(|e| e.to_string())?;
        }

        if self.selected_is(&id) {
            self.clear_selection();
        }
        log::info!("{} {} deleted", E::element_name(), id);
        self.refresh();
        Ok(())
    }

    /// Runs a bulk action and returns the number of changed records
    pub async fn bulk(self, action: BulkAction, ids: Vec<String>) -> Result<usize, String> {
        if ids.is_empty() {
            return Ok(0);
        }
        let affected = if self.is_mock() {
            let mut affected = 0;
            self.mock.update(|store| {
                for item in store.iter_mut().filter(|e| ids.contains(&e.id_string())) {
                    if collection::apply_bulk(item, action) {
                        affected += 1;
                    }
                }
            });
            affected
        } else {
            let request = BulkRequest {
                action,
                ids: ids.clone(),
            };
            api::bulk::<E>(&self.api_base(), &request)
                .await
                .map_err(|e| e.to_string())?
                .affected
        };

        if action == BulkAction::Delete && ids.iter().any(|id| self.selected_is(id)) {
            self.clear_selection();
        }
        log::info!(
            "{}: {} applied to {} record(s)",
            E::list_name(),
            action.label(),
            affected
        );
        self.refresh();
        Ok(affected)
    }
}

impl<E: HubEntity> EntitySelection<E> for HubData<E> {
    fn find_loaded(&self, id: &str) -> Option<E> {
        self.lookup(id)
    }

    fn selected_id(&self) -> Option<String> {
        self.selected
            .with_untracked(|s| s.as_ref().map(|e| e.id_string()))
    }

    fn select(&self, entity: E) {
        HubData::select(self, entity);
    }

    fn clear_selection(&self) {
        HubData::clear_selection(self);
    }
}

/// Creates the data hook of a hub and loads the first page
pub fn use_hub_data<E: HubEntity>(config: HubConfig) -> HubData<E> {
    let data = HubData::new(config);
    data.refresh();
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{sample_data, sample_id, Category};
    use contracts::domain::common::AggregateId;
    use futures::executor::block_on;

    fn mock_hub() -> (Owner, HubData<Category>) {
        let owner = Owner::new();
        owner.set();
        let data = HubData::new(HubConfig {
            api_base: String::new(),
            mock_fallback: true,
            search_debounce_ms: 0,
            mount_base: String::new(),
        });
        data.source.set(DataSource::Mock);
        data.refresh();
        (owner, data)
    }

    fn id(n: u16) -> String {
        sample_id(n).as_string()
    }

    #[test]
    fn test_mock_refresh_loads_samples() {
        let (_owner, data) = mock_hub();
        assert_eq!(data.items.get_untracked().len(), sample_data().len());
        assert_eq!(data.error.get_untracked(), None);
    }

    #[test]
    fn test_delete_of_selected_clears_selection() {
        let (_owner, data) = mock_hub();
        assert!(data.select_by_id(&id(1)));

        block_on(data.delete(id(1))).unwrap();
        assert_eq!(data.selected.get_untracked(), None);
        assert_eq!(data.lookup(&id(1)), None);
        assert_eq!(data.items.get_untracked().len(), sample_data().len() - 1);
    }

    #[test]
    fn test_delete_of_other_keeps_selection() {
        let (_owner, data) = mock_hub();
        data.select_by_id(&id(2));

        block_on(data.delete(id(3))).unwrap();
        assert_eq!(EntitySelection::selected_id(&data), Some(id(2)));
        assert!(block_on(data.delete(id(3))).is_err());
    }

    #[test]
    fn test_bulk_delete_clears_selection() {
        let (_owner, data) = mock_hub();
        data.select_by_id(&id(2));

        let affected = block_on(data.bulk(BulkAction::Delete, vec![id(2), id(3)])).unwrap();
        assert_eq!(affected, 2);
        assert_eq!(data.selected.get_untracked(), None);
        assert_eq!(data.items.get_untracked().len(), sample_data().len() - 2);
    }

    #[test]
    fn test_bulk_deactivate_keeps_selection() {
        let (_owner, data) = mock_hub();
        data.select_by_id(&id(2));

        // the sixth sample is already inactive
        let affected =
            block_on(data.bulk(BulkAction::Deactivate, vec![id(2), id(6)])).unwrap();
        assert_eq!(affected, 1);
        assert_eq!(EntitySelection::selected_id(&data), Some(id(2)));
    }

    #[test]
    fn test_mock_update_bumps_version_and_reloads_selection() {
        let (_owner, data) = mock_hub();
        data.select_by_id(&id(2));
        let current = data.lookup(&id(2)).unwrap();
        let mut dto = current.to_dto();
        dto.description = "Home".into();

        block_on(data.update(dto)).unwrap();
        let selected = data.selected.get_untracked().unwrap();
        assert_eq!(selected.base.description, "Home");
        assert_eq!(selected.metadata().version, current.metadata().version + 1);
        assert_eq!(data.lookup(&id(2)).unwrap().base.description, "Home");
    }

    #[test]
    fn test_mock_update_rejects_invalid_dto() {
        let (_owner, data) = mock_hub();
        let current = data.lookup(&id(2)).unwrap();
        let mut dto = current.to_dto();
        dto.slug = "Not A Slug".into();

        assert!(block_on(data.update(dto)).is_err());
        assert_eq!(data.lookup(&id(2)), Some(current));
    }

    #[test]
    fn test_only_latest_request_is_current() {
        let (_owner, data) = mock_hub();
        let first = data.begin_request();
        let second = data.begin_request();
        assert!(!data.is_current(first));
        assert!(data.is_current(second));

        data.refresh();
        assert!(!data.is_current(second));
    }
}
