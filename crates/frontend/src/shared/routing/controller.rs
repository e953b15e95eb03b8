use std::rc::Rc;

use contracts::domain::common::HubEntity;

use super::breadcrumbs::{Breadcrumb, BreadcrumbBuilder};
use super::route_table::{RouteAction, RouteTable};
use super::view_mode::{PathState, ViewMode};

/// Pushes a path to the router
pub trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn navigate(&self, path: &str) {
        self(path)
    }
}

/// The part of the data hook the controller reads and drives.
///
/// The controller never fetches; it only selects what is already loaded.
pub trait EntitySelection<E: HubEntity> {
    /// Entity with `id` from the loaded collection
    fn find_loaded(&self, id: &str) -> Option<E>;

    fn selected_id(&self) -> Option<String>;

    fn select(&self, entity: E);

    fn clear_selection(&self);
}

/// Mode supplied by a host application that owns routing
pub struct ExternalMode {
    pub mode: ViewMode,
    pub set_mode: Rc<dyn Fn(ViewMode)>,
}

/// View-mode state machine of one hub, synchronized with the URL.
///
/// Standalone, transitions push paths through the [`Navigator`]. Embedded
/// (an [`ExternalMode`] is set) they go to the host setter instead, and
/// the controller never navigates.
pub struct ViewModeController<E: HubEntity> {
    routes: RouteTable,
    breadcrumbs: BreadcrumbBuilder,
    state: PathState,
    bulk: bool,
    external: Option<ExternalMode>,
    navigator: Rc<dyn Navigator>,
    selection: Rc<dyn EntitySelection<E>>,
}

impl<E: HubEntity> ViewModeController<E> {
    pub fn new(navigator: Rc<dyn Navigator>, selection: Rc<dyn EntitySelection<E>>) -> Self {
        let routes = RouteTable::for_entity::<E>();
        Self {
            breadcrumbs: BreadcrumbBuilder::for_entity::<E>(routes.clone()),
            routes,
            state: PathState::list(),
            bulk: false,
            external: None,
            navigator,
            selection,
        }
    }

    /// Mounts the hub under a path prefix
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.breadcrumbs = BreadcrumbBuilder::for_entity::<E>(routes.clone());
        self.routes = routes;
        self
    }

    pub fn with_external_mode(mut self, mode: ViewMode, set_mode: Rc<dyn Fn(ViewMode)>) -> Self {
        self.external = Some(ExternalMode { mode, set_mode });
        self
    }

    /// Host changed its mode value
    pub fn set_external_mode(&mut self, mode: ViewMode) {
        if let Some(external) = self.external.as_mut() {
            external.mode = mode;
            self.bulk = mode == ViewMode::Bulk;
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.external.is_some()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn state(&self) -> &PathState {
        &self.state
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.state.selected_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.state.mode == ViewMode::Detail && self.state.editing
    }

    pub fn current_mode(&self) -> ViewMode {
        if let Some(external) = &self.external {
            return external.mode;
        }
        if self.bulk && self.state.mode == ViewMode::List {
            ViewMode::Bulk
        } else {
            self.state.mode
        }
    }

    /// Re-derives the state from `path`. Never navigates.
    ///
    /// Returns whether the state changed.
    pub fn on_path_changed(&mut self, path: &str) -> bool {
        let next = self.routes.parse(path);
        let changed = next != self.state;
        if next.mode != ViewMode::List && !self.is_embedded() {
            self.bulk = false;
        }
        self.state = next;

        match self.state.mode {
            ViewMode::List if !self.is_embedded() => {
                if self.selection.selected_id().is_some() {
                    self.selection.clear_selection();
                }
            }
            ViewMode::Detail => self.resolve_selection(),
            _ => {}
        }
        changed
    }

    /// Selects the entity in focus once it is part of the loaded collection
    pub fn resolve_selection(&self) {
        let Some(id) = self.state.selected_id.as_deref() else {
            return;
        };
        if self.selection.selected_id().as_deref() == Some(id) {
            return;
        }
        if let Some(entity) = self.selection.find_loaded(id) {
            self.selection.select(entity);
        }
    }

    /// Applies `action` and returns the target path.
    ///
    /// The state is updated first; then the path is pushed, or the host
    /// setter is called when embedded.
    pub fn transition(&mut self, action: RouteAction) -> String {
        let path = self.routes.path_for(&action);
        self.state = action.target_state();
        self.bulk = false;

        if action == RouteAction::ViewList {
            self.selection.clear_selection();
        } else {
            self.resolve_selection();
        }

        match self.external.as_mut() {
            Some(external) => {
                external.mode = self.state.mode;
                (external.set_mode)(self.state.mode);
            }
            None => self.navigator.navigate(&path),
        }
        path
    }

    /// Switches the list into multi-select. Only valid from the list.
    pub fn enter_bulk(&mut self) -> bool {
        if self.current_mode() != ViewMode::List {
            return false;
        }
        self.set_bulk(true);
        true
    }

    pub fn exit_bulk(&mut self) -> bool {
        if self.current_mode() != ViewMode::Bulk {
            return false;
        }
        self.set_bulk(false);
        true
    }

    fn set_bulk(&mut self, bulk: bool) {
        self.bulk = bulk;
        let mode = if bulk { ViewMode::Bulk } else { ViewMode::List };
        if let Some(external) = self.external.as_mut() {
            external.mode = mode;
            (external.set_mode)(mode);
        }
    }

    pub fn breadcrumbs(&self, path: &str, entity_name: Option<&str>) -> Vec<Breadcrumb> {
        self.breadcrumbs.build(path, entity_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::{sample_data, Category};
    use contracts::domain::common::AggregateId;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeData {
        items: Vec<Category>,
        selected: RefCell<Option<Category>>,
    }

    impl EntitySelection<Category> for FakeData {
        fn find_loaded(&self, id: &str) -> Option<Category> {
            self.items.iter().find(|c| c.id_string() == id).cloned()
        }

        fn selected_id(&self) -> Option<String> {
            self.selected.borrow().as_ref().map(|c| c.id_string())
        }

        fn select(&self, entity: Category) {
            *self.selected.borrow_mut() = Some(entity);
        }

        fn clear_selection(&self) {
            *self.selected.borrow_mut() = None;
        }
    }

    struct Harness {
        nav: Rc<RefCell<Vec<String>>>,
        modes: Rc<RefCell<Vec<ViewMode>>>,
        data: Rc<FakeData>,
    }

    impl Harness {
        fn new(items: Vec<Category>) -> Self {
            Self {
                nav: Rc::default(),
                modes: Rc::default(),
                data: Rc::new(FakeData {
                    items,
                    ..FakeData::default()
                }),
            }
        }

        fn standalone(&self) -> ViewModeController<Category> {
            let nav = self.nav.clone();
            let navigator = move |path: &str| nav.borrow_mut().push(path.to_string());
            ViewModeController::new(Rc::new(navigator), self.data.clone())
        }

        fn embedded(&self, mode: ViewMode) -> ViewModeController<Category> {
            let modes = self.modes.clone();
            self.standalone()
                .with_external_mode(mode, Rc::new(move |m: ViewMode| modes.borrow_mut().push(m)))
        }

        fn navigations(&self) -> Vec<String> {
            self.nav.borrow().clone()
        }
    }

    fn id_of(c: &Category) -> String {
        c.base.id.as_string()
    }

    #[test]
    fn test_path_drives_mode() {
        let h = Harness::new(vec![]);
        let mut c = h.standalone();
        assert_eq!(c.current_mode(), ViewMode::List);

        c.on_path_changed("/categories/create");
        assert_eq!(c.current_mode(), ViewMode::Create);
        assert_eq!(c.selected_id(), None);

        c.on_path_changed("/categories/abc-12/edit");
        assert_eq!(c.current_mode(), ViewMode::Detail);
        assert_eq!(c.selected_id(), Some("abc-12"));
        assert!(c.is_editing());

        c.on_path_changed("/categories");
        assert_eq!(c.current_mode(), ViewMode::List);
        assert_eq!(c.selected_id(), None);
        assert!(h.navigations().is_empty());
    }

    #[test]
    fn test_on_path_changed_is_idempotent() {
        let items = sample_data();
        let path = format!("/categories/{}/view", id_of(&items[0]));
        let h = Harness::new(items);
        let mut c = h.standalone();

        assert!(c.on_path_changed(&path));
        let first = c.state().clone();
        let selected = h.data.selected_id();

        assert!(!c.on_path_changed(&path));
        assert_eq!(c.state(), &first);
        assert_eq!(h.data.selected_id(), selected);
        assert!(h.navigations().is_empty());
    }

    #[test]
    fn test_auto_selects_loaded_entity() {
        let items = sample_data();
        let target = items[2].clone();
        let h = Harness::new(items);
        let mut c = h.standalone();

        c.on_path_changed(&format!("/categories/{}", id_of(&target)));
        assert_eq!(h.data.selected.borrow().as_ref(), Some(&target));
    }

    #[test]
    fn test_unresolved_id_stays_detail() {
        let h = Harness::new(sample_data());
        let mut c = h.standalone();

        c.on_path_changed("/categories/missing/view");
        assert_eq!(c.current_mode(), ViewMode::Detail);
        assert_eq!(c.selected_id(), Some("missing"));
        assert_eq!(h.data.selected_id(), None);
    }

    #[test]
    fn test_list_path_clears_selection() {
        let items = sample_data();
        let h = Harness::new(items.clone());
        h.data.select(items[0].clone());
        let mut c = h.standalone();

        c.on_path_changed("/categories");
        assert_eq!(h.data.selected_id(), None);
    }

    #[test]
    fn test_transition_navigates_when_standalone() {
        let h = Harness::new(vec![]);
        let mut c = h.standalone();

        let path = c.transition(RouteAction::ViewEdit("42".into()));
        assert_eq!(path, "/categories/42/edit");
        assert_eq!(c.current_mode(), ViewMode::Detail);
        assert!(c.is_editing());

        c.transition(RouteAction::ViewCreate);
        c.transition(RouteAction::ViewList);
        assert_eq!(
            h.navigations(),
            ["/categories/42/edit", "/categories/create", "/categories"]
        );
        assert!(h.modes.borrow().is_empty());
    }

    #[test]
    fn test_transition_round_trips_through_parser() {
        let h = Harness::new(vec![]);
        let mut c = h.standalone();
        for action in [
            RouteAction::ViewCreate,
            RouteAction::ViewDetail("view-7".into()),
            RouteAction::ViewEdit("x".into()),
        ] {
            let path = c.transition(action);
            let state = c.state().clone();
            assert!(!c.on_path_changed(&path), "{}", path);
            assert_eq!(c.state(), &state);
        }
    }

    #[test]
    fn test_external_mode_uses_setter_and_never_navigates() {
        let h = Harness::new(vec![]);
        let mut c = h.embedded(ViewMode::Create);
        assert_eq!(c.current_mode(), ViewMode::Create);

        c.transition(RouteAction::ViewList);
        assert_eq!(*h.modes.borrow(), [ViewMode::List]);
        assert!(h.navigations().is_empty());
        assert_eq!(c.current_mode(), ViewMode::List);
    }

    #[test]
    fn test_external_mode_wins_over_path() {
        let h = Harness::new(vec![]);
        let mut c = h.embedded(ViewMode::Create);

        c.on_path_changed("/categories/5/edit");
        assert_eq!(c.current_mode(), ViewMode::Create);
        assert_eq!(c.breadcrumbs("/categories/5/edit", None).len(), 3);

        c.set_external_mode(ViewMode::List);
        assert_eq!(c.current_mode(), ViewMode::List);
        c.transition(RouteAction::ViewDetail("5".into()));
        assert_eq!(*h.modes.borrow(), [ViewMode::Detail]);
        assert!(h.navigations().is_empty());
    }

    #[test]
    fn test_bulk_mode_is_local() {
        let h = Harness::new(vec![]);
        let mut c = h.standalone();

        assert!(c.enter_bulk());
        assert_eq!(c.current_mode(), ViewMode::Bulk);
        assert!(!c.enter_bulk());

        // same list path does not leave bulk mode
        c.on_path_changed("/categories");
        assert_eq!(c.current_mode(), ViewMode::Bulk);

        assert!(c.exit_bulk());
        assert_eq!(c.current_mode(), ViewMode::List);
        assert!(h.navigations().is_empty());
    }

    #[test]
    fn test_bulk_not_available_outside_list() {
        let h = Harness::new(vec![]);
        let mut c = h.standalone();
        c.on_path_changed("/categories/create");
        assert!(!c.enter_bulk());

        c.on_path_changed("/categories");
        c.enter_bulk();
        c.on_path_changed("/categories/1/view");
        assert_eq!(c.current_mode(), ViewMode::Detail);
        c.on_path_changed("/categories");
        assert_eq!(c.current_mode(), ViewMode::List);
    }

    #[test]
    fn test_embedded_bulk_goes_through_setter() {
        let h = Harness::new(vec![]);
        let mut c = h.embedded(ViewMode::List);
        assert!(c.enter_bulk());
        assert!(c.exit_bulk());
        assert_eq!(*h.modes.borrow(), [ViewMode::Bulk, ViewMode::List]);
        assert!(h.navigations().is_empty());
    }

    #[test]
    fn test_mount_prefix() {
        let h = Harness::new(vec![]);
        let mut c = h
            .standalone()
            .with_routes(RouteTable::for_entity::<Category>().with_base("/admin"));
        c.transition(RouteAction::ViewCreate);
        assert_eq!(h.navigations(), ["/admin/categories/create"]);
        let crumbs = c.breadcrumbs("/admin/categories/create", None);
        assert_eq!(crumbs[0].href, "/admin");
    }

    #[test]
    fn test_mounted_under_collection_name_keeps_state() {
        let h = Harness::new(vec![]);
        let mut c = h
            .standalone()
            .with_routes(RouteTable::for_entity::<Category>().with_base("/categories"));

        c.on_path_changed("/categories/categories");
        assert_eq!(c.current_mode(), ViewMode::List);
        assert_eq!(c.selected_id(), None);

        let path = c.transition(RouteAction::ViewEdit("7".into()));
        assert_eq!(path, "/categories/categories/7/edit");
        assert!(!c.on_path_changed(&path));
        assert_eq!(c.selected_id(), Some("7"));
        assert!(c.is_editing());
    }
}
