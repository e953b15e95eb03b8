use std::rc::Rc;

use contracts::domain::common::HubEntity;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use super::breadcrumbs::{Breadcrumb, BreadcrumbBuilder};
use super::controller::ViewModeController;
use super::route_table::{RouteAction, RouteTable};
use super::view_mode::{PathState, ViewMode};
use crate::shared::hub::data::HubData;

/// Mode value and setter of a host application that embeds a hub
#[derive(Clone, Copy)]
pub struct HostMode {
    pub mode: Signal<ViewMode>,
    pub set_mode: Callback<ViewMode>,
}

/// Reactive handle on the [`ViewModeController`] of a mounted hub.
///
/// The controller is the single writer; `mode` and `state` mirror it for
/// rendering.
pub struct HubRouter<E: HubEntity> {
    controller: StoredValue<ViewModeController<E>, LocalStorage>,
    pub mode: RwSignal<ViewMode>,
    pub state: RwSignal<PathState>,
    pub path: Memo<String>,
    routes: StoredValue<RouteTable>,
}

impl<E: HubEntity> Clone for HubRouter<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: HubEntity> Copy for HubRouter<E> {}

impl<E: HubEntity> HubRouter<E> {
    fn sync(&self) {
        let (mode, state) = self
            .controller
            .with_value(|c| (c.current_mode(), c.state().clone()));
        if self.mode.get_untracked() != mode {
            self.mode.set(mode);
        }
        if self.state.with_untracked(|s| s != &state) {
            self.state.set(state);
        }
    }

    pub fn transition(&self, action: RouteAction) {
        log::debug!("{}: {:?}", E::collection_name(), action);
        self.controller.update_value(|c| {
            c.transition(action);
        });
        self.sync();
    }

    pub fn enter_bulk(&self) {
        self.controller.update_value(|c| {
            c.enter_bulk();
        });
        self.sync();
    }

    pub fn exit_bulk(&self) {
        self.controller.update_value(|c| {
            c.exit_bulk();
        });
        self.sync();
    }

    /// Id in focus (tracked)
    pub fn selected_id(&self) -> Option<String> {
        self.state.with(|s| s.selected_id.clone())
    }

    pub fn routes(&self) -> RouteTable {
        self.routes.get_value()
    }

    /// Breadcrumbs of the current path (tracked)
    pub fn breadcrumbs(&self, entity_name: Option<&str>) -> Vec<Breadcrumb> {
        let path = self.path.get();
        BreadcrumbBuilder::for_entity::<E>(self.routes()).build(&path, entity_name)
    }
}

/// Mounts the view-mode controller of a hub.
///
/// Standalone, the controller follows the router location and navigates
/// through `leptos_router`. With `host` set it reports transitions to the
/// host setter and follows the host mode instead.
pub fn use_hub_router<E: HubEntity>(
    data: HubData<E>,
    host: Option<HostMode>,
    mount_base: &str,
) -> HubRouter<E> {
    let routes = RouteTable::for_entity::<E>().with_base(mount_base);
    let navigate = use_navigate();
    let navigator = move |path: &str| navigate(path, NavigateOptions::default());

    let mut controller = ViewModeController::<E>::new(Rc::new(navigator), Rc::new(data))
        .with_routes(routes.clone());
    if let Some(host) = host {
        controller = controller.with_external_mode(
            host.mode.get_untracked(),
            Rc::new(move |mode: ViewMode| host.set_mode.run(mode)),
        );
    }

    let location = use_location();
    let router = HubRouter {
        mode: RwSignal::new(controller.current_mode()),
        state: RwSignal::new(controller.state().clone()),
        controller: StoredValue::new_local(controller),
        path: location.pathname,
        routes: StoredValue::new(routes),
    };

    Effect::new(move |_| {
        let path = location.pathname.get();
        router.controller.update_value(|c| {
            c.on_path_changed(&path);
        });
        router.sync();
    });

    // the entity in focus may arrive after the path
    Effect::new(move |_| {
        data.items.track();
        router.controller.with_value(|c| c.resolve_selection());
    });

    if let Some(host) = host {
        Effect::new(move |_| {
            let mode = host.mode.get();
            router.controller.update_value(|c| c.set_external_mode(mode));
            router.sync();
        });
    }

    router
}
