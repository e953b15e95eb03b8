use std::marker::PhantomData;

use contracts::domain::common::{AggregateRoot, HubEntity};
use leptos::prelude::*;

use super::config::use_hub_config;
use super::data::use_hub_data;
use super::detail::HubDetail;
use super::list::HubList;
use super::wizard::CreateWizard;
use crate::shared::components::breadcrumbs::BreadcrumbTrail;
use crate::shared::routing::{use_hub_router, HostMode, ViewMode};

/// Screen rendered for the current mode; the view is rebuilt only when it changes
#[derive(Debug, Clone, PartialEq)]
enum Screen {
    List,
    Detail { id: String, editing: bool },
    Create,
}

/// Dashboard of one hub: breadcrumbs plus the list, detail or create
/// screen of the current view mode.
///
/// Standalone, the mode follows the router location. With `host` the
/// host application owns the mode and receives every transition.
#[component]
pub fn HubDashboard<E: HubEntity>(
    host: Option<HostMode>,
    #[prop(optional)] _marker: PhantomData<E>,
) -> impl IntoView {
    let config = use_hub_config();
    let debounce_ms = config.search_debounce_ms;
    let mount_base = config.mount_base.clone();
    let data = use_hub_data::<E>(config);
    let router = use_hub_router(data, host, &mount_base);

    let screen = Memo::new(move |_| match router.mode.get() {
        ViewMode::List | ViewMode::Bulk => Screen::List,
        ViewMode::Create => Screen::Create,
        ViewMode::Detail => router.state.with(|s| match &s.selected_id {
            Some(id) => Screen::Detail {
                id: id.clone(),
                editing: s.editing,
            },
            // embedded hosts may switch to detail before an id is known
            None => Screen::List,
        }),
    });

    let crumbs = Signal::derive(move || {
        let name = router.selected_id().and_then(|id| data.display_name(&id));
        router.breadcrumbs(name.as_deref())
    });

    view! {
        <div class="hub" data-collection=E::collection_name()>
            <BreadcrumbTrail crumbs=crumbs />
            {move || match screen.get() {
                Screen::List => view! {
                    <HubList<E> router=router data=data debounce_ms=debounce_ms />
                }
                .into_any(),
                Screen::Detail { id, editing } => view! {
                    <HubDetail<E> router=router data=data id=id editing=editing />
                }
                .into_any(),
                Screen::Create => view! { <CreateWizard<E> router=router data=data /> }.into_any(),
            }}
        </div>
    }
}
