use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

use crate::shared::hub::HubDashboard;
use crate::shared::routing::HostMode;

/// Categories hub, standalone or embedded in a host router
#[component]
pub fn CategoriesHub(#[prop(optional)] host: Option<HostMode>) -> impl IntoView {
    view! { <HubDashboard<Category> host=host /> }
}
