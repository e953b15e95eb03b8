use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;

use crate::shared::hub::HubDashboard;
use crate::shared::routing::HostMode;

/// Products hub, standalone or embedded in a host router
#[component]
pub fn ProductsHub(#[prop(optional)] host: Option<HostMode>) -> impl IntoView {
    view! { <HubDashboard<Product> host=host /> }
}
