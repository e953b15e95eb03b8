use contracts::domain::a004_staff::aggregate::Staff;
use leptos::prelude::*;

use crate::shared::hub::HubDashboard;
use crate::shared::routing::HostMode;

/// Staff hub, standalone or embedded in a host router
#[component]
pub fn StaffHub(#[prop(optional)] host: Option<HostMode>) -> impl IntoView {
    view! { <HubDashboard<Staff> host=host /> }
}
