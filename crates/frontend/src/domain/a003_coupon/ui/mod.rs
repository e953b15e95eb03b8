use contracts::domain::a003_coupon::aggregate::Coupon;
use leptos::prelude::*;

use crate::shared::hub::HubDashboard;
use crate::shared::routing::HostMode;

/// Coupons hub, standalone or embedded in a host router
#[component]
pub fn CouponsHub(#[prop(optional)] host: Option<HostMode>) -> impl IntoView {
    view! { <HubDashboard<Coupon> host=host /> }
}
