use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes, A};
use leptos_router::path;

use crate::domain::a001_category::ui::CategoriesHub;
use crate::domain::a002_product::ui::ProductsHub;
use crate::domain::a003_coupon::ui::CouponsHub;
use crate::domain::a004_staff::ui::StaffHub;
use crate::domain::{home_path, hub_links};
use crate::shared::hub::use_hub_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

/// Landing page linking the hubs
#[component]
pub fn DashboardHome() -> impl IntoView {
    let base = use_hub_config().mount_base;
    let cards = hub_links()
        .into_iter()
        .map(|link| {
            view! {
                <A href=link.path(&base)>
                    <div class="card">
                        <div class="card__icon">{icon(link.collection)}</div>
                        <div class="card__title">{link.label}</div>
                    </div>
                </A>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id="home--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
            </div>
            <div class="page__content">
                <div class="card-grid">{cards}</div>
            </div>
        </PageFrame>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let home = home_path(&use_hub_config().mount_base);
    view! {
        <div class="page page--empty">
            <h1 class="page__title">"Page not found"</h1>
            <A href=home>"Back to dashboard"</A>
        </div>
    }
}

/// One parent route per hub; the hub stays mounted while its own
/// sub-paths change and reads the view mode from the location itself.
///
/// The standalone app mounts the hubs at the origin root, matching the
/// empty `mount_base` of `HubConfig::default()`. A host mounting the hub
/// components under a prefix provides its own `HubConfig`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=DashboardHome />
            <ParentRoute path=path!("/categories") view=|| view! { <CategoriesHub /> }>
                <Route path=path!("") view=|| () />
                <Route path=path!("/*rest") view=|| () />
            </ParentRoute>
            <ParentRoute path=path!("/products") view=|| view! { <ProductsHub /> }>
                <Route path=path!("") view=|| () />
                <Route path=path!("/*rest") view=|| () />
            </ParentRoute>
            <ParentRoute path=path!("/coupons") view=|| view! { <CouponsHub /> }>
                <Route path=path!("") view=|| () />
                <Route path=path!("/*rest") view=|| () />
            </ParentRoute>
            <ParentRoute path=path!("/staff") view=|| view! { <StaffHub /> }>
                <Route path=path!("") view=|| () />
                <Route path=path!("/*rest") view=|| () />
            </ParentRoute>
        </Routes>
    }
}
