//! PageFrame: root wrapper of every hub screen.
//!
//! Sets two metadata attributes on the root element:
//!   - `id`                 `"{aggregate_index}--{category}"`, e.g. `"a004--detail"`
//!   - `data-page-category` one of the `PAGE_CAT_*` constants

use leptos::prelude::*;

/// Table of records with filters
pub const PAGE_CAT_LIST: &str = "list";

/// Detail panel of a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Create wizard
pub const PAGE_CAT_CREATE: &str = "create";

/// Landing page linking the hubs
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_CREATE => "page page--create",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
