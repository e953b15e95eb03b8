pub mod global_context;
pub mod sidebar;
pub mod top_bar;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_bar::TopBar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 TopBar                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopBar />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
