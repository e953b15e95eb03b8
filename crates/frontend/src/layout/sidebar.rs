//! Sidebar with one entry per hub

use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::{home_path, hub_links};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::hub::use_hub_config;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let base = use_hub_config().mount_base;
    let home = home_path(&base);

    let items = hub_links()
        .into_iter()
        .map(|link| {
            view! {
                <li class="sidebar__item">
                    <A href=link.path(&base)>
                        {icon(link.collection)}
                        <span class="sidebar__label">{link.label}</span>
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <aside class="sidebar" class:sidebar--collapsed=move || !ctx.left_open.get()>
            <nav>
                <ul class="sidebar__list">
                    <li class="sidebar__item">
                        <A href=home>
                            <span class="sidebar__label">"Dashboard"</span>
                        </A>
                    </li>
                    {items}
                </ul>
            </nav>
        </aside>
    }
}
