//! TopBar: application title and sidebar toggle

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::hub::use_hub_config;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let config = use_hub_config();
    let api_title = config
        .mock_fallback
        .then_some("Falls back to sample data when unreachable");

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                    on:click=move |_| ctx.toggle_left()
                >
                    "☰"
                </button>
                <span class="top-header__title">"Commerce Admin"</span>
            </div>
            <div class="top-header__actions">
                <span class="top-header__api" title=api_title>{config.api_base}</span>
            </div>
        </div>
    }
}
