use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::shared::routing::{is_link, Breadcrumb};

/// Breadcrumb trail; the last crumb is plain text
#[component]
pub fn BreadcrumbTrail(#[prop(into)] crumbs: Signal<Vec<Breadcrumb>>) -> impl IntoView {
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol class="breadcrumbs__list">
                {move || {
                    let crumbs = crumbs.get();
                    crumbs
                        .iter()
                        .enumerate()
                        .map(|(i, crumb)| {
                            let label = crumb.label.clone();
                            let content = if is_link(&crumbs, i) {
                                view! {
                                    <A href=crumb.href.clone()>{label}</A>
                                    <span class="breadcrumbs__separator">{icon("chevron-right")}</span>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <span class="breadcrumbs__current" aria-current="page">{label}</span>
                                }
                                .into_any()
                            };
                            view! { <li class="breadcrumbs__item">{content}</li> }
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}
