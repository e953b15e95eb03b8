use std::collections::HashSet;

use contracts::domain::common::{AggregateRoot, BulkAction, HubEntity, ListFilter};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::confirm;
use super::data::{DataSource, HubData};
use super::form::error_box;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::routing::{HubRouter, RouteAction, ViewMode};

fn active_filter_code(active: Option<bool>) -> &'static str {
    match active {
        Some(true) => "true",
        Some(false) => "false",
        None => "",
    }
}

/// List of a hub: search, active filter, table and bulk actions
#[component]
pub fn HubList<E: HubEntity>(
    router: HubRouter<E>,
    data: HubData<E>,
    /// Delay before a typed search reloads the list
    debounce_ms: u32,
) -> impl IntoView {
    let checked = RwSignal::new(HashSet::<String>::new());
    let notice = RwSignal::new(None::<String>);
    let is_bulk = move || router.mode.get() == ViewMode::Bulk;

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    let search_text = RwSignal::new(
        data.filter
            .with_untracked(|f| f.search().unwrap_or_default().to_string()),
    );
    let pending = StoredValue::new_local(None::<Timeout>);
    let on_search = move |text: String| {
        search_text.set(text.clone());
        let timeout = Timeout::new(debounce_ms, move || {
            let search = Some(text.trim().to_string()).filter(|s| !s.is_empty());
            let mut filter = data.filter.get_untracked();
            if filter.search() != search.as_deref() {
                filter.set_search(search);
                data.set_filter(filter);
            }
        });
        // replacing the pending timeout cancels it
        pending.set_value(Some(timeout));
    };

    let on_active = move |code: String| {
        let active = match code.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        };
        let mut filter = data.filter.get_untracked();
        filter.set_active(active);
        data.set_filter(filter);
    };

    // ------------------------------------------------------------------
    // Bulk selection
    // ------------------------------------------------------------------

    let toggle = move |id: String, on: bool| {
        checked.update(|s| {
            if on {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        })
    };
    let all_checked = move || {
        data.items.with(|items| {
            !items.is_empty() && checked.with(|s| items.iter().all(|e| s.contains(&e.id_string())))
        })
    };
    let toggle_all = move |on: bool| {
        if on {
            let ids = data
                .items
                .with_untracked(|items| items.iter().map(|e| e.id_string()).collect());
            checked.set(ids);
        } else {
            checked.set(HashSet::new());
        }
    };
    let toggle_bulk = move |_: leptos::ev::MouseEvent| {
        if is_bulk() {
            checked.set(HashSet::new());
            router.exit_bulk();
        } else {
            router.enter_bulk();
        }
    };

    let run_bulk = move |action: BulkAction| {
        let ids: Vec<String> = checked.get_untracked().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        if action == BulkAction::Delete
            && !confirm(&format!("Delete {} selected record(s)?", ids.len()))
        {
            return;
        }
        spawn_local(async move {
            match data.bulk(action, ids).await {
                Ok(affected) => {
                    checked.set(HashSet::new());
                    notice.set(Some(format!("{}: {} record(s)", action.label(), affected)));
                }
                Err(e) => data.error.set(Some(e)),
            }
        });
    };

    // ------------------------------------------------------------------
    // Rows
    // ------------------------------------------------------------------

    let open = move |id: String| {
        data.select_by_id(&id);
        router.transition(RouteAction::ViewDetail(id));
    };

    let rows = move || {
        let bulk = is_bulk();
        data.items
            .get()
            .into_iter()
            .map(|item| {
                let id = item.id_string();
                let cells = E::list_fields()
                    .into_iter()
                    .map(|f| view! { <td class="table__cell">{item.cell(f.name)}</td> })
                    .collect_view();
                let id_row = id.clone();
                let id_selected = id.clone();
                let checkbox = bulk.then(|| {
                    let id_checked = id.clone();
                    let id_toggle = id.clone();
                    view! {
                        <TableCheckbox
                            checked=Signal::derive(move || checked.with(|s| s.contains(&id_checked)))
                            on_change=Callback::new(move |on| toggle(id_toggle.clone(), on))
                        />
                    }
                });
                view! {
                    <tr
                        class="table__row"
                        class:table__row--inactive={!item.is_active()}
                        class:table__row--selected=move || checked.with(|s| s.contains(&id_selected))
                        on:click=move |_| {
                            if bulk {
                                let on = !checked.with_untracked(|s| s.contains(&id_row));
                                toggle(id_row.clone(), on);
                            } else {
                                open(id_row.clone());
                            }
                        }
                    >
                        {checkbox}
                        {cells}
                    </tr>
                }
            })
            .collect_view()
    };

    let headers = move || {
        E::list_fields()
            .into_iter()
            .map(|f| view! { <th class="table__header-cell">{f.ui.label}</th> })
            .collect_view()
    };

    view! {
        <PageFrame page_id=format!("{}--list", E::aggregate_index()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(E::collection_name())}
                    <h1 class="page__title">{E::list_name()}</h1>
                    {move || (data.source.get() == DataSource::Mock).then(|| view! {
                        <span class="badge badge--warning" title="Backend unavailable">"Sample data"</span>
                    })}
                </div>
                <div class="page__header-right">
                    <button class="button button--primary" on:click=move |_| router.transition(RouteAction::ViewCreate)>
                        {icon("plus")}
                        {format!("New {}", E::element_name().to_lowercase())}
                    </button>
                    <button class="button button--secondary" on:click=move |_| data.refresh()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <button class="button button--secondary" on:click=toggle_bulk>
                        {move || if is_bulk() { "Done" } else { "Select" }}
                    </button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <input
                        type="search"
                        class="form__input filter-panel__search"
                        placeholder="Search by code or name"
                        prop:value=move || search_text.get()
                        on:input=move |ev| on_search(event_target_value(&ev))
                    />
                    <select
                        class="form__select"
                        prop:value=move || data.filter.with(|f| active_filter_code(f.active()))
                        on:change=move |ev| on_active(event_target_value(&ev))
                    >
                        <option value="">"All"</option>
                        <option value="true">"Active"</option>
                        <option value="false">"Inactive"</option>
                    </select>
                </div>

                {error_box(data.error)}

                <Show when=is_bulk>
                    <div class="bulk-bar">
                        <span class="bulk-bar__count">
                            {move || format!("Selected: {}", checked.with(HashSet::len))}
                        </span>
                        {[BulkAction::Activate, BulkAction::Deactivate, BulkAction::Delete]
                            .into_iter()
                            .map(|action| view! {
                                <button
                                    class="button button--secondary"
                                    class:button--danger={action == BulkAction::Delete}
                                    disabled=move || checked.with(HashSet::is_empty)
                                    on:click=move |_| run_bulk(action)
                                >
                                    {action.label()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </Show>

                {move || notice.get().map(|n| view! { <div class="notice">{n}</div> })}

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <Show when=is_bulk>
                                    <th class="table__header-cell table__header-cell--checkbox">
                                        <input
                                            type="checkbox"
                                            class="table__checkbox"
                                            prop:checked=all_checked
                                            on:change=move |ev| toggle_all(event_target_checked(&ev))
                                        />
                                    </th>
                                </Show>
                                {headers}
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>

                {move || {
                    if data.loading.get() {
                        Some(view! { <div class="page__loading">"Loading…"</div> }.into_any())
                    } else if data.items.with(Vec::is_empty) {
                        Some(view! { <div class="page__empty">"No records"</div> }.into_any())
                    } else {
                        None
                    }
                }}

                <div class="page__footer">
                    {move || format!("Total: {}", data.items.with(Vec::len))}
                </div>
            </div>
        </PageFrame>
    }
}
