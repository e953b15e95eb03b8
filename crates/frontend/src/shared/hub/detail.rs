use contracts::domain::common::{AggregateRoot, HubEntity};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::confirm;
use super::data::HubData;
use super::form::{error_box, field_inputs};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::routing::{HubRouter, RouteAction};

#[derive(Debug, Clone, PartialEq)]
enum LoadState {
    Loading,
    NotFound,
    Failed(String),
    Ready,
}

/// Detail panel of the entity `id`: read-only view or edit form.
///
/// Uses the loaded collection when it has the entity, otherwise fetches it
/// by id with its own loading and error state.
#[component]
pub fn HubDetail<E: HubEntity>(
    router: HubRouter<E>,
    data: HubData<E>,
    id: String,
    editing: bool,
) -> impl IntoView {
    let initial = data.lookup(&id).or_else(|| {
        data.selected
            .get_untracked()
            .filter(|e| e.id_string() == id)
    });
    let state = RwSignal::new(if initial.is_some() {
        LoadState::Ready
    } else {
        LoadState::Loading
    });
    let entity = RwSignal::new(initial);

    if entity.with_untracked(Option::is_none) {
        let id = id.clone();
        spawn_local(async move {
            match data.fetch_one(id).await {
                Ok(Some(found)) => {
                    data.select(found.clone());
                    entity.set(Some(found));
                    state.set(LoadState::Ready);
                }
                Ok(None) => state.set(LoadState::NotFound),
                Err(e) => state.set(LoadState::Failed(e)),
            }
        });
    }

    // follow saves and auto-selection of the same entity
    let id_fx = id.clone();
    Effect::new(move |_| {
        let selected = data.selected.get().filter(|e| e.id_string() == id_fx);
        if let Some(selected) = selected {
            if entity.with_untracked(|e| e.as_ref() != Some(&selected)) {
                entity.set(Some(selected));
            }
            state.set(LoadState::Ready);
        }
    });

    let error = RwSignal::new(None::<String>);
    let title = {
        let id = id.clone();
        move || {
            entity.with(|e| {
                e.as_ref()
                    .map(|e| e.description().to_string())
                    .unwrap_or_else(|| format!("{} {}", E::element_name(), id))
            })
        }
    };

    let id_edit = id.clone();
    let id_view = id.clone();
    let id_delete = id.clone();
    let on_delete = move |_: leptos::ev::MouseEvent| {
        if !confirm(&format!("Delete this {}?", E::element_name().to_lowercase())) {
            return;
        }
        let id = id_delete.clone();
        spawn_local(async move {
            match data.delete(id).await {
                Ok(()) => router.transition(RouteAction::ViewList),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let body = {
        let id = id.clone();
        move || match state.get() {
            LoadState::Loading => view! { <div class="page__loading">"Loading…"</div> }.into_any(),
            LoadState::NotFound => view! {
                <div class="page__empty">{format!("{} not found", E::element_name())}</div>
            }
            .into_any(),
            LoadState::Failed(e) => view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            }
            .into_any(),
            LoadState::Ready => match entity.get() {
                Some(e) if editing => edit_form(router, data, id.clone(), e, error).into_any(),
                Some(e) => read_only(&e).into_any(),
                None => ().into_any(),
            },
        }
    };

    view! {
        <PageFrame page_id=format!("{}--detail", E::aggregate_index()) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <button class="button button--ghost" on:click=move |_| router.transition(RouteAction::ViewList)>
                        {icon("back")}
                    </button>
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    {(!editing).then(|| view! {
                        <button
                            class="button button--primary"
                            on:click=move |_| router.transition(RouteAction::ViewEdit(id_edit.clone()))
                        >
                            {icon("edit")}
                            "Edit"
                        </button>
                    })}
                    {editing.then(|| view! {
                        <button
                            class="button button--secondary"
                            on:click=move |_| router.transition(RouteAction::ViewDetail(id_view.clone()))
                        >
                            "Cancel"
                        </button>
                    })}
                    <button class="button button--secondary button--danger" on:click=on_delete>
                        {icon("delete")}
                        "Delete"
                    </button>
                </div>
            </div>
            <div class="page__content">
                {error_box(error)}
                {body}
            </div>
        </PageFrame>
    }
}

fn read_only<E: HubEntity>(entity: &E) -> impl IntoView {
    let rows = E::fields()
        .iter()
        .map(|f| {
            view! {
                <div class="details__row">
                    <dt class="details__label">{f.ui.label}</dt>
                    <dd class="details__value">{entity.cell(f.name)}</dd>
                </div>
            }
        })
        .collect_view();

    view! {
        <dl class="details">
            {rows}
            <div class="details__row details__row--meta">
                <dt class="details__label">"Updated"</dt>
                <dd class="details__value">{entity.cell("updatedAt")}</dd>
            </div>
            <div class="details__row details__row--meta">
                <dt class="details__label">"Version"</dt>
                <dd class="details__value">{entity.metadata().version}</dd>
            </div>
        </dl>
    }
}

fn edit_form<E: HubEntity>(
    router: HubRouter<E>,
    data: HubData<E>,
    id: String,
    entity: E,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let values = RwSignal::new(entity.form_values());
    let saving = RwSignal::new(false);

    let on_save = move |_: leptos::ev::MouseEvent| {
        let dto = match E::dto_from_form(Some(id.clone()), &values.get_untracked()) {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        let id = id.clone();
        spawn_local(async move {
            match data.update(dto).await {
                Ok(()) => router.transition(RouteAction::ViewDetail(id)),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="form">
            {field_inputs(E::fields(), values, None)}
            <div class="form__actions">
                <button
                    class="button button--primary"
                    disabled=move || saving.get()
                    on:click=on_save
                >
                    {move || if saving.get() { "Saving…" } else { "Save" }}
                </button>
            </div>
        </div>
    }
}
