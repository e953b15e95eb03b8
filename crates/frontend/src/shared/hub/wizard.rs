use contracts::domain::common::{AggregateRoot, HubEntity};
use contracts::shared::form;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::data::HubData;
use super::form::{error_box, field_inputs};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CREATE};
use crate::shared::routing::{HubRouter, RouteAction};

/// Multi-step create form; steps come from the entity field metadata.
///
/// Each step is validated before moving on, the whole form before submit.
/// A successful create opens the new entity.
#[component]
pub fn CreateWizard<E: HubEntity>(router: HubRouter<E>, data: HubData<E>) -> impl IntoView {
    let steps = E::wizard_steps();
    let last = steps.len().saturating_sub(1);
    let step = RwSignal::new(0usize);
    let values = RwSignal::new(E::dto_to_form(&E::Dto::default()));
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let validate_step = move || {
        let current = step.get_untracked();
        values.with_untracked(|v| form::validate_fields(E::fields(), v, Some(current)))
    };

    let on_back = move |_: leptos::ev::MouseEvent| {
        error.set(None);
        match step.get_untracked() {
            0 => router.transition(RouteAction::ViewList),
            n => step.set(n - 1),
        }
    };

    let on_next = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = validate_step() {
            error.set(Some(e));
            return;
        }
        error.set(None);
        let current = step.get_untracked();
        if current < last {
            step.set(current + 1);
            return;
        }

        let dto = match values.with_untracked(|v| E::dto_from_form(None, v)) {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        submitting.set(true);
        spawn_local(async move {
            match data.create(dto).await {
                Ok(id) => router.transition(RouteAction::ViewDetail(id)),
                Err(e) => error.set(Some(e)),
            }
            submitting.set(false);
        });
    };

    let indicator = move || {
        let current = step.get();
        steps
            .iter()
            .enumerate()
            .map(|(i, title)| {
                view! {
                    <li
                        class="wizard__step"
                        class:wizard__step--active={i == current}
                        class:wizard__step--done={i < current}
                    >
                        <span class="wizard__step-number">{i + 1}</span>
                        <span class="wizard__step-title">{*title}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id=format!("{}--create", E::aggregate_index()) category=PAGE_CAT_CREATE>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("New {}", E::element_name().to_lowercase())}</h1>
                </div>
            </div>
            <div class="page__content">
                <ol class="wizard__steps">{indicator}</ol>
                {error_box(error)}
                <div class="form">
                    {move || field_inputs(E::fields(), values, Some(step.get()))}
                </div>
                <div class="form__actions">
                    <button class="button button--secondary" on:click=on_back>
                        {move || if step.get() == 0 { "Cancel" } else { "Back" }}
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || submitting.get()
                        on:click=on_next
                    >
                        {move || if step.get() < last { "Next" } else { "Create" }}
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
