use contracts::shared::form::FormValues;
use contracts::shared::metadata::{FieldMetadata, FieldType};
use leptos::prelude::*;

/// Labelled input for one field, bound to `values` by field name
pub fn field_input(field: &'static FieldMetadata, values: RwSignal<FormValues>) -> AnyView {
    let name = field.name;
    let value = move || values.with(|v| v.get(name).cloned().unwrap_or_default());
    let set = move |raw: String| {
        values.update(|v| {
            v.insert(name.to_string(), raw);
        })
    };

    let input = match field.field_type {
        FieldType::TextArea => view! {
            <textarea
                class="form__textarea"
                rows="3"
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldType::Bool => view! {
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || value() == "true"
                on:change=move |ev| set(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        FieldType::Enum => {
            let options = field.enum_values.unwrap_or_default();
            view! {
                <select
                    class="form__select"
                    prop:value=value
                    on:change=move |ev| set(event_target_value(&ev))
                >
                    {options
                        .iter()
                        .map(|code| view! { <option value=*code>{*code}</option> })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        other => view! {
            <input
                type=other.input_type()
                class="form__input"
                placeholder=field.ui.placeholder.unwrap_or_default()
                prop:value=value
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    let hint = match (field.ui.hint, field.ref_aggregate) {
        (Some(hint), _) => Some(hint),
        (None, Some(_)) => Some("Id of the referenced record"),
        _ => None,
    };

    view! {
        <div class="form__group">
            <label class="form__label">
                {field.ui.label}
                {field.validation.is_required().then_some(" *")}
            </label>
            {input}
            {hint.map(|h| view! { <div class="form__hint">{h}</div> })}
        </div>
    }
    .into_any()
}

/// Inputs for every form field, optionally only those of one wizard step
pub fn field_inputs(
    fields: &'static [FieldMetadata],
    values: RwSignal<FormValues>,
    step: Option<usize>,
) -> AnyView {
    fields
        .iter()
        .filter(|f| f.visible_in_form() && step.map_or(true, |s| f.step == s))
        .map(|f| field_input(f, values))
        .collect_view()
        .into_any()
}

/// Error banner shown while `error` holds a message
pub fn error_box(error: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            }
        })
    }
}
