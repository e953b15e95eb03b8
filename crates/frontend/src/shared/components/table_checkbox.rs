use leptos::prelude::*;

/// Row checkbox of a table in bulk mode
///
/// Renders a `<td>`; clicks on it do not reach the row.
#[component]
pub fn TableCheckbox(checked: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
