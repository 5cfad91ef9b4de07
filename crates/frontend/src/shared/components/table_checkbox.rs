use leptos::prelude::*;

/// Table checkbox cell with the shared BEM style
///
/// Renders a `<td>` with a checkbox inside. A click on the checkbox does not
/// reach the row (stop_propagation).
///
/// # BEM classes
/// - `.table__cell--checkbox` - td wrapper
/// - `.table__checkbox` - input element
#[component]
pub fn TableCheckbox(
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Called on every user toggle
    on_toggle: Callback<()>,
    /// Header cell (`<th>`) instead of a body cell
    #[prop(optional)]
    header: bool,
) -> impl IntoView {
    let input = move || {
        view! {
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |_| on_toggle.run(())
            />
        }
    };

    if header {
        view! {
            <th class="table__header-cell table__header-cell--checkbox">{input()}</th>
        }
        .into_any()
    } else {
        view! {
            <td class="table__cell table__cell--checkbox" on:click=|e| e.stop_propagation()>
                {input()}
            </td>
        }
        .into_any()
    }
}
