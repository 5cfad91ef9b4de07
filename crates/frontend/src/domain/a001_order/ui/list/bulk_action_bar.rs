use crate::shared::components::ui::Button;
use crate::shared::dropdown::Dropdown;
use crate::shared::icons::icon;
use contracts::domain::a001_order::OrderStatus;
use leptos::prelude::*;

/// Shown while at least one order is selected
#[component]
pub fn BulkActionBar(
    #[prop(into)] count: Signal<usize>,
    /// A bulk request is in flight
    #[prop(into)]
    busy: Signal<bool>,
    on_duplicate: Callback<()>,
    on_delete: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { count.get() > 0 }>
            <div class="bulk-bar">
                <span class="bulk-bar__count">{move || format!("{} Selected", count.get())}</span>
                <div class="bulk-bar__actions">
                    <Button
                        variant="secondary"
                        size="sm"
                        disabled=busy
                        on_click=Callback::new(move |_| on_duplicate.run(()))
                    >
                        {icon("copy")}
                        " Duplicate"
                    </Button>
                    <Button
                        variant="danger"
                        size="sm"
                        disabled=busy
                        on_click=Callback::new(move |_| on_delete.run(()))
                    >
                        {icon("trash")}
                        " Delete"
                    </Button>
                    <Button
                        variant="ghost"
                        size="icon"
                        title="Clear selection"
                        on_click=Callback::new(move |_| on_clear.run(()))
                    >
                        {icon("x")}
                    </Button>
                </div>
            </div>
        </Show>
    }
}

/// "Change Status" menu applying a status to the whole selection
#[component]
pub fn BulkStatusDropdown(
    #[prop(into)] disabled: Signal<bool>,
    on_select: Callback<OrderStatus>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <Dropdown
            open=open
            class="bulk-status"
            trigger=move || view! {
                <Button
                    variant="outline"
                    disabled=disabled
                    on_click=Callback::new(move |_| open.update(|o| *o = !*o))
                >
                    "Change Status "
                    {icon("chevron-down")}
                </Button>
            }
        >
            {OrderStatus::all()
                .into_iter()
                .map(|status| {
                    let label = status.label().to_string();
                    view! {
                        <button
                            class="dropdown__item"
                            on:click=move |_| {
                                open.set(false);
                                on_select.run(status.clone());
                            }
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </Dropdown>
    }
}
