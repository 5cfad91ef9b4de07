use contracts::enums::OrderFilterTab;
use leptos::prelude::*;

#[component]
pub fn OrderFilterTabs(
    #[prop(into)] active: Signal<OrderFilterTab>,
    on_change: Callback<OrderFilterTab>,
) -> impl IntoView {
    view! {
        <div class="filter-tabs" role="tablist">
            {OrderFilterTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="filter-tabs__tab"
                            class:filter-tabs__tab--active=move || active.get() == tab
                            on:click=move |_| on_change.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
