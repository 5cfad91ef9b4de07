use crate::domain::a001_order::ui::list::OrdersPage;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell>
            <OrdersPage />
        </Shell>
    }
}
