use crate::shared::components::stat_card::StatCard;
use contracts::domain::a001_order::OrderStats;
use leptos::prelude::*;

#[component]
pub fn OrderStatsCards(
    /// Latest stats snapshot; `None` until the first load completes
    #[prop(into)]
    stats: Signal<Option<OrderStats>>,
) -> impl IntoView {
    let pick = move |f: fn(&OrderStats) -> u64| Signal::derive(move || stats.get().as_ref().map(f));

    view! {
        <div class="stats-grid">
            <StatCard label="Total Orders This Month" accent="info" value=pick(|s| s.total_orders_this_month) />
            <StatCard label="Pending Orders" accent="warning" value=pick(|s| s.pending_orders) />
            <StatCard label="Shipped Orders" accent="success" value=pick(|s| s.shipped_orders) />
            <StatCard label="Refunded Orders" accent="error" value=pick(|s| s.refunded_orders) />
        </div>
    }
}
