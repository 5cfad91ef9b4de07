pub mod controller;
pub mod row;
pub mod sort;
pub mod state;

mod bulk_action_bar;
mod filter_tabs;
mod stats_cards;

use self::bulk_action_bar::{BulkActionBar, BulkStatusDropdown};
use self::controller::OrdersController;
use self::filter_tabs::OrderFilterTabs;
use self::row::{format_amount, OrderRow};
use self::sort::{sort_orders, OrderSortKey, SortState};
use self::state::{create_state, OrdersListState};
use self::stats_cards::OrderStatsCards;
use crate::domain::a001_order::api::HttpOrdersApi;
use crate::domain::a001_order::ui::create::CreateOrderModal;
use crate::domain::a001_order::ui::delete::DeleteOrderModal;
use crate::domain::a001_order::ui::details::OrderDetailsModal;
use crate::shared::api_utils::ApiError;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_order_date;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::mutation::MutationState;
use contracts::domain::a001_order::{Order, OrderId, OrderStatus, ORDERS_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Controller wired to the browser API client and the page's state signal
pub type PageController = OrdersController<HttpOrdersApi, RwSignal<OrdersListState>>;

/// Checkbox, six data columns, action menu
const COLUMN_COUNT: usize = 8;

impl CsvExportable for Order {
    fn headers() -> Vec<&'static str> {
        vec![
            "Order Number",
            "Customer Name",
            "Email",
            "Order Date",
            "Status",
            "Total Amount",
            "Payment Status",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.order_number.clone(),
            self.customer.name.clone(),
            self.customer.email.clone(),
            format_order_date(self.order_date),
            self.status.label().to_string(),
            format_amount(self.total_amount),
            self.payment_status.label().to_string(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
enum ActiveModal {
    Create,
    Details(OrderId),
    Delete(Order),
}

#[derive(Clone, Debug)]
enum BulkAction {
    Duplicate,
    Delete,
    Status(OrderStatus),
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let state = create_state();
    let controller: PageController = OrdersController::new(HttpOrdersApi, state);
    let sort = RwSignal::new(SortState::default());
    let modal = RwSignal::new(None::<ActiveModal>);
    let bulk = RwSignal::new(MutationState::default());

    let reload = move || {
        spawn_local(async move {
            let _ = controller.load().await;
        });
    };
    reload();

    let visible_orders = Memo::new(move |_| state.with(|s| sort_orders(&s.orders, sort.get())));
    let selected_count = Signal::derive(move || state.with(|s| s.selected_ids.len()));
    let bulk_busy = Signal::derive(move || bulk.with(|m| m.is_submitting()));

    let run_bulk = move |action: BulkAction, ids: Vec<OrderId>| {
        if ids.is_empty() || !bulk.try_update(|m| m.try_begin()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result: Result<u64, ApiError> = match action {
                BulkAction::Duplicate => controller.bulk_duplicate(ids).await,
                BulkAction::Delete => controller.bulk_delete(ids).await,
                BulkAction::Status(status) => controller.bulk_update_status(ids, status).await,
            };
            match result {
                Ok(count) => {
                    log::info!("bulk action affected {} orders", count);
                    bulk.try_update(|m| m.succeed());
                }
                Err(e) => {
                    bulk.try_update(|m| m.fail(e.to_string()));
                }
            }
        });
    };

    let duplicate_row = move |id: OrderId| {
        if !bulk.try_update(|m| m.try_begin()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            match controller.duplicate_order(id).await {
                Ok(_) => {
                    bulk.try_update(|m| m.succeed());
                }
                Err(e) => {
                    bulk.try_update(|m| m.fail(e.to_string()));
                }
            }
        });
    };

    let on_tab_change = Callback::new(move |tab| {
        spawn_local(async move { controller.change_tab(tab).await });
    });
    let on_page_change = Callback::new(move |page| {
        spawn_local(async move { controller.go_to_page(page).await });
    });
    let close_modal = Callback::new(move |_| modal.set(None));

    let export = move |_| {
        let filename = format!("orders_{}.csv", chrono::Local::now().format("%Y%m%d_%H%M%S"));
        if let Err(e) = export_to_csv(&visible_orders.get_untracked(), &filename) {
            log::error!("Failed to export orders: {}", e);
        }
    };

    let header_cells = move || {
        OrderSortKey::all()
            .into_iter()
            .map(|key| {
                view! {
                    <th
                        class="table__header-cell table__header-cell--sortable"
                        on:click=move |_| sort.update(|s| *s = s.toggle(key))
                    >
                        {key.label()}
                        <span class=move || get_sort_class(sort.with(|s| s.is_active(key)))>
                            {move || {
                                let s = sort.get();
                                get_sort_indicator(s.is_active(key), s.is_ascending())
                            }}
                        </span>
                    </th>
                }
            })
            .collect_view()
    };

    let body = move || {
        if state.with(|s| s.is_loading) {
            return view! {
                <tr>
                    <td class="table__cell table__cell--placeholder" colspan=COLUMN_COUNT>
                        <div class="spinner" aria-label="Loading"></div>
                    </td>
                </tr>
            }
            .into_any();
        }
        let orders = visible_orders.get();
        if orders.is_empty() {
            return view! {
                <tr>
                    <td class="table__cell table__cell--placeholder" colspan=COLUMN_COUNT>
                        "No orders found"
                    </td>
                </tr>
            }
            .into_any();
        }
        orders
            .into_iter()
            .map(|order| {
                let id = order.id;
                view! {
                    <OrderRow
                        order=order
                        selected=Signal::derive(move || state.with(|s| s.is_selected(id)))
                        on_toggle=Callback::new(move |_| controller.toggle_select(id))
                        on_view=Callback::new(move |id| modal.set(Some(ActiveModal::Details(id))))
                        on_duplicate=Callback::new(duplicate_row)
                        on_delete=Callback::new(move |order| modal.set(Some(ActiveModal::Delete(order))))
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">"Orders"</h1>
                </div>
                <div class="page__header-right">
                    <Button variant="secondary" on_click=Callback::new(export)>
                        {icon("download")}
                        " Export Orders"
                    </Button>
                    <Button on_click=Callback::new(move |_| modal.set(Some(ActiveModal::Create)))>
                        {icon("plus")}
                        " Add Orders"
                    </Button>
                </div>
            </div>

            <OrderStatsCards stats=Signal::derive(move || state.with(|s| s.stats)) />

            <div class="page__content">
                <div class="orders-toolbar">
                    <OrderFilterTabs
                        active=Signal::derive(move || state.with(|s| s.active_tab))
                        on_change=on_tab_change
                    />
                    <div class="orders-toolbar__right">
                        <Button variant="ghost" size="icon" title="Refresh" on_click=Callback::new(move |_| reload())>
                            {icon("refresh")}
                        </Button>
                        <BulkStatusDropdown
                            disabled=Signal::derive(move || selected_count.get() == 0 || bulk_busy.get())
                            on_select=Callback::new(move |status| {
                                run_bulk(BulkAction::Status(status), controller.selected_ids())
                            })
                        />
                    </div>
                </div>

                <BulkActionBar
                    count=selected_count
                    busy=bulk_busy
                    on_duplicate=Callback::new(move |_| {
                        run_bulk(BulkAction::Duplicate, controller.selected_ids())
                    })
                    on_delete=Callback::new(move |_| {
                        run_bulk(BulkAction::Delete, controller.selected_ids())
                    })
                    on_clear=Callback::new(move |_| controller.clear_selection())
                />

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <TableCheckbox
                                    header=true
                                    checked=Signal::derive(move || state.with(|s| s.all_selected()))
                                    on_toggle=Callback::new(move |_| controller.toggle_select_all())
                                />
                                {header_cells()}
                                <th class="table__header-cell">"Action"</th>
                            </tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=ORDERS_PAGE_SIZE
                    on_page_change=on_page_change
                />
            </div>

            {move || {
                modal
                    .get()
                    .map(|active| match active {
                        ActiveModal::Create => {
                            view! { <CreateOrderModal controller=controller on_close=close_modal /> }
                                .into_any()
                        }
                        ActiveModal::Details(id) => {
                            view! { <OrderDetailsModal id=id controller=controller on_close=close_modal /> }
                                .into_any()
                        }
                        ActiveModal::Delete(order) => {
                            view! { <DeleteOrderModal order=order controller=controller on_close=close_modal /> }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::state::tests::order;
    use super::*;
    use crate::shared::export::build_csv;

    #[test]
    fn csv_export_uses_display_formats() {
        let csv = build_csv(&[order(7, "Jane Cooper", 1234.5)]);
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();

        assert_eq!(
            lines[0],
            "Order Number;Customer Name;Email;Order Date;Status;Total Amount;Payment Status"
        );
        assert_eq!(
            lines[1],
            "#ORD1007;Jane Cooper;jane.cooper@example.com;8 Mar 2024;Pending;$1234.50;Unpaid"
        );
    }
}
