use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::components::ui::badge::status_variant;
use crate::shared::components::ui::{Avatar, Badge, Button};
use crate::shared::date_utils::format_order_date;
use crate::shared::dropdown::Dropdown;
use crate::shared::icons::icon;
use contracts::domain::a001_order::{Order, OrderId, PaymentStatus};
use leptos::prelude::*;

/// `$1234.50`
pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn payment_variant(status: &PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "success",
        PaymentStatus::Unpaid | PaymentStatus::Other(_) => "neutral",
    }
}

#[component]
pub fn OrderRow(
    order: Order,
    #[prop(into)] selected: Signal<bool>,
    on_toggle: Callback<()>,
    on_view: Callback<OrderId>,
    on_duplicate: Callback<OrderId>,
    on_delete: Callback<Order>,
) -> impl IntoView {
    let id = order.id;
    let menu_open = RwSignal::new(false);
    let order_for_delete = StoredValue::new(order.clone());

    view! {
        <tr class="table__row" class:table__row--selected=move || selected.get()>
            <TableCheckbox checked=selected on_toggle=on_toggle />
            <td class="table__cell table__cell--mono">{order.order_number.clone()}</td>
            <td class="table__cell">
                <div class="customer-cell">
                    <Avatar name=order.customer.name.clone() />
                    <div class="customer-cell__text">
                        <span class="customer-cell__name">{order.customer.name.clone()}</span>
                        <span class="customer-cell__email">{order.customer.email.clone()}</span>
                    </div>
                </div>
            </td>
            <td class="table__cell">{format_order_date(order.order_date)}</td>
            <td class="table__cell">
                <Badge variant=status_variant(&order.status)>{order.status.label().to_string()}</Badge>
            </td>
            <td class="table__cell table__cell--number">{format_amount(order.total_amount)}</td>
            <td class="table__cell">
                <Badge variant=payment_variant(&order.payment_status)>
                    {order.payment_status.label().to_string()}
                </Badge>
            </td>
            <td class="table__cell table__cell--actions">
                <Dropdown
                    open=menu_open
                    class="row-menu"
                    trigger=move || view! {
                        <Button
                            variant="ghost"
                            size="icon"
                            title="Actions"
                            on_click=Callback::new(move |_| menu_open.update(|open| *open = !*open))
                        >
                            {icon("more-vertical")}
                        </Button>
                    }
                >
                    <button
                        class="dropdown__item"
                        on:click=move |_| {
                            menu_open.set(false);
                            on_view.run(id);
                        }
                    >
                        {icon("eye")}
                        " View details"
                    </button>
                    <button
                        class="dropdown__item"
                        on:click=move |_| {
                            menu_open.set(false);
                            on_duplicate.run(id);
                        }
                    >
                        {icon("copy")}
                        " Duplicate order"
                    </button>
                    <button
                        class="dropdown__item dropdown__item--danger"
                        on:click=move |_| {
                            menu_open.set(false);
                            on_delete.run(order_for_delete.get_value());
                        }
                    >
                        {icon("trash")}
                        " Delete order"
                    </button>
                </Dropdown>
            </td>
        </tr>
    }
}
