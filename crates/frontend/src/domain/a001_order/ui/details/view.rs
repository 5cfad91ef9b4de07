use super::view_model::{payment_options, status_options, OrderDetailsViewModel};
use crate::domain::a001_order::ui::list::row::format_amount;
use crate::domain::a001_order::ui::list::PageController;
use crate::shared::components::ui::badge::status_variant;
use crate::shared::components::ui::{Avatar, Badge, Button};
use crate::shared::date_utils::{format_order_date, format_timestamp};
use crate::shared::modal::Modal;
use contracts::domain::a001_order::{Order, OrderId, OrderStatus, PaymentStatus};
use leptos::prelude::*;

#[component]
pub fn OrderDetailsModal(
    id: OrderId,
    controller: PageController,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = OrderDetailsViewModel::new();
    vm.load(id, controller);

    let content = move || {
        if let Some(message) = vm.load_error.get() {
            return view! {
                <div class="warning-box warning-box--error">{message}</div>
                <div class="form-actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                        "Close"
                    </Button>
                </div>
            }
            .into_any();
        }
        match vm.order.get() {
            None => view! { <div class="spinner" aria-label="Loading"></div> }.into_any(),
            Some(order) => view! {
                <OrderSummary order=order />
                <EditForm vm=vm />
                <div class="form-actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                        "Cancel"
                    </Button>
                    <Button
                        disabled=Signal::derive(move || vm.is_submitting())
                        on_click=Callback::new(move |_| vm.save_command(id, controller, on_close))
                    >
                        {move || if vm.is_submitting() { "Saving..." } else { "Save Changes" }}
                    </Button>
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <Modal title="Order Details" on_close=on_close class="modal--details">
            {content}
        </Modal>
    }
}

#[component]
fn OrderSummary(order: Order) -> impl IntoView {
    view! {
        <div class="order-summary">
            <div class="order-summary__customer">
                <Avatar name=order.customer.name.clone() size="lg" />
                <div>
                    <div class="order-summary__name">{order.customer.name.clone()}</div>
                    <div class="order-summary__email">{order.customer.email.clone()}</div>
                </div>
            </div>
            <dl class="order-summary__grid">
                <dt>"Order Number"</dt>
                <dd>{order.order_number.clone()}</dd>
                <dt>"Order Date"</dt>
                <dd>{format_order_date(order.order_date)}</dd>
                <dt>"Status"</dt>
                <dd>
                    <Badge variant=status_variant(&order.status)>{order.status.label().to_string()}</Badge>
                </dd>
                <dt>"Total Amount"</dt>
                <dd>{format_amount(order.total_amount)}</dd>
                <dt>"Created"</dt>
                <dd>{format_timestamp(&order.created_at)}</dd>
                <dt>"Updated"</dt>
                <dd>{format_timestamp(&order.updated_at)}</dd>
            </dl>
        </div>
    }
}

#[component]
fn EditForm(vm: OrderDetailsViewModel) -> impl IntoView {
    let current_status = move || {
        vm.form
            .with(|f| f.status.as_ref().map(|s| s.as_str().to_string()))
            .unwrap_or_default()
    };

    view! {
        <div class="details-form">
            {move || {
                vm.mutation
                    .with(|m| m.error().map(str::to_string))
                    .map(|e| view! { <div class="warning-box warning-box--error">{e}</div> })
            }}
            <div class="form-row">
                <div class="form-group">
                    <label for="order_status">"Status"</label>
                    <select
                        id="order_status"
                        prop:value=current_status
                        on:change=move |ev| {
                            let status = OrderStatus::from(event_target_value(&ev));
                            vm.form.update(|f| f.status = Some(status));
                        }
                    >
                        {move || {
                            let current = vm.form.with(|f| f.status.clone());
                            status_options(current.as_ref())
                                .into_iter()
                                .map(|status| {
                                    let selected = current.as_ref() == Some(&status);
                                    view! {
                                        <option value=status.as_str().to_string() selected=selected>
                                            {status.label().to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <div class="form-group">
                    <label for="payment_status">"Payment Status"</label>
                    <select
                        id="payment_status"
                        prop:value=move || vm.form.with(|f| f.payment_status.as_str().to_string())
                        on:change=move |ev| {
                            let payment = PaymentStatus::from(event_target_value(&ev));
                            vm.form.update(|f| f.payment_status = payment);
                        }
                    >
                        {move || {
                            let current = vm.form.with(|f| f.payment_status.clone());
                            payment_options(&current)
                                .into_iter()
                                .map(|payment| {
                                    let selected = payment == current;
                                    view! {
                                        <option value=payment.as_str().to_string() selected=selected>
                                            {payment.label().to_string()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>
        </div>
    }
}
