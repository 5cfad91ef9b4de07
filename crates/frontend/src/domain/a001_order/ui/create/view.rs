use super::view_model::CreateOrderViewModel;
use crate::domain::a001_order::ui::list::PageController;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::{min_order_date, today};
use crate::shared::modal::Modal;
use leptos::prelude::*;

#[component]
pub fn CreateOrderModal(controller: PageController, on_close: Callback<()>) -> impl IntoView {
    let vm = CreateOrderViewModel::new();
    let min_date = min_order_date(today()).format("%Y-%m-%d").to_string();

    view! {
        <Modal title="Add Order" on_close=on_close class="modal--form">
            <form
                class="details-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_command(controller, on_close);
                }
            >
                {move || {
                    vm.mutation
                        .with(|m| m.error().map(str::to_string))
                        .map(|e| view! { <div class="warning-box warning-box--error">{e}</div> })
                }}

                <div class="form-group">
                    <label for="customer_name">"Customer Name"</label>
                    <input
                        type="text"
                        id="customer_name"
                        required
                        placeholder="Jane Cooper"
                        prop:value=move || vm.form.with(|f| f.customer_name.clone())
                        on:input=move |ev| vm.form.update(|f| f.customer_name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="customer_email">"Customer Email"</label>
                    <input
                        type="email"
                        id="customer_email"
                        required
                        placeholder="jane@example.com"
                        prop:value=move || vm.form.with(|f| f.customer_email.clone())
                        on:input=move |ev| vm.form.update(|f| f.customer_email = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="total_amount">"Total Amount ($)"</label>
                        <input
                            type="number"
                            id="total_amount"
                            required
                            min="0"
                            step="0.01"
                            placeholder="0.00"
                            prop:value=move || vm.form.with(|f| f.total_amount.clone())
                            on:input=move |ev| vm.form.update(|f| f.total_amount = event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="order_date">"Order Date"</label>
                        <input
                            type="date"
                            id="order_date"
                            required
                            min=min_date
                            prop:value=move || vm.form.with(|f| f.order_date.clone())
                            on:input=move |ev| vm.form.update(|f| f.order_date = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="form-actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                        "Cancel"
                    </Button>
                    <Button
                        button_type="submit"
                        disabled=Signal::derive(move || vm.is_submitting())
                    >
                        {move || if vm.is_submitting() { "Creating..." } else { "Create Order" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
