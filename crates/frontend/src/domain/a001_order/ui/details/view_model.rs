use crate::domain::a001_order::api::OrdersApi;
use crate::domain::a001_order::ui::list::PageController;
use crate::shared::mutation::MutationState;
use contracts::domain::a001_order::{Order, OrderId, OrderStatus, PaymentStatus, UpdateOrderDto};
use leptos::prelude::*;

pub const LOAD_ERROR_MESSAGE: &str = "Failed to load order details.";

/// Editable part of an order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditOrderForm {
    pub status: Option<OrderStatus>,
    pub payment_status: PaymentStatus,
}

impl EditOrderForm {
    pub fn from_order(order: &Order) -> Self {
        Self {
            status: Some(order.status.clone()),
            payment_status: order.payment_status.clone(),
        }
    }

    /// Body of `PUT /orders/{id}`: status and payment status only
    pub fn patch(&self) -> UpdateOrderDto {
        UpdateOrderDto {
            status: self.status.clone(),
            payment_status: Some(self.payment_status.clone()),
            ..Default::default()
        }
    }

    pub fn differs_from(&self, order: &Order) -> bool {
        *self != EditOrderForm::from_order(order)
    }
}

/// Status choices for the select; an unknown current status stays selectable
pub fn status_options(current: Option<&OrderStatus>) -> Vec<OrderStatus> {
    let mut options = OrderStatus::all();
    if let Some(status) = current {
        if !options.contains(status) {
            options.push(status.clone());
        }
    }
    options
}

/// Payment choices for the select; an unknown current value stays selectable
pub fn payment_options(current: &PaymentStatus) -> Vec<PaymentStatus> {
    let mut options = PaymentStatus::all();
    if !options.contains(current) {
        options.push(current.clone());
    }
    options
}

#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub order: RwSignal<Option<Order>>,
    pub form: RwSignal<EditOrderForm>,
    pub load_error: RwSignal<Option<String>>,
    pub mutation: RwSignal<MutationState>,
}

impl OrderDetailsViewModel {
    pub fn new() -> Self {
        Self {
            order: RwSignal::new(None),
            form: RwSignal::new(EditOrderForm::default()),
            load_error: RwSignal::new(None),
            mutation: RwSignal::new(MutationState::default()),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.order.with(Option::is_none) && self.load_error.with(Option::is_none)
    }

    pub fn is_submitting(&self) -> bool {
        self.mutation.with(|m| m.is_submitting())
    }

    pub fn load(&self, id: OrderId, controller: PageController) {
        let api = *controller.api();
        let order = self.order;
        let form = self.form;
        let load_error = self.load_error;
        wasm_bindgen_futures::spawn_local(async move {
            match api.get_order(id).await {
                Ok(loaded) => {
                    form.try_set(EditOrderForm::from_order(&loaded));
                    order.try_set(Some(loaded));
                }
                Err(e) => {
                    log::error!("Failed to load order {}: {}", id, e);
                    load_error.try_set(Some(LOAD_ERROR_MESSAGE.to_string()));
                }
            }
        });
    }

    pub fn save_command(&self, id: OrderId, controller: PageController, on_saved: Callback<()>) {
        let patch = self.form.with_untracked(|f| f.patch());
        if !self.mutation.try_update(|m| m.try_begin()).unwrap_or(false) {
            return;
        }

        let mutation = self.mutation;
        wasm_bindgen_futures::spawn_local(async move {
            match controller.edit_order(id, patch).await {
                Ok(_) => {
                    mutation.try_update(|m| m.succeed());
                    on_saved.run(());
                }
                Err(e) => {
                    mutation.try_update(|m| m.fail(e.to_string()));
                }
            }
        });
    }
}

impl Default for OrderDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::ui::list::state::tests::order;
    use serde_json::json;

    #[test]
    fn patch_carries_only_editable_fields() {
        let mut form = EditOrderForm::from_order(&order(1, "Jane Cooper", 10.0));
        form.status = Some(OrderStatus::Completed);
        form.payment_status = PaymentStatus::Paid;

        assert_eq!(
            serde_json::to_value(form.patch()).unwrap(),
            json!({ "status": "completed", "payment_status": "paid" })
        );
    }

    #[test]
    fn untouched_form_is_not_dirty() {
        let original = order(1, "Jane Cooper", 10.0);
        let mut form = EditOrderForm::from_order(&original);
        assert!(!form.differs_from(&original));

        form.payment_status = PaymentStatus::Paid;
        assert!(form.differs_from(&original));
    }

    #[test]
    fn unknown_status_is_kept_as_an_option() {
        let on_hold = OrderStatus::Other("on_hold".to_string());
        let options = status_options(Some(&on_hold));
        assert_eq!(options.len(), 4);
        assert_eq!(options.last(), Some(&on_hold));

        assert_eq!(status_options(Some(&OrderStatus::Refunded)).len(), 3);
    }

    #[test]
    fn unknown_payment_status_survives_an_untouched_edit() {
        let mut original = order(1, "Jane Cooper", 10.0);
        original.payment_status = PaymentStatus::Other("partial".to_string());
        let form = EditOrderForm::from_order(&original);

        assert_eq!(payment_options(&form.payment_status).len(), 3);
        assert_eq!(
            serde_json::to_value(form.patch()).unwrap(),
            json!({ "status": "pending", "payment_status": "partial" })
        );
    }
}
