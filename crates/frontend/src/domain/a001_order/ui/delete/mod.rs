use crate::domain::a001_order::ui::list::PageController;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::mutation::MutationState;
use contracts::domain::a001_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Confirm dialog for deleting one order. Closes only after a successful delete.
#[component]
pub fn DeleteOrderModal(
    order: Order,
    controller: PageController,
    on_close: Callback<()>,
) -> impl IntoView {
    let mutation = RwSignal::new(MutationState::default());
    let id = order.id;
    let submitting = Signal::derive(move || mutation.with(|m| m.is_submitting()));

    let confirm = move |_| {
        if !mutation.try_update(|m| m.try_begin()).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            match controller.delete_order(id).await {
                Ok(()) => {
                    mutation.try_update(|m| m.succeed());
                    on_close.run(());
                }
                Err(e) => {
                    mutation.try_update(|m| m.fail(e.to_string()));
                }
            }
        });
    };

    view! {
        <Modal title="Delete Order" on_close=on_close class="modal--confirm">
            <div class="confirm-dialog">
                <div class="confirm-dialog__icon">{icon("alert-triangle")}</div>
                <p class="confirm-dialog__text">
                    "Are you sure you want to delete order "
                    <strong>{order.order_number.clone()}</strong>
                    "? This action cannot be undone."
                </p>
            </div>
            <div class="form-actions">
                <Button
                    variant="secondary"
                    disabled=submitting
                    on_click=Callback::new(move |_| on_close.run(()))
                >
                    "Cancel"
                </Button>
                <Button variant="danger" disabled=submitting on_click=Callback::new(confirm)>
                    {move || if submitting.get() { "Deleting..." } else { "Delete" }}
                </Button>
            </div>
        </Modal>
    }
}
