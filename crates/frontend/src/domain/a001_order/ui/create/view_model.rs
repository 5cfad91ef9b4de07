use crate::domain::a001_order::ui::list::PageController;
use crate::shared::date_utils::{min_order_date, today};
use crate::shared::mutation::MutationState;
use chrono::NaiveDate;
use contracts::domain::a001_order::{CreateCustomerDto, CreateOrderDto, OrderStatus, PaymentStatus};
use leptos::prelude::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw input of the create form, as typed
#[derive(Clone, Debug, PartialEq)]
pub struct CreateOrderForm {
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`
    pub order_date: String,
}

impl CreateOrderForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            customer_name: String::new(),
            customer_email: String::new(),
            total_amount: String::new(),
            order_date: min_order_date(today).format(DATE_FORMAT).to_string(),
        }
    }

    /// Validate and build the request body. New orders always start pending and unpaid.
    pub fn to_dto(&self, today: NaiveDate) -> Result<CreateOrderDto, String> {
        let name = self.customer_name.trim();
        if name.is_empty() {
            return Err("Customer name is required".to_string());
        }

        let email = self.customer_email.trim();
        if email.is_empty() {
            return Err("Customer email is required".to_string());
        }
        if !email.contains('@') {
            return Err("Enter a valid email address".to_string());
        }

        let total_amount = self
            .total_amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| "Total amount must be a number".to_string())?;
        if total_amount < 0.0 {
            return Err("Total amount cannot be negative".to_string());
        }

        let order_date = NaiveDate::parse_from_str(self.order_date.trim(), DATE_FORMAT)
            .map_err(|_| "Enter a valid order date".to_string())?;
        if order_date < min_order_date(today) {
            return Err("Order date must be later than today".to_string());
        }

        Ok(CreateOrderDto {
            customer: CreateCustomerDto {
                name: name.to_string(),
                email: email.to_string(),
            },
            total_amount,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            order_date,
        })
    }
}

#[derive(Clone, Copy)]
pub struct CreateOrderViewModel {
    pub form: RwSignal<CreateOrderForm>,
    pub mutation: RwSignal<MutationState>,
}

impl CreateOrderViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CreateOrderForm::new(today())),
            mutation: RwSignal::new(MutationState::default()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.mutation.with(|m| m.is_submitting())
    }

    /// Validate, send, and call `on_created` once the order exists and the list reloaded.
    /// On failure the message stays in `mutation` and the modal stays open.
    pub fn submit_command(&self, controller: PageController, on_created: Callback<()>) {
        if self.mutation.with_untracked(|m| m.is_submitting()) {
            return;
        }
        let dto = match self.form.with_untracked(|f| f.to_dto(today())) {
            Ok(dto) => dto,
            Err(message) => {
                self.mutation.update(|m| m.fail(message));
                return;
            }
        };
        if !self.mutation.try_update(|m| m.try_begin()).unwrap_or(false) {
            return;
        }

        let mutation = self.mutation;
        wasm_bindgen_futures::spawn_local(async move {
            match controller.create_order(dto).await {
                Ok(order) => {
                    log::info!("created order {}", order.order_number);
                    mutation.try_update(|m| m.succeed());
                    on_created.run(());
                }
                Err(e) => {
                    mutation.try_update(|m| m.fail(e.to_string()));
                }
            }
        });
    }
}

impl Default for CreateOrderViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn filled() -> CreateOrderForm {
        CreateOrderForm {
            customer_name: "  Jane Cooper ".to_string(),
            customer_email: "jane@example.com".to_string(),
            total_amount: "1234.5".to_string(),
            order_date: "2024-03-20".to_string(),
        }
    }

    #[test]
    fn new_form_defaults_to_tomorrow() {
        assert_eq!(CreateOrderForm::new(today()).order_date, "2024-03-16");
    }

    #[test]
    fn valid_form_builds_pending_unpaid_order() {
        let dto = filled().to_dto(today()).unwrap();
        assert_eq!(dto.customer.name, "Jane Cooper");
        assert_eq!(dto.total_amount, 1234.5);
        assert_eq!(dto.status, OrderStatus::Pending);
        assert_eq!(dto.payment_status, PaymentStatus::Unpaid);
        assert_eq!(dto.order_date, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    }

    #[test]
    fn required_fields_are_checked() {
        let mut form = filled();
        form.customer_name = "   ".to_string();
        assert_eq!(form.to_dto(today()).unwrap_err(), "Customer name is required");

        let mut form = filled();
        form.customer_email = "jane.example.com".to_string();
        assert_eq!(form.to_dto(today()).unwrap_err(), "Enter a valid email address");
    }

    #[test]
    fn amount_must_be_a_non_negative_number() {
        let mut form = filled();
        form.total_amount = "abc".to_string();
        assert_eq!(form.to_dto(today()).unwrap_err(), "Total amount must be a number");

        form.total_amount = "-1".to_string();
        assert_eq!(form.to_dto(today()).unwrap_err(), "Total amount cannot be negative");

        form.total_amount = "0".to_string();
        assert!(form.to_dto(today()).is_ok());
    }

    #[test]
    fn order_date_must_be_after_today() {
        let mut form = filled();
        form.order_date = "2024-03-15".to_string();
        assert_eq!(
            form.to_dto(today()).unwrap_err(),
            "Order date must be later than today"
        );

        form.order_date = "2024-03-16".to_string();
        assert!(form.to_dto(today()).is_ok());

        form.order_date = "16/03/2024".to_string();
        assert_eq!(form.to_dto(today()).unwrap_err(), "Enter a valid order date");
    }
}
