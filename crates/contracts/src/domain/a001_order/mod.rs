pub mod aggregate;
pub mod dto;

pub use aggregate::{Order, OrderCustomer, OrderId, OrderStatus, PaymentStatus};
pub use dto::*;
