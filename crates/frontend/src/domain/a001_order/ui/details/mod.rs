//! Order details / edit modal
//!
//! - view_model.rs: load and save commands, edit form
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::OrderDetailsModal;
pub use view_model::{EditOrderForm, OrderDetailsViewModel};
