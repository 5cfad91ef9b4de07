pub mod pagination_controls;
pub mod stat_card;
pub mod table_checkbox;
pub mod ui;
