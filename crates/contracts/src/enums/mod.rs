pub mod order_filter_tab;

pub use order_filter_tab::OrderFilterTab;
