pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod dropdown;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod mutation;
