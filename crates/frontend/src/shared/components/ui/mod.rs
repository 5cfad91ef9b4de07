pub mod avatar;
pub mod badge;
pub mod button;

pub use avatar::Avatar;
pub use badge::Badge;
pub use button::Button;
