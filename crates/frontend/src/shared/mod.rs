pub mod api;
pub mod csrf;
pub mod dom;
pub mod error;
pub mod modal;
pub mod toast;
