pub mod api_client;
pub mod api_utils;
pub mod confirm;
pub mod date_utils;
pub mod error;
pub mod icons;
pub mod modal;
pub mod notify;
