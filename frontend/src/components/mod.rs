pub mod error_alert;
pub mod route_guard;
pub mod spinner;
