pub mod dashboard;
pub mod email;
pub mod not_found;
pub mod otp;
