pub mod login_code;
pub mod phone;
pub mod session;
