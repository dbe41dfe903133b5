pub mod login_codes;
