mod request_code_test;
mod update_phone_test;
