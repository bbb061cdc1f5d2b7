mod common;
mod form_page;
mod invalid_json;
mod missing_address;
mod review_ok;
mod upstream_error;
