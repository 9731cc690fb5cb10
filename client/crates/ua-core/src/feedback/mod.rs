pub mod api_failure;
pub mod error_slot;
pub mod field_errors;
pub mod form;
