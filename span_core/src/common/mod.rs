pub mod enums;
pub mod span_exception;
pub mod utils;
