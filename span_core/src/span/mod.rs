pub mod span_calculator;
pub mod span_result;
