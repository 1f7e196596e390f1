use crate::common::span_exception::SpanError;

/// Check if a value is usable as a price observation
pub fn is_valid_price(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Validate the price at 0-based index `idx`
pub fn check_price(idx: usize, v: f64) -> Result<(), SpanError> {
    if is_valid_price(v) {
        Ok(())
    } else {
        Err(SpanError::invalid_input(format!(
            "price #{} must be a finite number greater than zero, got {}",
            idx + 1,
            v
        )))
    }
}

/// Convert string to float, None if it is not a number
pub fn str2float(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}
