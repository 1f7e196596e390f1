use crate::common::{
    span_exception::SpanError,
    utils::{is_valid_price, str2float},
};

/// Parse comma-separated prices such as `"100, 80, 60"`.
///
/// Every token must be a finite number greater than zero and at most
/// `max_prices` tokens are accepted. Tokens are parsed whole, so `12abc` is
/// rejected rather than read as 12.
pub fn parse_prices(text: &str, max_prices: usize) -> Result<Vec<f64>, SpanError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SpanError::invalid_input("no prices provided"));
    }

    let tokens: Vec<&str> = text.split(',').map(str::trim).collect();
    if tokens.len() > max_prices {
        return Err(SpanError::too_many_inputs(format!(
            "{} prices given, maximum is {}",
            tokens.len(),
            max_prices
        )));
    }

    tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| parse_token(idx, token))
        .collect()
}

fn parse_token(idx: usize, token: &str) -> Result<f64, SpanError> {
    if token.is_empty() {
        return Err(SpanError::invalid_input(format!("price #{} is empty", idx + 1)));
    }
    match str2float(token) {
        Some(v) if is_valid_price(v) => Ok(v),
        Some(_) => Err(SpanError::invalid_input(format!(
            "price #{} must be a finite number greater than zero, got '{}'",
            idx + 1,
            token
        ))),
        None => Err(SpanError::invalid_input(format!(
            "price #{} is not a number: '{}'",
            idx + 1,
            token
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::span_exception::ErrCode;

    #[test]
    fn test_parse_trims_tokens() {
        let prices = parse_prices(" 100, 80 ,60,70.5 ", 100).unwrap();
        assert_eq!(prices, vec![100.0, 80.0, 60.0, 70.5]);
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(parse_prices("42", 100).unwrap(), vec![42.0]);
    }

    #[test]
    fn test_parse_empty() {
        for text in ["", "   ", "\n"] {
            let err = parse_prices(text, 100).unwrap_err();
            assert_eq!(err.errcode, ErrCode::InvalidInput);
        }
    }

    #[test]
    fn test_parse_bad_tokens() {
        let err = parse_prices("10, -5, 20", 100).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidInput);
        assert!(err.msg.contains("#2"));

        let err = parse_prices("10, abc", 100).unwrap_err();
        assert!(err.msg.contains("not a number"));

        let err = parse_prices("12abc", 100).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidInput);

        let err = parse_prices("1,,2", 100).unwrap_err();
        assert!(err.msg.contains("empty"));

        let err = parse_prices("1, 0", 100).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidInput);

        let err = parse_prices("1, inf", 100).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidInput);

        let err = parse_prices("NaN", 100).unwrap_err();
        assert_eq!(err.errcode, ErrCode::InvalidInput);
    }

    #[test]
    fn test_parse_limit() {
        let text = vec!["1"; 101].join(",");
        let err = parse_prices(&text, 100).unwrap_err();
        assert_eq!(err.errcode, ErrCode::TooManyInputs);

        let text = vec!["1"; 100].join(",");
        assert_eq!(parse_prices(&text, 100).unwrap().len(), 100);
    }
}
