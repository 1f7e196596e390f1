use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error codes for the span system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[repr(i32)]
pub enum ErrCode {
    // Input errors (0-99)
    #[strum(serialize = "_INPUT_ERR_BEGIN")]
    InputErrBegin = 0,
    #[strum(serialize = "INVALID_INPUT")]
    InvalidInput = 1,
    #[strum(serialize = "TOO_MANY_INPUTS")]
    TooManyInputs = 2,
    #[strum(serialize = "_INPUT_ERR_END")]
    InputErrEnd = 99,

    // Parameter errors (100-199)
    #[strum(serialize = "_PARA_ERR_BEGIN")]
    ParaErrBegin = 100,
    #[strum(serialize = "PARA_ERROR")]
    ParaError = 101,
    #[strum(serialize = "_PARA_ERR_END")]
    ParaErrEnd = 199,

    // Source data errors (200-299)
    #[strum(serialize = "_SRC_ERR_BEGIN")]
    SrcErrBegin = 200,
    #[strum(serialize = "SRC_DATA_NOT_FOUND")]
    SrcDataNotFound = 201,
    #[strum(serialize = "SRC_DATA_FORMAT_ERROR")]
    SrcDataFormatError = 202,
    #[strum(serialize = "_SRC_ERR_END")]
    SrcErrEnd = 299,
}

impl ErrCode {
    pub fn is_input_err(&self) -> bool {
        let code = *self as i32;
        code > Self::InputErrBegin as i32 && code < Self::InputErrEnd as i32
    }

    pub fn is_para_err(&self) -> bool {
        let code = *self as i32;
        code > Self::ParaErrBegin as i32 && code < Self::ParaErrEnd as i32
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{errcode}: {msg}")]
pub struct SpanError {
    pub errcode: ErrCode,
    pub msg: String,
}

impl SpanError {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            errcode: code,
            msg: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(message, ErrCode::InvalidInput)
    }

    pub fn too_many_inputs(message: impl Into<String>) -> Self {
        Self::new(message, ErrCode::TooManyInputs)
    }

    pub fn is_input_err(&self) -> bool {
        self.errcode.is_input_err()
    }

    pub fn is_para_err(&self) -> bool {
        self.errcode.is_para_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_includes_code() {
        let err = SpanError::invalid_input("no prices provided");
        assert_eq!(err.to_string(), "INVALID_INPUT: no prices provided");

        let err = SpanError::too_many_inputs("101 prices given, maximum is 100");
        assert_eq!(err.to_string(), "TOO_MANY_INPUTS: 101 prices given, maximum is 100");
    }

    #[test]
    fn test_code_ranges() {
        assert!(ErrCode::InvalidInput.is_input_err());
        assert!(ErrCode::TooManyInputs.is_input_err());
        assert!(!ErrCode::InputErrBegin.is_input_err());
        assert!(ErrCode::ParaError.is_para_err());
        assert!(!ErrCode::ParaError.is_input_err());
        assert!(!ErrCode::SrcDataFormatError.is_para_err());
    }

    #[test]
    fn test_code_from_str() {
        assert_eq!(ErrCode::from_str("TOO_MANY_INPUTS"), Ok(ErrCode::TooManyInputs));
        assert!(ErrCode::from_str("NOT_A_CODE").is_err());
    }
}
