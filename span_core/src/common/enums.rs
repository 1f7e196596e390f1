use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Qualitative reading of a span value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpanTrend {
    StrongBullish,
    Bullish,
    Neutral,
    Bearish,
}

impl SpanTrend {
    /// Bucket a span using the given thresholds, strongest first
    pub fn classify(span: usize, thresholds: &TrendThresholds) -> Self {
        if span >= thresholds.strong_bullish {
            Self::StrongBullish
        } else if span >= thresholds.bullish {
            Self::Bullish
        } else if span >= thresholds.neutral {
            Self::Neutral
        } else {
            Self::Bearish
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongBullish => "Strong Bullish",
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
        }
    }
}

/// Minimum span for each trend bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendThresholds {
    pub strong_bullish: usize,
    pub bullish: usize,
    pub neutral: usize,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            strong_bullish: 5,
            bullish: 3,
            neutral: 2,
        }
    }
}
