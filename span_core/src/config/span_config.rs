use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::common::{
    enums::TrendThresholds,
    span_exception::{ErrCode, SpanError},
};

/// Largest price sequence accepted by default
pub const DEFAULT_MAX_PRICES: usize = 100;

/// Span analysis configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SpanConfig {
    pub max_prices: usize,
    pub trend_thresholds: TrendThresholds,
}

impl Default for SpanConfig {
    fn default() -> Self {
        Self {
            max_prices: DEFAULT_MAX_PRICES,
            trend_thresholds: TrendThresholds::default(),
        }
    }
}

impl SpanConfig {
    pub fn new(conf: Option<HashMap<String, serde_json::Value>>) -> Result<Self, SpanError> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());
        let defaults = TrendThresholds::default();

        let config = Self {
            max_prices: conf.get("max_prices")?.unwrap_or(DEFAULT_MAX_PRICES),
            trend_thresholds: TrendThresholds {
                strong_bullish: conf
                    .get("strong_bullish_span")?
                    .unwrap_or(defaults.strong_bullish),
                bullish: conf.get("bullish_span")?.unwrap_or(defaults.bullish),
                neutral: conf.get("neutral_span")?.unwrap_or(defaults.neutral),
            },
        };

        conf.check()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a JSON object of overrides, e.g. `{"max_prices": 50}`
    pub fn from_json_str(s: &str) -> Result<Self, SpanError> {
        let map: HashMap<String, serde_json::Value> = serde_json::from_str(s).map_err(|e| {
            SpanError::new(format!("config is not a JSON object: {}", e), ErrCode::ParaError)
        })?;
        Self::new(Some(map))
    }

    fn validate(&self) -> Result<(), SpanError> {
        if self.max_prices == 0 {
            return Err(SpanError::new("max_prices must be at least 1", ErrCode::ParaError));
        }
        let th = &self.trend_thresholds;
        if th.neutral == 0 {
            return Err(SpanError::new("neutral_span must be at least 1", ErrCode::ParaError));
        }
        if th.strong_bullish < th.bullish || th.bullish < th.neutral {
            return Err(SpanError::new(
                format!(
                    "trend thresholds must satisfy strong_bullish_span({}) >= bullish_span({}) >= neutral_span({})",
                    th.strong_bullish, th.bullish, th.neutral
                ),
                ErrCode::ParaError,
            ));
        }
        Ok(())
    }
}

/// Key/value overrides that must all be consumed
struct ConfigWithCheck {
    conf: HashMap<String, serde_json::Value>,
}

impl ConfigWithCheck {
    fn new(conf: HashMap<String, serde_json::Value>) -> Self {
        Self { conf }
    }

    fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, SpanError> {
        match self.conf.remove(key) {
            None => Ok(None),
            Some(v) => serde_json::from_value(v.clone()).map(Some).map_err(|e| {
                SpanError::new(format!("invalid value {} for {}: {}", v, key, e), ErrCode::ParaError)
            }),
        }
    }

    fn check(&self) -> Result<(), SpanError> {
        let mut keys: Vec<&String> = self.conf.keys().collect();
        if keys.is_empty() {
            return Ok(());
        }
        keys.sort();
        Err(SpanError::new(
            format!(
                "unknown para = {}",
                keys.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", ")
            ),
            ErrCode::ParaError,
        ))
    }
}
