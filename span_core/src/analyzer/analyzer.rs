use crate::common::span_exception::SpanError;
use crate::config::span_config::SpanConfig;
use crate::parser::price_parser::parse_prices;
use crate::report::span_report::SpanReport;
use crate::span::{span_calculator::SpanCalculator, span_result::SpanResult};

/// Demo price series used by the `--sample` mode
pub const SAMPLE_PRICES: [f64; 7] = [100.0, 80.0, 60.0, 70.0, 60.0, 75.0, 85.0];

/// Runs parse, span calculation and reporting with one configuration
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    calculator: SpanCalculator,
}

impl Analyzer {
    pub fn new(config: SpanConfig) -> Self {
        Self {
            calculator: SpanCalculator::new(config),
        }
    }

    pub fn config(&self) -> &SpanConfig {
        self.calculator.config()
    }

    pub fn calculate(&self, prices: &[f64]) -> Result<SpanResult, SpanError> {
        self.calculator.calculate(prices)
    }

    pub fn analyze_prices(&self, prices: &[f64]) -> Result<SpanReport, SpanError> {
        let result = self.calculate(prices)?;
        Ok(SpanReport::from_result(
            &result,
            &self.config().trend_thresholds,
        ))
    }

    pub fn analyze_text(&self, text: &str) -> Result<SpanReport, SpanError> {
        let prices = parse_prices(text, self.config().max_prices)?;
        self.analyze_prices(&prices)
    }

    pub fn analyze_sample(&self) -> Result<SpanReport, SpanError> {
        self.analyze_prices(&SAMPLE_PRICES)
    }
}
