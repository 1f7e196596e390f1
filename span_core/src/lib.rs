pub mod analyzer;
pub mod common;
pub mod config;
pub mod parser;
pub mod report;
pub mod span;

pub use analyzer::analyzer::{Analyzer, SAMPLE_PRICES};
pub use common::enums::{SpanTrend, TrendThresholds};
pub use common::span_exception::{ErrCode, SpanError};
pub use config::span_config::{SpanConfig, DEFAULT_MAX_PRICES};
pub use parser::price_parser::parse_prices;
pub use report::span_report::{SpanReport, SpanRow, SpanSummary};
pub use span::span_calculator::{compute_spans, SpanCalculator};
pub use span::span_result::SpanResult;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_public_types_are_send_sync() {
        assert_send_sync::<SpanCalculator>();
        assert_send_sync::<SpanResult>();
        assert_send_sync::<SpanReport>();
        assert_send_sync::<Analyzer>();
        assert_send_sync::<SpanError>();
    }
}
