use serde::Serialize;

use crate::common::{
    enums::{SpanTrend, TrendThresholds},
    span_exception::SpanError,
};
use crate::span::span_result::SpanResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanRow {
    pub day: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub price: f64,
    pub span: usize,
    pub trend: SpanTrend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanSummary {
    pub max_span: usize,
    pub avg_span: f64,
    pub total_days: usize,
}

impl SpanSummary {
    fn from_spans(spans: &[usize]) -> Self {
        let total_days = spans.len();
        let max_span = spans.iter().copied().max().unwrap_or(0);
        let avg_span = if total_days == 0 {
            0.0
        } else {
            spans.iter().sum::<usize>() as f64 / total_days as f64
        };
        Self {
            max_span,
            avg_span,
            total_days,
        }
    }
}

/// Per-day rows with trend buckets plus summary statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanReport {
    pub rows: Vec<SpanRow>,
    pub summary: SpanSummary,
}

impl SpanReport {
    pub fn from_result(result: &SpanResult, thresholds: &TrendThresholds) -> Self {
        let rows = result
            .iter()
            .map(|(day, price, span)| SpanRow {
                day,
                label: None,
                price,
                span,
                trend: SpanTrend::classify(span, thresholds),
            })
            .collect();

        Self {
            rows,
            summary: SpanSummary::from_spans(result.spans()),
        }
    }

    /// Attach a display label (e.g. a date) to each row, in day order
    pub fn with_labels<I, S>(mut self, labels: I) -> Result<Self, SpanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != self.rows.len() {
            return Err(SpanError::invalid_input(format!(
                "{} labels given for {} rows",
                labels.len(),
                self.rows.len()
            )));
        }
        for (row, label) in self.rows.iter_mut().zip(labels) {
            row.label = Some(label);
        }
        Ok(self)
    }

    pub fn has_labels(&self) -> bool {
        self.rows.iter().any(|r| r.label.is_some())
    }

    pub fn spans(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.span).collect()
    }

    pub fn trends(&self) -> Vec<SpanTrend> {
        self.rows.iter().map(|r| r.trend).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::span_calculator::SpanCalculator;

    fn sample_report() -> SpanReport {
        let result = SpanCalculator::default()
            .calculate(&[100.0, 80.0, 60.0, 70.0, 60.0, 75.0, 85.0])
            .unwrap();
        SpanReport::from_result(&result, &TrendThresholds::default())
    }

    #[test]
    fn test_sample_rows() {
        let report = sample_report();
        assert_eq!(report.rows.len(), 7);
        assert_eq!(report.rows[0].day, 1);
        assert_eq!(report.rows[6].day, 7);
        assert_eq!(report.rows[6].price, 85.0);
        assert_eq!(report.spans(), vec![1, 1, 1, 2, 1, 4, 6]);
        assert_eq!(
            report.trends(),
            vec![
                SpanTrend::Bearish,
                SpanTrend::Bearish,
                SpanTrend::Bearish,
                SpanTrend::Neutral,
                SpanTrend::Bearish,
                SpanTrend::Bullish,
                SpanTrend::StrongBullish,
            ]
        );
    }

    #[test]
    fn test_sample_summary() {
        let summary = sample_report().summary;
        assert_eq!(summary.max_span, 6);
        assert_eq!(summary.total_days, 7);
        assert!((summary.avg_span - 16.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_labels() {
        let report = sample_report();
        assert!(!report.has_labels());

        let labels: Vec<String> = (1..=7).map(|d| format!("2024-01-0{}", d)).collect();
        let report = report.with_labels(labels).unwrap();
        assert!(report.has_labels());
        assert_eq!(report.rows[2].label.as_deref(), Some("2024-01-03"));

        let err = sample_report().with_labels(["only-one"]).unwrap_err();
        assert!(err.is_input_err());
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(value["summary"]["max_span"], 6);
        assert_eq!(value["rows"][6]["trend"], "STRONG_BULLISH");
        assert!(value["rows"][0].get("label").is_none());
    }
}
