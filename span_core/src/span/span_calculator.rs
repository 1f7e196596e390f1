use crate::common::{span_exception::SpanError, utils::check_price};
use crate::config::span_config::SpanConfig;
use crate::span::span_result::SpanResult;

/// Compute the span of every day with the default limits.
///
/// `spans[i]` is the number of consecutive days ending at `i` whose price is
/// not greater than `prices[i]`. Equal prices extend the run.
///
/// ```
/// let spans = span_core::compute_spans(&[100.0, 80.0, 60.0, 70.0, 60.0, 75.0, 85.0]).unwrap();
/// assert_eq!(spans, vec![1, 1, 1, 2, 1, 4, 6]);
/// ```
pub fn compute_spans(prices: &[f64]) -> Result<Vec<usize>, SpanError> {
    SpanCalculator::default().compute(prices)
}

/// Stateless span calculator; the config only bounds the input length.
#[derive(Debug, Clone, Default)]
pub struct SpanCalculator {
    config: SpanConfig,
}

impl SpanCalculator {
    pub fn new(config: SpanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SpanConfig {
        &self.config
    }

    pub fn compute(&self, prices: &[f64]) -> Result<Vec<usize>, SpanError> {
        if let Err(err) = self.validate(prices) {
            tracing::warn!(len = prices.len(), error = %err, "rejecting price sequence");
            return Err(err);
        }

        let spans = monotonic_spans(prices);
        tracing::debug!(len = prices.len(), "computed spans");
        Ok(spans)
    }

    /// Like [`compute`](Self::compute) but keeps the prices alongside the spans
    pub fn calculate(&self, prices: &[f64]) -> Result<SpanResult, SpanError> {
        let spans = self.compute(prices)?;
        Ok(SpanResult::new(prices.to_vec(), spans))
    }

    fn validate(&self, prices: &[f64]) -> Result<(), SpanError> {
        if prices.is_empty() {
            return Err(SpanError::invalid_input("no prices provided"));
        }
        if prices.len() > self.config.max_prices {
            return Err(SpanError::too_many_inputs(format!(
                "{} prices given, maximum is {}",
                prices.len(),
                self.config.max_prices
            )));
        }
        prices
            .iter()
            .enumerate()
            .try_for_each(|(idx, &price)| check_price(idx, price))
    }
}

// Indices on the stack always have strictly decreasing prices from bottom to top.
fn monotonic_spans(prices: &[f64]) -> Vec<usize> {
    let mut spans = Vec::with_capacity(prices.len());
    let mut stack: Vec<usize> = Vec::with_capacity(prices.len());

    for (i, &price) in prices.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if prices[top] > price {
                break;
            }
            stack.pop();
        }

        spans.push(match stack.last() {
            Some(&top) => i - top,
            None => i + 1,
        });
        stack.push(i);
    }

    spans
}
