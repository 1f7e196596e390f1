use serde::Serialize;

/// Prices paired with their spans; days are implied and 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanResult {
    prices: Vec<f64>,
    spans: Vec<usize>,
}

impl SpanResult {
    pub(crate) fn new(prices: Vec<f64>, spans: Vec<usize>) -> Self {
        debug_assert_eq!(prices.len(), spans.len());
        Self { prices, spans }
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn spans(&self) -> &[usize] {
        &self.spans
    }

    pub fn days(&self) -> impl Iterator<Item = usize> + '_ {
        1..=self.spans.len()
    }

    /// `(day, price, span)` triples in day order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64, usize)> + '_ {
        self.days()
            .zip(self.prices.iter().copied())
            .zip(self.spans.iter().copied())
            .map(|((day, price), span)| (day, price, span))
    }
}
