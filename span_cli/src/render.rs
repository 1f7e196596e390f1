use span_core::{ErrCode, SpanError, SpanReport, SpanRow};

pub fn render_table(report: &SpanReport) -> String {
    let labelled = report.has_labels();
    let mut out = if labelled {
        format!("{:>5}  {:<10}  {:>12}  {:>5}  Trend\n", "Day", "Date", "Price", "Span")
    } else {
        format!("{:>5}  {:>12}  {:>5}  Trend\n", "Day", "Price", "Span")
    };

    for row in &report.rows {
        out.push_str(&render_row(row, labelled));
    }

    let summary = &report.summary;
    out.push_str(&format!(
        "\nMax span:   {}\nAvg span:   {:.2}\nTotal days: {}\n",
        summary.max_span, summary.avg_span, summary.total_days
    ));
    out
}

fn render_row(row: &SpanRow, labelled: bool) -> String {
    if labelled {
        format!(
            "{:>5}  {:<10}  {:>12.2}  {:>5}  {}\n",
            row.day,
            row.label.as_deref().unwrap_or(""),
            row.price,
            row.span,
            row.trend.label()
        )
    } else {
        format!(
            "{:>5}  {:>12.2}  {:>5}  {}\n",
            row.day,
            row.price,
            row.span,
            row.trend.label()
        )
    }
}

pub fn render_json(report: &SpanReport) -> Result<String, SpanError> {
    serde_json::to_string_pretty(report).map_err(|e| {
        SpanError::new(format!("cannot serialize report: {}", e), ErrCode::SrcDataFormatError)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use span_core::Analyzer;

    #[test]
    fn test_table_for_sample() {
        let report = Analyzer::default().analyze_sample().unwrap();
        let table = render_table(&report);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].contains("Day") && lines[0].contains("Span"));
        assert!(!lines[0].contains("Date"));
        assert_eq!(lines[1].split_whitespace().collect::<Vec<_>>(), vec!["1", "100.00", "1", "Bearish"]);
        assert_eq!(
            lines[7].split_whitespace().collect::<Vec<_>>(),
            vec!["7", "85.00", "6", "Strong", "Bullish"]
        );
        assert!(table.contains("Max span:   6"));
        assert!(table.contains("Avg span:   2.29"));
        assert!(table.contains("Total days: 7"));
    }

    #[test]
    fn test_table_with_dates() {
        let report = Analyzer::default()
            .analyze_prices(&[10.0, 12.0])
            .unwrap()
            .with_labels(["2024-03-01", "2024-03-04"])
            .unwrap();
        let table = render_table(&report);
        assert!(table.lines().next().unwrap().contains("Date"));
        assert!(table.contains("2024-03-04"));
    }

    #[test]
    fn test_json() {
        let report = Analyzer::default().analyze_sample().unwrap();
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["total_days"], 7);
        assert_eq!(value["rows"][3]["span"], 2);
    }
}
