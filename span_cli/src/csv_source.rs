use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, StringRecord};
use span_core::common::utils::str2float;
use span_core::{ErrCode, SpanError};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq)]
pub struct CsvPrices {
    pub prices: Vec<f64>,
    pub dates: Option<Vec<NaiveDate>>,
}

impl CsvPrices {
    pub fn date_labels(&self) -> Option<Vec<String>> {
        self.dates.as_ref().map(|dates| {
            dates
                .iter()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .collect()
        })
    }
}

fn format_error(msg: impl Into<String>) -> SpanError {
    SpanError::new(msg, ErrCode::SrcDataFormatError)
}

pub fn read_csv_file(path: &Path) -> Result<CsvPrices, SpanError> {
    let file = File::open(path).map_err(|e| {
        SpanError::new(
            format!("cannot open {}: {}", path.display(), e),
            ErrCode::SrcDataNotFound,
        )
    })?;
    tracing::debug!(path = %path.display(), "reading prices from csv");
    read_csv(file)
}

/// Read a headed CSV with a `price` or `close` column and an optional `date` column.
pub fn read_csv<R: Read>(source: R) -> Result<CsvPrices, SpanError> {
    let mut rdr = Reader::from_reader(source);
    let headers = rdr
        .headers()
        .map_err(|e| format_error(format!("cannot read csv header: {}", e)))?
        .clone();

    let price_col = find_column(&headers, &["price", "close"])
        .ok_or_else(|| format_error("csv header has no 'price' or 'close' column"))?;
    let date_col = find_column(&headers, &["date"]);

    let mut prices = Vec::new();
    let mut dates = date_col.map(|_| Vec::new());

    for (row, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| format_error(format!("bad csv row {}: {}", row + 1, e)))?;

        let raw = field(&record, price_col, row)?;
        let price = str2float(raw).ok_or_else(|| {
            format_error(format!("row {}: price '{}' is not a number", row + 1, raw))
        })?;
        prices.push(price);

        if let (Some(col), Some(dates)) = (date_col, dates.as_mut()) {
            let raw = field(&record, col, row)?;
            let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
                format_error(format!("row {}: date '{}' is invalid: {}", row + 1, raw, e))
            })?;
            dates.push(date);
        }
    }

    Ok(CsvPrices { prices, dates })
}

fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    names.iter().find_map(|name| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    })
}

fn field(record: &StringRecord, col: usize, row: usize) -> Result<&str, SpanError> {
    record
        .get(col)
        .ok_or_else(|| format_error(format!("row {} has no column {}", row + 1, col + 1)))
}
