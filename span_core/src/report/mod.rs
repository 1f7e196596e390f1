pub mod span_report;
