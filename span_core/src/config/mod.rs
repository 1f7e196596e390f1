pub mod span_config;
