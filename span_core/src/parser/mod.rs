pub mod price_parser;
