use std::path::PathBuf;

use span_core::{ErrCode, SpanError};

pub const USAGE: &str = "\
Usage: span_cli [OPTIONS] [PRICES]...

Compute the stock span of each day in a price series.

Arguments:
  [PRICES]...        Comma-separated prices, e.g. \"100, 80, 60, 70\"

Options:
      --sample       Analyze the built-in sample series
      --csv <PATH>   Read prices from a CSV file (price/close column, optional date column)
      --config <PATH>
                     JSON object overriding max_prices, strong_bullish_span,
                     bullish_span or neutral_span
      --json         Print the report as JSON
  -h, --help         Print help

Set RUST_LOG=debug to see diagnostic output on stderr.";

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text(String),
    Sample,
    Csv(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub input: Input,
    pub config: Option<PathBuf>,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Run(CliArgs),
}

fn usage_error(msg: impl Into<String>) -> SpanError {
    SpanError::new(msg, ErrCode::ParaError)
}

pub fn parse_args<I>(args: I) -> Result<Command, SpanError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut texts: Vec<String> = Vec::new();
    let mut sample = false;
    let mut csv: Option<PathBuf> = None;
    let mut config: Option<PathBuf> = None;
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--sample" => sample = true,
            "--json" => json = true,
            "--csv" => {
                let path = args
                    .next()
                    .ok_or_else(|| usage_error("--csv requires a path"))?;
                csv = Some(PathBuf::from(path));
            }
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| usage_error("--config requires a path"))?;
                config = Some(PathBuf::from(path));
            }
            s if s.starts_with("--") => {
                return Err(usage_error(format!("unknown option '{}'", s)));
            }
            // Anything else, including "-5" or "-inf", is price text for the parser to judge.
            _ => texts.push(arg.clone()),
        }
    }

    let mut sources = Vec::new();
    if !texts.is_empty() {
        sources.push(Input::Text(join_price_args(&texts)));
    }
    if sample {
        sources.push(Input::Sample);
    }
    if let Some(path) = csv {
        sources.push(Input::Csv(path));
    }

    let input = match sources.len() {
        0 => return Err(usage_error("no input given; pass prices, --sample or --csv")),
        1 => sources.remove(0),
        _ => return Err(usage_error("give exactly one of prices, --sample or --csv")),
    };

    Ok(Command::Run(CliArgs {
        input,
        config,
        json,
    }))
}

/// Join shell-split price words. A comma already at the boundary of two words
/// serves as their separator; commas inside a word are kept as written.
fn join_price_args(texts: &[String]) -> String {
    let mut joined = String::new();
    for (i, text) in texts.iter().enumerate() {
        if i > 0 {
            let separated =
                joined.trim_end().ends_with(',') || text.trim_start().starts_with(',');
            joined.push_str(if separated { " " } else { "," });
        }
        joined.push_str(text);
    }
    joined
}
