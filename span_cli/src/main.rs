mod args;
mod csv_source;
mod render;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use span_core::{Analyzer, ErrCode, SpanConfig, SpanError, SpanReport};
use tracing_subscriber::EnvFilter;

use crate::args::{parse_args, CliArgs, Command, Input, USAGE};
use crate::csv_source::read_csv_file;
use crate::render::{render_json, render_table};

fn main() -> ExitCode {
    // RUST_LOG=debug,span_core=trace for diagnostics; quiet by default.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            ExitCode::SUCCESS
        }
        Ok(Command::Run(args)) => match run(&args) {
            Ok(output) => {
                print!("{}", output);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {}", err);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            ExitCode::from(2)
        }
    }
}

fn run(args: &CliArgs) -> Result<String, SpanError> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SpanConfig::default(),
    };
    let analyzer = Analyzer::new(config);

    let report = analyze(&analyzer, &args.input)?;
    tracing::info!(
        days = report.summary.total_days,
        max_span = report.summary.max_span,
        "analysis completed"
    );

    if args.json {
        let mut json = render_json(&report)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render_table(&report))
    }
}

fn analyze(analyzer: &Analyzer, input: &Input) -> Result<SpanReport, SpanError> {
    match input {
        Input::Text(text) => analyzer.analyze_text(text),
        Input::Sample => analyzer.analyze_sample(),
        Input::Csv(path) => {
            let csv = read_csv_file(path)?;
            let report = analyzer.analyze_prices(&csv.prices)?;
            match csv.date_labels() {
                Some(labels) => report.with_labels(labels),
                None => Ok(report),
            }
        }
    }
}

fn load_config(path: &Path) -> Result<SpanConfig, SpanError> {
    let text = fs::read_to_string(path).map_err(|e| {
        SpanError::new(
            format!("cannot read config {}: {}", path.display(), e),
            ErrCode::SrcDataNotFound,
        )
    })?;
    SpanConfig::from_json_str(&text)
}
