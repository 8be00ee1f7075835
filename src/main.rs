mod cli;
mod report;

use std::io::{self, Write};

use clap::Parser;
use nametag::{generate_verbose, samples};
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::{Args, CliError, Format};

/// Environment variable holding the log filter, e.g. `NAMETAG_LOG=nametag=trace`.
const LOG_ENV: &str = "NAMETAG_LOG";

fn main() {
    let args = Args::parse();
    init_logging();

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr).with_target(false).with_filter(filter)).init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let color = args.use_color();

    if args.samples {
        let samples = samples();
        return match args.format {
            Format::Text => report::print_samples(&mut out, &samples, color).map_err(CliError::Write),
            Format::Json => {
                let rows: Vec<_> = samples
                    .iter()
                    .map(|s| json!({ "input": s.input, "expected": s.expected, "labels": nametag::generate(&s.input) }))
                    .collect();
                write_json(&mut out, &rows)
            }
        };
    }

    let input = args.name_input()?;
    let res = generate_verbose(&input);
    tracing::debug!(labels = ?res.labels, elapsed = ?res.elapsed, "generated labels");

    match args.format {
        Format::Text => report::print_run(&mut out, &input, &res, args.trace, color).map_err(CliError::Write),
        Format::Json if args.trace => write_json(&mut out, &res),
        Format::Json => write_json(&mut out, &res.labels),
    }
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|err| CliError::Write(err.into()))?;
    writeln!(out).map_err(CliError::Write)
}
