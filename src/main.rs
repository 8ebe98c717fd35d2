use std::io::BufWriter;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use combine_reports::{combine_reports, write_report, CombineError};

/// Reads sweep report lines on stdin and prints them sorted by avg_deviance,
/// highest first.
#[derive(Debug, Parser)]
#[command(name = "combine-reports", version, about)]
struct Cli {}

fn main() -> ExitCode {
    let _ = Cli::parse();
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("COMBINE_REPORTS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

fn run() -> Result<(), CombineError> {
    let records = combine_reports(std::io::stdin().lock())?;
    write_report(BufWriter::new(std::io::stdout().lock()), &records)?;
    Ok(())
}
