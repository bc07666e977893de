//! Print one reconstructed `#define` line per macro defined in a
//! translation unit.
//!
//! Enables detailed preprocessing on the front-end internally; an absent
//! preprocessing record is a fatal configuration defect and aborts before
//! any output is produced.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tu_inspect::{FrontendConfig, logging, macros, parse_unit, report};

#[derive(Parser, Debug)]
#[command(name = "tu-macros", version, about)]
struct Args {
    /// Source file to compile and inspect.
    file: PathBuf,

    /// Include search directory for the front-end (repeatable).
    #[arg(short = 'I', long = "include", value_name = "DIR")]
    include: Vec<String>,

    /// Extra compiler flag passed through to the front-end (repeatable).
    #[arg(long = "flag", value_name = "FLAG")]
    flags: Vec<String>,

    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let usage_error = err.use_stderr();
            let _ = err.print();
            return if usage_error { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        },
    };
    logging::init(args.verbose);

    let mut config = FrontendConfig {
        include_paths: args.include,
        extra_flags: args.flags,
        detailed_preprocessing: true,
    };
    config.normalize();

    let unit = match parse_unit(&args.file, &config) {
        Ok(unit) => unit,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        },
    };

    let record = match unit.require_preprocessing_record() {
        Ok(record) => record,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        },
    };

    match report::emit(&mut std::io::stdout().lock(), macros::macro_lines(record)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
