//! Print the functions declared at the top level of a translation unit.
//!
//! The fast, shallow variant of `tu-functions`: only the unit root's direct
//! children are inspected, so functions nested inside namespaces or classes
//! are not reported.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tu_inspect::{FrontendConfig, Strategy, logging, parse_unit, report, walk};

#[derive(Parser, Debug)]
#[command(name = "tu-functions-top", version, about)]
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
        detailed_preprocessing: false,
    };
    config.normalize();

    let unit = match parse_unit(&args.file, &config) {
        Ok(unit) => unit,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        },
    };

    let lines = walk::collect_functions(unit.root(), Strategy::TopLevelOnly).into_iter().map(report::function_line);
    match report::emit(&mut std::io::stdout().lock(), lines) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
