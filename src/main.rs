use std::{
    fs,
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::error;
use pcalc::{
    session::{Session, write_identifiers},
    util::format::MAX_PRECISION,
};

/// pcalc evaluates arithmetic expressions, one per line, and remembers the
/// last result as `last`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate every line of a file in order instead of an expression.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Maximum number of decimals to print. Trailing zeros are dropped.
    #[arg(short, long, value_name = "DIGITS", value_parser = parse_precision)]
    precision: Option<usize>,

    /// Print the known constants and functions, then exit.
    #[arg(short, long)]
    list: bool,

    /// The expression to evaluate. Words are joined with spaces. Without an
    /// expression or a file, expressions are read from standard input.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expression: Vec<String>,
}

fn parse_precision(arg: &str) -> Result<usize, String> {
    let digits = arg.parse::<usize>()
                    .map_err(|e| format!("'{arg}' is not a number of digits: {e}"))?;
    if digits > MAX_PRECISION {
        return Err(format!("at most {MAX_PRECISION} digits are supported"));
    }
    Ok(digits)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    if args.list {
        return exit_code(write_identifiers(&mut out).map(|()| true));
    }

    let mut session = Session::new(args.precision);

    let outcome = if let Some(path) = &args.file {
        match fs::read_to_string(path) {
            Ok(script) => session.run(script.as_bytes(), &mut out, &mut err, false),
            Err(e) => {
                error!("failed to read {}: {e}", path.display());
                let _ = writeln!(err,
                                 "Failed to read the input file '{}'. Perhaps this file does not exist?",
                                 path.display());
                return ExitCode::FAILURE;
            },
        }
    } else if args.expression.is_empty() {
        let stdin = io::stdin();
        let prompt = stdin.is_terminal();
        session.run(stdin.lock(), &mut out, &mut err, prompt)
    } else {
        session.evaluate_and_print(&args.expression.join(" "), &mut out, &mut err)
    };

    exit_code(outcome)
}

/// Maps the outcome of a run to the process exit status.
fn exit_code(outcome: io::Result<bool>) -> ExitCode {
    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("i/o error: {e}");
            ExitCode::FAILURE
        },
    }
}
