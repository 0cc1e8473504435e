//! keypad-calc: replay button presses on the keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc 5 + 3 =                 # display: 8
//! keypad-calc "1 2 × 3 =" --trace     # readout after every key
//! keypad-calc 1 ÷ 0 = --json          # {"display":"Can't divide by zero",...}
//! keypad-calc -c calc.json 1 ÷ 3 =    # custom rounding settings
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use keypad_calculator::prelude::*;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Replay keypad button captions and print the calculator readout
#[derive(Parser, Debug)]
#[command(name = "keypad-calc", version, about)]
struct Cli {
    /// Button captions: 0-9 . + - × ÷ (or * /) = AC C ±
    #[arg(value_name = "KEY")]
    keys: Vec<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the readout after every key
    #[arg(long)]
    trace: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Serialize)]
struct Step<'a> {
    key: &'a str,
    #[serde(flatten)]
    readout: Readout,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(fallback)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            CalculatorConfig::from_json_file(path)?
        }
        None => CalculatorConfig::default(),
    };
    let mut calc = Calculator::with_config(config)?;

    // "5 + 3 =" given as one argument is split into keys
    let keys: Vec<&str> = cli.keys.iter().flat_map(|k| k.split_whitespace()).collect();

    for key in &keys {
        calc.press(InputEvent::from_label(key)?)?;
        if cli.trace {
            print_step(cli.json, key, calc.readout())?;
        }
    }

    if !cli.trace || keys.is_empty() {
        print_readout(cli.json, &calc.readout())?;
    }
    Ok(())
}

fn print_step(json: bool, key: &str, readout: Readout) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string(&Step { key, readout })?);
    } else {
        println!("{key:>3}  {:<24} {}", readout.display, readout.history);
    }
    Ok(())
}

fn print_readout(json: bool, readout: &Readout) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string(readout)?);
    } else {
        if !readout.history.is_empty() {
            println!("{}", readout.history);
        }
        println!("{}", readout.display);
    }
    Ok(())
}
