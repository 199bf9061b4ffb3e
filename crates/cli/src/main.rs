//! `xdmfgen` binary
//!
//! Diagnostics go to stderr through the logger so that stdout only ever holds
//! a complete manifest.

// standard library
use std::error::Error as _;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

// xdmfgen modules
use xdmfgen_cli::{generate, load_overlay, resolve, Cli, Config, Result};

// external crates
use clap::Parser;
use log::{debug, error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let file_overlay = load_overlay(&cli.config)?;
    let config = resolve(Config::default(), file_overlay, cli.overrides());
    debug!("{config}");

    let working_dir = std::env::current_dir().ok();
    let document = generate(&config, working_dir.as_deref())?;

    match &cli.output {
        Some(path) => fs::write(path, document)?,
        None => io::stdout().lock().write_all(document.as_bytes())?,
    }

    Ok(())
}

/// Single line with the error and everything that caused it
fn report(e: &xdmfgen_cli::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message += &format!(": {cause}");
        source = cause.source();
    }
    message
}

fn init_logging(cli: &Cli) {
    // warnings by default, -v for info and so on
    let result = stderrlog::new()
        .modules(["xdmfgen", "xdmfgen_cli", "xdmfgen_series", "xdmfgen_xdmf"])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .init();

    if let Err(e) = result {
        eprintln!("failed to initialise logging: {e}");
    }
}
