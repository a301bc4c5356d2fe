#![deny(clippy::all, nonstandard_style, rust_2018_idioms)]

#[macro_use]
extern crate eyre;

#[macro_use]
extern crate tracing;

use std::{io, process::ExitCode};

use eyre::{Context as _, Report, Result};
use fanart_community::Document;

use self::util::Args;

mod config;
mod logging;
mod util;

fn main() -> ExitCode {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("{:?}", Report::new(err).wrap_err("Failed to parse .env"));

            return ExitCode::FAILURE;
        }
    }

    let args = Args::parse();

    if let Err(err) = config::init() {
        eprintln!("{:?}", err.wrap_err("Failed to initialize config"));

        return ExitCode::FAILURE;
    }

    let _log_worker_guard = match logging::init(args.quiet) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("{:?}", err.wrap_err("Failed to initialize logging"));

            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}", err.wrap_err("Failed to decode document"));

            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let document = match args.input {
        Some(ref path) => {
            debug!("Reading {} from `{}`", args.shape, path.display());

            Document::from_path(args.shape, path)?
        }
        None => {
            debug!("Reading {} from stdin", args.shape);

            Document::from_reader(args.shape, io::stdin().lock())?
        }
    };

    info!("{}", document.summary());

    if args.echo {
        let json = serde_json::to_string_pretty(&document).context("failed to encode document")?;
        println!("{json}");
    }

    Ok(())
}
