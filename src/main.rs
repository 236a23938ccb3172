//! Jump - a directory bookmarking tool for the shell
//!
//! Associates short names with directory paths, persisted in ~/.jumprc,
//! and prints the resolved path for a wrapping shell function to `cd` to.

mod cli;
mod core;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logging goes to stderr; stdout carries the resolved path
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::WARN)
        .init();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = cli::run(cli) {
        println!("*** ERROR: {err}");
        std::process::exit(1);
    }
}
