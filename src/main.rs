// Allow dead code for items that are part of the public API but only used in tests
#![allow(dead_code)]

mod cmd;
mod config;
mod error;
mod graph;
mod model;

use clap::Parser;
use cmd::Cli;
use log::{debug, LevelFilter};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default());
    match cli.log_level.as_deref() {
        Some(level) => {
            let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
                eprintln!("Invalid log level: {}. Using 'warn' instead.", level);
                LevelFilter::Warn
            });
            logger.filter_level(log_level);
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            logger.filter_level(LevelFilter::Warn);
        }
        None => {}
    }
    logger.init();

    debug!("Parsed arguments: {:?}", cli);

    if let Err(e) = cmd::run(cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
