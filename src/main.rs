//! Skyforge CLI
//!
//! Generates daily alignment reports from stored birth profiles.
//!
//! # Commands
//!
//! - `generate`: Full year or month calendar in one or more formats
//! - `preview`: One day as text on stdout
//! - `daily`: Today's report to stdout or the output directory
//! - `install-daily` / `uninstall-daily`: Schedule the daily report
//! - `profile`: Create, list, show and delete profiles
//! - `serve`: Run the REST API

use clap::Parser;

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match cli::run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
