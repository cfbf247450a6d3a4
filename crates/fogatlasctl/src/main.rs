//! fogatlasctl
//!
//! Command line interface for FogAtlas

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use fogatlas_client::HttpClient;
use fogatlasctl::{Cli, Config};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = Config::load_default()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let endpoint = config.endpoint(cli.command.endpoint());
    tracing::debug!(endpoint, "using endpoint");

    let mut stdout = io::stdout().lock();
    let result = match HttpClient::new(endpoint) {
        Ok(client) => fogatlasctl::dispatch(&client, &cli.command, &mut stdout)
            .await
            .map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(message) => {
            writeln!(stdout, "Error: {message}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}
