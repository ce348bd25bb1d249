use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use artifact_resource::commands::check::check;
use artifact_resource::commands::select::select;
use artifact_resource::config::{CheckRequest, SelectRequest, Source};
use artifact_resource::logging;
use artifact_resource::store::InMemoryStore;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser)]
#[command(name = "artifact-resource")]
#[command(version, about = "Version resolution for a CI artifact repository resource")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a check request on stdin and print the versions to emit
    Check,
    /// Read an upload request on stdin and print the version it produces
    Select {
        /// Working directory the upload directory and properties file are resolved against
        #[arg(default_value = ".")]
        directory: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            let request: CheckRequest = read_request()?;
            let _guard = init_logging(&request.source);
            let store = InMemoryStore::new(request.candidates.clone());
            let versions = check(&store, &request)?;
            write_response(&versions)
        }
        Command::Select { directory } => {
            let request: SelectRequest = read_request()?;
            let _guard = init_logging(&request.source);
            let response = select(&request, &directory, chrono::Utc::now())?;
            write_response(&response)
        }
    }
}

fn read_request<T: DeserializeOwned>() -> anyhow::Result<T> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    serde_json::from_str(&input).context("error when parsing object given by concourse")
}

/// Diagnostics go to stderr; stdout carries only the JSON response
fn init_logging(source: &Source) -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(io::stderr());
    if let Err(e) = logging::init(source.level_filter(), writer) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    guard
}

fn write_response<T: serde::Serialize>(response: &T) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, response)?;
    writeln!(stdout)?;
    Ok(())
}
