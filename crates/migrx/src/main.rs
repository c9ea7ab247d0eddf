use clap::{Parser, Subcommand};
use colored::Colorize;
use migr_api::ApiClient;
use std::process;
use tracing::Level;

mod commands;

/// Standardized exit codes for CLI.
/// 0 = OK, 2 = input error, 3 = not found (404), 4 = conflict (409), 1 = other.
#[allow(dead_code)]
const EXIT_OK: i32 = 0;
const EXIT_OTHER: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_NOT_FOUND: i32 = 3;
const EXIT_CONFLICT: i32 = 4;

#[derive(Parser)]
#[command(name = "migrx", version, about = "Migration CLI: list clients, trigger migrations")]
struct Cli {
    /// Migration server URL (default: http://localhost:8080)
    #[arg(long, env = "MIGR_API_URL", default_value = migr_api::DEFAULT_API_URL)]
    api: String,

    /// Log outbound requests
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List clients still on the legacy system
    Legacy,
    /// List clients already on the new system
    New,
    /// Trigger migration of one client
    Migrate {
        /// Client identifier
        client_id: String,
    },
}

/// Map error strings to exit codes based on HTTP status patterns.
fn exit_code_for(err: &str) -> i32 {
    if err.contains("HTTP 404") {
        EXIT_NOT_FOUND
    } else if err.contains("HTTP 409") {
        EXIT_CONFLICT
    } else if err.contains("parse ") || err.contains("expected ") {
        EXIT_INPUT
    } else {
        EXIT_OTHER
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .compact()
            .init();
    }

    let client = match ApiClient::new(&cli.api) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(EXIT_OTHER);
        }
    };

    let result = match cli.command {
        Commands::Legacy => commands::legacy(&client).await,
        Commands::New => commands::new_clients(&client).await,
        Commands::Migrate { client_id } => commands::migrate(&client, &client_id).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(exit_code_for(&e));
    }
}
