//! Command-line interface for the notes service.
//!
//! This CLI tool provides commands for the note operations:
//! - list: List all notes with their owners
//! - create: Create a new note
//! - update: Update a note's fields
//! - delete: Delete a note
//!
//! Configuration via environment:
//! - NOTES_URL: Base URL of the notes server (default: http://localhost:3000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, list::ListArgs, update::UpdateArgs,
};

/// Notes service CLI
///
/// Interact with the notes server from the command line. Designed for both
/// scripts (JSON output) and humans (--human flag for formatted output).
#[derive(Parser)]
#[command(name = "notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Notes server URL
    #[arg(
        long,
        env = "NOTES_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all notes with their owners' usernames
    List(ListArgs),

    /// Create a new note
    Create(CreateArgs),

    /// Update a note's title, text, and completion flag
    Update(UpdateArgs),

    /// Delete a note
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Create(args) => {
            commands::create::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Update(args) => {
            commands::update::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
