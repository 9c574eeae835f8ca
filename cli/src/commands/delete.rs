//! DELETE command - Delete a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// ID of the note to delete
    pub id: Uuid,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Request body for deleting a note.
#[derive(Serialize)]
struct DeleteNoteRequest {
    id: Uuid,
}

// The server replies with a bare string.
impl HumanReadable for String {
    fn print_human(&self) {
        println!("{} {}", "Deleted:".green().bold(), self);
    }
}

/// Execute the delete command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: DeleteArgs) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete note {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.id
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = format!("{}/notes", base_url);

    let request_body = DeleteNoteRequest { id: args.id };

    let response: String = make_request(client.delete(&url).json(&request_body)).await?;

    output(&response, human)
}
