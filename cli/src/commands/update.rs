//! UPDATE command - Update a note's fields.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// ID of the note to update
    pub id: Uuid,

    /// New title
    pub title: String,

    /// New body
    pub text: String,

    /// Mark the note as completed. The server only applies a true value;
    /// completion cannot be cleared from here.
    #[arg(long)]
    pub completed: bool,
}

/// Request body for updating a note.
#[derive(Serialize)]
struct UpdateNoteRequest {
    id: Uuid,
    title: String,
    text: String,
    completed: bool,
}

/// Response from updating a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateNoteResponse {
    pub message: String,
}

impl HumanReadable for UpdateNoteResponse {
    fn print_human(&self) {
        println!("{} {}", "Updated:".green().bold(), self.message);
    }
}

/// Execute the update command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: UpdateArgs) -> Result<()> {
    let url = format!("{}/notes", base_url);

    let request_body = UpdateNoteRequest {
        id: args.id,
        title: args.title,
        text: args.text,
        completed: args.completed,
    };

    let response: UpdateNoteResponse = make_request(client.patch(&url).json(&request_body)).await?;

    output(&response, human)
}
