//! CREATE command - Create a new note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// ID of the user who owns the note
    pub user: Uuid,

    /// Note title
    pub title: String,

    /// Note body
    pub text: String,

    /// Mark the note as completed
    #[arg(long)]
    pub completed: bool,
}

/// Request body for creating a note.
#[derive(Serialize)]
struct CreateNoteRequest {
    user: Uuid,
    title: String,
    text: String,
    completed: bool,
}

/// Response from creating a note.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateNoteResponse {
    pub message: String,
}

impl HumanReadable for CreateNoteResponse {
    fn print_human(&self) {
        println!("{} {}", "Created:".green().bold(), self.message);
    }
}

/// Execute the create command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: CreateArgs) -> Result<()> {
    let url = format!("{}/notes", base_url);

    let request_body = CreateNoteRequest {
        user: args.user,
        title: args.title,
        text: args.text,
        completed: args.completed,
    };

    let response: CreateNoteResponse = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
