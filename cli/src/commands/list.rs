//! LIST command - List all notes.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // No additional arguments needed
}

/// A note as returned by the server, with the owner's username resolved.
#[derive(Debug, Deserialize, Serialize)]
pub struct NoteRecord {
    pub id: Uuid,
    pub user: Uuid,
    pub title: String,
    pub text: String,
    pub completed: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub username: String,
}

/// Response from listing notes. The server answers with a bare array.
#[derive(Debug, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ListNotesResponse {
    pub notes: Vec<NoteRecord>,
}

impl HumanReadable for ListNotesResponse {
    fn print_human(&self) {
        for note in &self.notes {
            let marker = if note.completed {
                "done".green()
            } else {
                "open".yellow()
            };
            println!("{} [{}] {}", note.id, marker, note.title);
            println!(
                "    {} {} {} {}",
                "by".cyan(),
                note.username,
                "at".cyan(),
                format_timestamp(&note.updated)
            );
            println!("    {}", note.text);
        }
        println!();
        println!("{} note(s)", self.notes.len());
    }
}

/// Execute the list command.
pub async fn execute(client: &Client, base_url: &str, human: bool, _args: ListArgs) -> Result<()> {
    let url = format!("{}/notes", base_url);

    let response: ListNotesResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
