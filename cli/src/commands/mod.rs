//! Command implementations and shared HTTP helpers.

pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Types that can render themselves for human consumption.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Error body returned by the server.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: String,
}

/// Build the shared HTTP client.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!("notes-cli/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// Send a request and decode the JSON response.
///
/// Non-success statuses are turned into readable errors using the server's
/// `{"message": ...}` body when present.
pub async fn make_request<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await.context("Request failed")?;
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| status.to_string());
        bail!("{} ({})", message, status);
    }

    response
        .json()
        .await
        .context("Failed to decode server response")
}

/// Print a response as JSON (default) or human-readable text.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Format a timestamp for human output.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_are_rendered_in_utc() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(format_timestamp(&ts), "2025-03-14 09:26:53 UTC");
    }

    #[test]
    fn error_body_decodes_server_shape() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Note not found"}"#).unwrap();
        assert_eq!(body.message, "Note not found");
    }
}
