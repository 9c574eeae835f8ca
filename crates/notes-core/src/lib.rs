//! notes-core: Core domain types for the notes service
//!
//! This crate defines the fundamental types shared by the storage layer,
//! the HTTP server, and tests:
//!
//! - Typed identifiers (`NoteId`, `UserId`) wrapping UUIDs
//! - The `Note` and `User` domain structs
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

pub mod types;

pub use types::{Note, NoteId, User, UserId};
