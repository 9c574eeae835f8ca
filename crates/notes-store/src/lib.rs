//! notes-store: PostgreSQL storage layer for the notes service
//!
//! This crate provides:
//! - PostgreSQL storage for users and notes
//! - Migration management
//! - Type-safe database operations via sqlx
//!
//! Finder operations (`find_note`, `find_note_by_title`, `find_user`) return
//! `Option` rather than erroring on a miss; handlers decide what a miss
//! means for their request.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! let notes = store.list_notes().await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{NewNote, NewUser, NoteRow, UserRow};
pub use store::{Store, StoreConfig};

// Re-export notes-core for downstream crates
pub use notes_core;
