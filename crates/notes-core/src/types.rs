//! Core data types for the notes service.
//!
//! Notes belong to users. A note carries a title, free-form text, and a
//! completion flag. Titles are kept unique across notes by the update
//! handler's lookup, not by these types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a UUID v4, providing type safety to distinguish note IDs from other
/// UUID-based identifiers in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a user.
///
/// Wraps a UUID v4, providing type safety to distinguish user IDs from
/// other UUID-based identifiers in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new random UserId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a UserId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Core Domain Types
// ============================================================================

/// A user who owns notes.
///
/// Users are read-only from the notes handlers' perspective; the notes
/// surface only resolves a user's `username` when listing notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for this user.
    pub id: UserId,

    /// Display name, resolved into note listings.
    pub username: String,

    /// Creation timestamp.
    pub created: DateTime<Utc>,
}

/// A note owned by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for this note.
    pub id: NoteId,

    /// The user who owns this note.
    pub user: UserId,

    /// Note title. Unique across notes, enforced at update time.
    pub title: String,

    /// Free-form note body.
    pub text: String,

    /// Whether the note has been completed.
    pub completed: bool,

    /// Creation timestamp.
    pub created: DateTime<Utc>,

    /// Last modification timestamp.
    pub updated: DateTime<Utc>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_roundtrip() {
        let id = NoteId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_display_fromstr() {
        let id = NoteId::new();
        let s = id.to_string();
        let parsed: NoteId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn user_id_roundtrip() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn user_id_display_fromstr() {
        let id = UserId::new();
        let s = id.to_string();
        let parsed: UserId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_serializes_transparently() {
        let id = NoteId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", Uuid::nil()));
    }

    #[test]
    fn note_roundtrip() {
        let note = Note {
            id: NoteId::new(),
            user: UserId::new(),
            title: "Groceries".to_string(),
            text: "milk".to_string(),
            completed: false,
            created: Utc::now(),
            updated: Utc::now(),
        };
        let json = serde_json::to_string(&note).unwrap();
        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, parsed);
    }

    #[test]
    fn note_json_field_names() {
        let note = Note {
            id: NoteId::new(),
            user: UserId::new(),
            title: "t".to_string(),
            text: "x".to_string(),
            completed: true,
            created: Utc::now(),
            updated: Utc::now(),
        };
        let value = serde_json::to_value(&note).unwrap();
        assert!(value.get("user").is_some());
        assert!(value.get("user_id").is_none());
        assert!(value.get("completed").is_some());
    }

    #[test]
    fn user_roundtrip() {
        let user = User {
            id: UserId::new(),
            username: "hank".to_string(),
            created: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, parsed);
    }
}
