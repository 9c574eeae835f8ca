//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are separate from the domain types in notes-core so the
//! row shapes can follow the schema.

use chrono::{DateTime, Utc};
use notes_core::{Note, NoteId, User, UserId};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub created: DateTime<Utc>,
}

impl UserRow {
    /// Convert this row into the domain `User` type.
    pub fn into_user(self) -> User {
        User {
            id: UserId::from_uuid(self.id),
            username: self.username,
            created: self.created,
        }
    }
}

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub text: String,
    pub completed: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl NoteRow {
    /// Convert this row into the domain `Note` type.
    pub fn into_note(self) -> Note {
        Note {
            id: NoteId::from_uuid(self.id),
            user: UserId::from_uuid(self.user_id),
            title: self.title,
            text: self.text,
            completed: self.completed,
            created: self.created,
            updated: self.updated,
        }
    }
}

/// Input for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Input for creating a new note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub user_id: Uuid,
    pub title: String,
    pub text: String,
    /// Defaults to false when the client omits it.
    pub completed: bool,
}

impl NewNote {
    pub fn new(user_id: Uuid, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id,
            title: title.into(),
            text: text.into(),
            completed: false,
        }
    }

    /// Set the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_note_defaults_completed_false() {
        let note = NewNote::new(Uuid::new_v4(), "Groceries", "milk");
        assert!(!note.completed);
    }

    #[test]
    fn new_note_with_completed() {
        let note = NewNote::new(Uuid::new_v4(), "Groceries", "milk").with_completed(true);
        assert!(note.completed);
    }

    #[test]
    fn note_row_into_note() {
        let row = NoteRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "Groceries".to_string(),
            text: "milk".to_string(),
            completed: true,
            created: Utc::now(),
            updated: Utc::now(),
        };
        let note = row.clone().into_note();
        assert_eq!(note.id.0, row.id);
        assert_eq!(note.user.0, row.user_id);
        assert_eq!(note.title, row.title);
        assert_eq!(note.text, row.text);
        assert!(note.completed);
    }

    #[test]
    fn user_row_into_user() {
        let row = UserRow {
            id: Uuid::new_v4(),
            username: "hank".to_string(),
            created: Utc::now(),
        };
        let user = row.clone().into_user();
        assert_eq!(user.id.0, row.id);
        assert_eq!(user.username, "hank");
    }
}
