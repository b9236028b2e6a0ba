//! crates/study_desk_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or serialization format.

use chrono::{DateTime, Local, Utc};
use uuid::Uuid;

use crate::labels::type_label;

/// The kind of a study material. Codes the client does not know are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Lecture,
    Book,
    Homework,
    Note,
    Other(String),
}

impl MaterialKind {
    /// Parses a wire code. Never fails: unknown codes become `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "lecture" => Self::Lecture,
            "book" => Self::Book,
            "homework" => Self::Homework,
            "note" => Self::Note,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Lecture => "lecture",
            Self::Book => "book",
            Self::Homework => "homework",
            Self::Note => "note",
            Self::Other(code) => code,
        }
    }

    /// The display label for this kind.
    pub fn label(&self) -> &str {
        type_label(self.code())
    }
}

impl Default for MaterialKind {
    fn default() -> Self {
        Self::Lecture
    }
}

/// A stored study item. `id` and `date` are assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub subject: String,
    pub kind: MaterialKind,
    /// Opaque, server-formatted.
    pub date: String,
}

/// The payload for creating a material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMaterial {
    pub title: String,
    pub content: String,
    pub subject: String,
    pub kind: MaterialKind,
}

/// Everything the list endpoint returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialsListing {
    pub materials: Vec<Material>,
    /// Subject names known to the server, offered by the add form.
    pub subjects: Vec<String>,
}

/// The user's profile. Display only, never sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub school: String,
    pub course: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A transient toast shown to the user.
#[derive(Debug, Clone)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub kind: NoticeKind,
    pub shown_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            shown_at: Utc::now(),
        }
    }

    /// The local wall-clock time the notice was raised, as `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.shown_at
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}
