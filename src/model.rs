use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

pub const INSERT_SUCCESS: &str = "Insert success";
pub const INSERT_FAILURE: &str = "Insert failure";
pub const UPDATE_SUCCESS: &str = "Update success";
pub const UPDATE_FAILURE: &str = "Update failure";
pub const DELETE_SUCCESS: &str = "Delete success";
pub const DELETE_FAILURE: &str = "Delete failure";
pub const NOTE_TITLE_NULL: &str = "Note title cannot be null";
pub const INVALID_NOTE_ID: &str = "Invalid id. Can't delete note";
pub const NO_CONTENT_ERROR: &str = "Can't save note. Note must have some content";

/// Format used for note timestamps, e.g. `05-2019`.
pub const TIMESTAMP_FORMAT: &str = "%m-%Y";

/// A single persisted note. `id` is `0` until the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub timestamp: String,
}

impl Note {
    pub fn new(
        title: impl Into<String>,
        content: Option<impl Into<String>>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            content: content.map(Into::into),
            timestamp: timestamp.into(),
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// True once the store has assigned an identifier.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// Current month rendered in [`TIMESTAMP_FORMAT`].
pub fn timestamp_now() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Loading,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Error => "ERROR",
            Status::Loading => "LOADING",
        }
    }
}

/// Outcome of a store-backed operation, handed to whoever observes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource<T> {
    pub status: Status,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Resource<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn error(data: Option<T>, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            data,
            message: Some(message.into()),
        }
    }

    pub fn loading(data: Option<T>) -> Self {
        Self {
            status: Status::Loading,
            data,
            message: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
