//! Mediates between the store and the view model.
//!
//! Each mutation checks its precondition synchronously and only then schedules
//! the store call on the runtime. The store's raw result code comes back as a
//! one-shot [`Event`] carrying a [`Resource`].

use crate::db::NoteStore;
use crate::error::{NoteError, StoreError};
use crate::model::{
    Note, Resource, DELETE_FAILURE, DELETE_SUCCESS, INSERT_FAILURE, INSERT_SUCCESS,
    UPDATE_FAILURE, UPDATE_SUCCESS,
};
use crate::observable::{Event, Observer};
use std::sync::Arc;
use tracing::{info, warn};

pub type StatusEvent = Event<Resource<i64>>;

#[derive(Clone)]
pub struct NoteRepository {
    store: Arc<dyn NoteStore>,
}

impl std::fmt::Debug for NoteRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteRepository").finish_non_exhaustive()
    }
}

impl NoteRepository {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Must be called from within a Tokio runtime.
    pub fn insert_note(&self, note: &Note) -> Result<StatusEvent, NoteError> {
        check_title(note)?;
        let store = Arc::clone(&self.store);
        let note = note.clone();
        Ok(Event::spawn(async move {
            let outcome = store.insert_note(&note).await;
            to_status("insert", outcome, INSERT_SUCCESS, INSERT_FAILURE)
        }))
    }

    /// Must be called from within a Tokio runtime.
    pub fn update_note(&self, note: &Note) -> Result<StatusEvent, NoteError> {
        check_title(note)?;
        let store = Arc::clone(&self.store);
        let note = note.clone();
        Ok(Event::spawn(async move {
            let outcome = store.update_note(&note).await;
            to_status("update", outcome, UPDATE_SUCCESS, UPDATE_FAILURE)
        }))
    }

    /// Must be called from within a Tokio runtime.
    pub fn delete_note(&self, note: &Note) -> Result<StatusEvent, NoteError> {
        if !note.is_persisted() {
            return Err(NoteError::InvalidNoteId);
        }
        let store = Arc::clone(&self.store);
        let note = note.clone();
        Ok(Event::spawn(async move {
            let outcome = store.delete_note(&note).await;
            to_status("delete", outcome, DELETE_SUCCESS, DELETE_FAILURE)
        }))
    }

    pub fn get_notes(&self) -> Observer<Vec<Note>> {
        self.store.notes()
    }
}

pub(crate) fn check_title(note: &Note) -> Result<(), NoteError> {
    if note.has_title() {
        Ok(())
    } else {
        Err(NoteError::TitleRequired)
    }
}

/// Positive codes are successes; anything else, including a store error, is a
/// failure with no payload.
fn to_status(
    op: &'static str,
    outcome: Result<i64, StoreError>,
    success: &'static str,
    failure: &'static str,
) -> Resource<i64> {
    match outcome {
        Ok(code) if code > 0 => {
            info!(op, code, "note {op} succeeded");
            Resource::success(code, success)
        }
        Ok(code) => {
            warn!(op, code, "note {op} reported no change");
            Resource::error(None, failure)
        }
        Err(err) => {
            warn!(?err, op, "note {op} failed in store");
            Resource::error(None, failure)
        }
    }
}
