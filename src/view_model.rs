use crate::error::NoteError;
use crate::model::Note;
use crate::observable::{LiveSlot, Observer};
use crate::repository::{check_title, NoteRepository, StatusEvent};
use tracing::debug;

/// Holds the note being edited and routes saves to insert or update.
#[derive(Debug)]
pub struct NoteViewModel {
    repository: NoteRepository,
    note: LiveSlot<Note>,
    is_new_note: bool,
}

impl NoteViewModel {
    pub fn new(repository: NoteRepository) -> Self {
        Self {
            repository,
            note: LiveSlot::new(),
            is_new_note: false,
        }
    }

    /// Replace the held note. A note without a title is rejected and the
    /// previous one is kept.
    pub fn set_note(&mut self, note: Note) -> Result<(), NoteError> {
        check_title(&note)?;
        self.note.set(note);
        Ok(())
    }

    pub fn set_is_new_note(&mut self, is_new_note: bool) {
        self.is_new_note = is_new_note;
    }

    pub fn is_new_note(&self) -> bool {
        self.is_new_note
    }

    pub fn observe_note(&self) -> Observer<Note> {
        self.note.observe()
    }

    pub fn observe_notes(&self) -> Observer<Vec<Note>> {
        self.repository.get_notes()
    }

    /// Insert or update the held note depending on [`Self::is_new_note`].
    /// Must be called from within a Tokio runtime.
    pub fn save_note(&self) -> Result<StatusEvent, NoteError> {
        let note = self.note.get().ok_or(NoteError::NoteNotSet)?;
        if !note.has_content() {
            return Err(NoteError::ContentRequired);
        }
        debug!(is_new_note = self.is_new_note, id = note.id, "saving note");
        if self.is_new_note {
            self.repository.insert_note(&note)
        } else {
            self.repository.update_note(&note)
        }
    }
}
