#![allow(dead_code)]

use async_trait::async_trait;
use notetaker::error::StoreError;
use notetaker::model::Note;
use notetaker::observable::{LiveSlot, Observer};
use notetaker::NoteStore;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const TIMESTAMP_1: &str = "05-2019";
pub const TIMESTAMP_2: &str = "06-2019";

pub fn test_note_1() -> Note {
    Note::new(
        "Take out the trash",
        Some("It's garbage day tomorrow."),
        TIMESTAMP_1,
    )
}

pub fn test_note_2() -> Note {
    Note::new(
        "Anniversary gift",
        Some("Buy an anniversary gift."),
        TIMESTAMP_2,
    )
}

pub fn test_notes() -> Vec<Note> {
    let mut first = test_note_1();
    first.id = 1;
    let mut second = test_note_2();
    second.id = 2;
    vec![first, second]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Insert(Note),
    Update(Note),
    Delete(Note),
}

/// Store fake: answers mutations from a script (defaulting to `Ok(1)`) and
/// records every call it receives.
#[derive(Clone, Default)]
pub struct RecordingStore {
    responses: Arc<Mutex<VecDeque<Result<i64, StoreError>>>>,
    calls: Arc<Mutex<Vec<Call>>>,
    notes: Arc<LiveSlot<Vec<Note>>>,
}

impl RecordingStore {
    pub fn with_responses(responses: Vec<Result<i64, StoreError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            ..Default::default()
        }
    }

    pub fn publish_notes(&self, notes: Vec<Note>) {
        self.notes.set(notes);
    }

    pub async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    async fn respond(&self, call: Call) -> Result<i64, StoreError> {
        self.calls.lock().await.push(call);
        let mut guard = self.responses.lock().await;
        guard.pop_front().unwrap_or(Ok(1))
    }
}

#[async_trait]
impl NoteStore for RecordingStore {
    async fn insert_note(&self, note: &Note) -> Result<i64, StoreError> {
        self.respond(Call::Insert(note.clone())).await
    }

    async fn update_note(&self, note: &Note) -> Result<i64, StoreError> {
        self.respond(Call::Update(note.clone())).await
    }

    async fn delete_note(&self, note: &Note) -> Result<i64, StoreError> {
        self.respond(Call::Delete(note.clone())).await
    }

    fn notes(&self) -> Observer<Vec<Note>> {
        self.notes.observe()
    }
}
