mod common;

use common::{test_note_1, Call, RecordingStore};
use notetaker::error::NoteError;
use notetaker::model::{Resource, INSERT_SUCCESS, NO_CONTENT_ERROR, UPDATE_SUCCESS};
use notetaker::{NoteRepository, NoteViewModel};
use std::sync::Arc;

fn setup() -> (RecordingStore, NoteViewModel) {
    let store = RecordingStore::default();
    let repository = NoteRepository::new(Arc::new(store.clone()));
    (store, NoteViewModel::new(repository))
}

#[test]
fn observe_note_when_not_set() {
    let (_store, view_model) = setup();

    assert!(view_model.observe_note().current().is_none());
}

#[tokio::test]
async fn observe_note_when_set() {
    let (_store, mut view_model) = setup();
    let note = test_note_1();

    view_model.set_note(note.clone()).unwrap();
    let observed = view_model.observe_note().value().await;

    assert_eq!(observed, Some(note));
    assert_eq!(observed.unwrap().id, 0);
}

#[tokio::test]
async fn observer_sees_replacement() {
    let (_store, mut view_model) = setup();
    view_model.set_note(test_note_1()).unwrap();
    let mut observer = view_model.observe_note();
    assert_eq!(observer.value().await, Some(test_note_1()));

    let mut edited = test_note_1();
    edited.title = "Take out the recycling".into();
    view_model.set_note(edited.clone()).unwrap();

    assert_eq!(observer.changed().await, Some(edited));
}

#[tokio::test]
async fn insert_note_returns_row() {
    let (store, mut view_model) = setup();

    view_model.set_note(test_note_1()).unwrap();
    view_model.set_is_new_note(true);
    let returned = view_model.save_note().unwrap().await;

    assert_eq!(returned, Some(Resource::success(1, INSERT_SUCCESS)));
    assert_eq!(store.calls().await, vec![Call::Insert(test_note_1())]);
}

#[tokio::test]
async fn update_note_returns_row() {
    let (store, mut view_model) = setup();
    let mut note = test_note_1();
    note.id = 1;

    view_model.set_note(note.clone()).unwrap();
    view_model.set_is_new_note(false);
    let returned = view_model.save_note().unwrap().await;

    assert_eq!(returned, Some(Resource::success(1, UPDATE_SUCCESS)));
    assert_eq!(store.calls().await, vec![Call::Update(note)]);
}

#[tokio::test]
async fn set_note_does_not_touch_repository() {
    let (store, mut view_model) = setup();

    view_model.set_note(test_note_1()).unwrap();
    view_model.set_is_new_note(true);
    tokio::task::yield_now().await;

    assert!(store.calls().await.is_empty());
}

#[test]
fn set_note_empty_title_keeps_previous_note() {
    let (_store, mut view_model) = setup();
    view_model.set_note(test_note_1()).unwrap();

    let mut note = test_note_1();
    note.title.clear();
    let err = view_model.set_note(note).unwrap_err();

    assert_eq!(err, NoteError::TitleRequired);
    assert_eq!(view_model.observe_note().current(), Some(test_note_1()));
}

#[tokio::test]
async fn save_note_without_content_fails() {
    let (store, mut view_model) = setup();
    let mut note = test_note_1();
    note.content = None;

    view_model.set_note(note).unwrap();
    view_model.set_is_new_note(true);
    let err = view_model.save_note().unwrap_err();

    assert_eq!(err.to_string(), NO_CONTENT_ERROR);
    tokio::task::yield_now().await;
    assert!(store.calls().await.is_empty());
}

#[tokio::test]
async fn save_note_with_empty_content_fails() {
    let (_store, mut view_model) = setup();
    let mut note = test_note_1();
    note.content = Some(String::new());

    view_model.set_note(note).unwrap();
    view_model.set_is_new_note(false);

    assert_eq!(view_model.save_note().unwrap_err(), NoteError::ContentRequired);
}

#[test]
fn save_note_before_set_fails() {
    let (_store, view_model) = setup();

    assert_eq!(view_model.save_note().unwrap_err(), NoteError::NoteNotSet);
}
