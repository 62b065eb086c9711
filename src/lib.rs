pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod observable;
pub mod repository;
pub mod view_model;

pub use db::{NoteStore, SqliteNoteStore};
pub use error::{NoteError, StoreError};
pub use model::{Note, Resource, Status};
pub use repository::NoteRepository;
pub use view_model::NoteViewModel;
