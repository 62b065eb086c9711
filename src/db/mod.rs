//! Database module: SQL functions and the store built on them.
//!
//! - `repo`: SQL-only functions over the `notes` table.
//! - `store`: the [`NoteStore`] capability and its SQLite implementation,
//!   which republishes the table to observers after every mutation.

pub mod repo;
pub mod store;

pub use repo::{init_pool, run_migrations, Pool};
pub use store::{NoteStore, SqliteNoteStore};
