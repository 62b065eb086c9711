use super::repo::{self, Pool};
use crate::error::StoreError;
use crate::model::Note;
use crate::observable::{LiveSlot, Observer};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

/// Persistence capability the repository is built on.
///
/// Mutations return the raw result code of the underlying engine: the
/// generated id for inserts, the number of rows affected otherwise.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn insert_note(&self, note: &Note) -> Result<i64, StoreError>;

    async fn update_note(&self, note: &Note) -> Result<i64, StoreError>;

    async fn delete_note(&self, note: &Note) -> Result<i64, StoreError>;

    /// Every note in insertion order, republished after each mutation.
    fn notes(&self) -> Observer<Vec<Note>>;
}

/// [`NoteStore`] over a SQLite pool.
#[derive(Clone)]
pub struct SqliteNoteStore {
    pool: Pool,
    notes: Arc<LiveSlot<Vec<Note>>>,
    // Held across "mutate, re-read, publish" so publishes land in commit order.
    writer: Arc<Mutex<()>>,
}

impl std::fmt::Debug for SqliteNoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteNoteStore").finish_non_exhaustive()
    }
}

impl SqliteNoteStore {
    /// Wrap an already migrated pool and publish the current table contents.
    pub async fn new(pool: Pool) -> Result<Self, StoreError> {
        let current = repo::list_notes(&pool).await?;
        Ok(Self {
            pool,
            notes: Arc::new(LiveSlot::with_value(current)),
            writer: Arc::new(Mutex::new(())),
        })
    }

    /// Open (creating if needed) the database at `database_url` and run migrations.
    pub async fn open(database_url: &str) -> Result<Self, StoreError> {
        let pool = repo::init_pool(database_url).await?;
        repo::run_migrations(&pool).await?;
        Self::new(pool).await
    }

    /// Fresh, empty in-memory database.
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::open("sqlite::memory:").await
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub async fn find_note(&self, id: i64) -> Result<Option<Note>, StoreError> {
        repo::find_note(&self.pool, id).await
    }

    /// Publish the table after a committed change. A failed re-read is
    /// logged and leaves observers on the previous list; the change itself
    /// still stands.
    async fn republish(&self) {
        match repo::list_notes(&self.pool).await {
            Ok(notes) => {
                info!(count = notes.len(), "notes table changed");
                self.notes.set(notes);
            }
            Err(err) => warn!(?err, "failed to re-read notes after a change"),
        }
    }
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    #[instrument(skip_all)]
    async fn insert_note(&self, note: &Note) -> Result<i64, StoreError> {
        let _guard = self.writer.lock().await;
        let id = repo::insert_note(&self.pool, note).await?;
        self.republish().await;
        Ok(id)
    }

    #[instrument(skip_all, fields(id = note.id))]
    async fn update_note(&self, note: &Note) -> Result<i64, StoreError> {
        let _guard = self.writer.lock().await;
        let rows = repo::update_note(&self.pool, note).await?;
        if rows > 0 {
            self.republish().await;
        }
        Ok(rows)
    }

    #[instrument(skip_all, fields(id = note.id))]
    async fn delete_note(&self, note: &Note) -> Result<i64, StoreError> {
        let _guard = self.writer.lock().await;
        let rows = repo::delete_note(&self.pool, note).await?;
        if rows > 0 {
            self.republish().await;
        }
        Ok(rows)
    }

    fn notes(&self) -> Observer<Vec<Note>> {
        self.notes.observe()
    }
}
