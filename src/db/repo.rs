use crate::error::StoreError;
use crate::model::Note;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::instrument;

pub type Pool = SqlitePool;

pub async fn init_pool(database_url: &str) -> Result<Pool, StoreError> {
    let normalized = prepare_sqlite_url(database_url);
    if is_memory_url(&normalized) {
        // Every connection to a shared in-memory database keeps it alive; one is enough.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(&normalized)
            .await?;
        return Ok(pool);
    }
    let pool = SqlitePool::connect(&normalized).await?;
    sqlx::query("PRAGMA journal_mode=WAL;")
        .execute(&pool)
        .await?;
    sqlx::query("PRAGMA synchronous=FULL;")
        .execute(&pool)
        .await?;
    Ok(pool)
}

fn is_memory_url(url: &str) -> bool {
    url.starts_with("sqlite::memory") || url.contains(":memory:")
}

/// If using a file-backed SQLite URL, expand a leading `~/`, ensure the parent
/// directory exists and ask SQLite to create the file. Leaves in-memory URLs
/// untouched.
fn prepare_sqlite_url(url: &str) -> String {
    if !url.starts_with("sqlite:") || is_memory_url(url) {
        return url.to_string();
    }

    let rest = &url["sqlite:".len()..];
    let path_with_query = rest.strip_prefix("//").unwrap_or(rest);

    let (path_part, query_part) = match path_with_query.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path_with_query, None),
    };

    if path_part.is_empty() {
        return url.to_string();
    }

    let expanded_path = match (path_part.strip_prefix("~/"), std::env::var("HOME")) {
        (Some(rest), Ok(home)) => format!("{}/{}", home.trim_end_matches('/'), rest),
        _ => path_part.to_string(),
    };

    if let Some(parent) = std::path::Path::new(&expanded_path).parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }

    let mut rebuilt = String::from("sqlite://");
    rebuilt.push_str(&expanded_path);
    match query_part {
        Some(q) if q.contains("mode=") => {
            rebuilt.push('?');
            rebuilt.push_str(q);
        }
        Some(q) => {
            rebuilt.push('?');
            rebuilt.push_str(q);
            rebuilt.push_str("&mode=rwc");
        }
        None => rebuilt.push_str("?mode=rwc"),
    }
    rebuilt
}

pub async fn run_migrations(pool: &Pool) -> Result<(), StoreError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Insert a note and return its id. A non-positive `note.id` lets SQLite
/// assign one.
#[instrument(skip_all)]
pub async fn insert_note(pool: &Pool, note: &Note) -> Result<i64, StoreError> {
    let query = if note.id > 0 {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO notes (id, title, content, timestamp) VALUES (?, ?, ?, ?) RETURNING id",
        )
        .bind(note.id)
    } else {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO notes (title, content, timestamp) VALUES (?, ?, ?) RETURNING id",
        )
    };
    query
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.timestamp)
        .fetch_one(pool)
        .await
        .map_err(StoreError::from_sqlx)
}

/// Rewrite the row matching `note.id`; returns the number of rows affected.
#[instrument(skip_all)]
pub async fn update_note(pool: &Pool, note: &Note) -> Result<i64, StoreError> {
    let res = sqlx::query("UPDATE notes SET title = ?, content = ?, timestamp = ? WHERE id = ?")
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.timestamp)
        .bind(note.id)
        .execute(pool)
        .await
        .map_err(StoreError::from_sqlx)?;
    Ok(res.rows_affected() as i64)
}

#[instrument(skip_all)]
pub async fn delete_note(pool: &Pool, note: &Note) -> Result<i64, StoreError> {
    let res = sqlx::query("DELETE FROM notes WHERE id = ?")
        .bind(note.id)
        .execute(pool)
        .await
        .map_err(StoreError::from_sqlx)?;
    Ok(res.rows_affected() as i64)
}

/// All notes in insertion order.
#[instrument(skip_all)]
pub async fn list_notes(pool: &Pool) -> Result<Vec<Note>, StoreError> {
    let notes = sqlx::query_as::<_, Note>(
        "SELECT id, title, content, timestamp FROM notes ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(notes)
}

#[instrument(skip_all)]
pub async fn find_note(pool: &Pool, id: i64) -> Result<Option<Note>, StoreError> {
    let note = sqlx::query_as::<_, Note>(
        "SELECT id, title, content, timestamp FROM notes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(note)
}
