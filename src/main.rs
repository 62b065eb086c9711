use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use notetaker::config::{self, Config};
use notetaker::model::{timestamp_now, Note, Resource};
use notetaker::{NoteRepository, NoteViewModel, SqliteNoteStore};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to YAML config file
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every note
    List {
        /// Emit JSON instead of one line per note
        #[arg(long)]
        json: bool,
    },
    /// Create a note
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
        /// Defaults to the current month, MM-YYYY
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Change an existing note
    Edit {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Remove a note
    Delete {
        #[arg(long)]
        id: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = if args.config.exists() {
        config::load(Some(args.config.as_path()))
            .with_context(|| format!("failed to load {}", args.config.display()))?
    } else {
        info!(path = %args.config.display(), "no config file; using defaults");
        Config::default()
    };
    cfg.ensure_dirs()?;

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| cfg.database_url());
    let store = SqliteNoteStore::open(&database_url)
        .await
        .with_context(|| format!("failed to open {database_url}"))?;
    let repository = NoteRepository::new(Arc::new(store.clone()));

    match args.command {
        Command::List { json } => {
            let notes = repository
                .get_notes()
                .value()
                .await
                .ok_or_else(|| anyhow!("note store closed"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&notes)?);
            } else if notes.is_empty() {
                println!("no notes");
            } else {
                for note in &notes {
                    println!(
                        "{:>4}  {:<8} {}  {}",
                        note.id,
                        note.timestamp,
                        note.title,
                        note.content.as_deref().unwrap_or("")
                    );
                }
            }
        }
        Command::Add {
            title,
            content,
            timestamp,
        } => {
            let note = Note::new(title, content, timestamp.unwrap_or_else(timestamp_now));
            let mut view_model = NoteViewModel::new(repository);
            view_model.set_note(note)?;
            view_model.set_is_new_note(true);
            report(view_model.save_note()?.await)?;
        }
        Command::Edit {
            id,
            title,
            content,
            timestamp,
        } => {
            let mut note = store
                .find_note(id)
                .await?
                .ok_or_else(|| anyhow!("no note with id {id}"))?;
            if let Some(title) = title {
                note.title = title;
            }
            if content.is_some() {
                note.content = content;
            }
            if let Some(timestamp) = timestamp {
                note.timestamp = timestamp;
            }
            let mut view_model = NoteViewModel::new(repository);
            view_model.set_note(note)?;
            view_model.set_is_new_note(false);
            report(view_model.save_note()?.await)?;
        }
        Command::Delete { id } => {
            let note = Note {
                id,
                ..Note::default()
            };
            report(repository.delete_note(&note)?.await)?;
        }
    }

    Ok(())
}

fn report(outcome: Option<Resource<i64>>) -> Result<()> {
    let resource = outcome.ok_or_else(|| anyhow!("operation was dropped before completing"))?;
    let message = resource.message.as_deref().unwrap_or_default();
    if resource.is_success() {
        match resource.data {
            Some(code) => println!("{message} ({code})"),
            None => println!("{message}"),
        }
        Ok(())
    } else {
        warn!(status = resource.status.as_str(), "operation failed");
        Err(anyhow!("{message}"))
    }
}
