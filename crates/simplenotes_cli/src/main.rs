//! Command-line front end for SimpleNotes.
//!
//! # Responsibility
//! - Map subcommands onto `NotesSession` operations.
//! - Render notes as plain text; ask before deleting.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use log::{info, warn};
use simplenotes_core::db::{open_db, open_db_in_memory};
use simplenotes_core::model::timestamp::format_timestamp;
use simplenotes_core::{
    core_version, init_logging, KeyValueStore, Note, NoteId, NoteStore, NotesConfig,
    NotesSession, SqliteKeyValueStore,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "simplenotes", about = "Local note taking", version)]
struct Cli {
    /// SQLite file holding the notes (overrides the config file).
    #[arg(long, global = true, conflicts_with = "ephemeral")]
    db: Option<PathBuf>,
    /// Keep notes in memory only; nothing is written to disk.
    #[arg(long, global = true)]
    ephemeral: bool,
    /// JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List notes, most recently updated first.
    List {
        /// Case-insensitive filter over title and body.
        #[arg(long, short)]
        query: Option<String>,
    },
    /// Create a note.
    Add {
        #[arg(long, short)]
        title: String,
        #[arg(long, short, default_value = "")]
        body: String,
    },
    /// Edit a note; omitted fields keep their current value.
    Edit {
        id: String,
        #[arg(long, short)]
        title: Option<String>,
        #[arg(long, short)]
        body: Option<String>,
    },
    /// Print one note.
    Show { id: String },
    /// Delete a note after confirmation.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Print the core version.
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir).context("failed to initialize logging")?;
    }

    if let Command::Version = cli.command {
        println!("simplenotes {}", core_version());
        return Ok(());
    }

    let conn = match storage_target(&config, cli.ephemeral)? {
        Some(path) => open_db(path)
            .with_context(|| format!("failed to open database `{}`", path.display()))?,
        None => open_db_in_memory().context("failed to open in-memory database")?,
    };
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let mut session = NotesSession::open(NoteStore::with_key(store, config.storage_key.clone()));

    run(&mut session, cli.command)
}

fn resolve_config(cli: &Cli) -> Result<NotesConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => NotesConfig::load(path)?,
        None => NotesConfig::default(),
    };
    if let Some(db) = cli.db.clone() {
        config.db_path = Some(db);
    }
    if let Some(log_dir) = cli.log_dir.clone() {
        config.log_dir = Some(log_dir);
    }
    if let Some(level) = cli.log_level.clone() {
        config.log_level = level;
    }
    config.validate()?;
    Ok(config)
}

/// Picks the database file, or `None` for an in-memory store.
///
/// In-memory storage is only used when asked for; a missing data directory
/// is an error rather than a silent loss of every note on exit.
fn storage_target(config: &NotesConfig, ephemeral: bool) -> Result<Option<&Path>> {
    if ephemeral {
        warn!("event=storage_select module=cli status=ephemeral");
        eprintln!("warning: --ephemeral set; notes will not be saved");
        return Ok(None);
    }
    match config.db_path.as_deref() {
        Some(path) => Ok(Some(path)),
        None => bail!(
            "no data directory found for the notes database; pass --db <path> or --ephemeral"
        ),
    }
}

fn run<S: KeyValueStore>(session: &mut NotesSession<S>, command: Command) -> Result<()> {
    match command {
        Command::List { query } => {
            session.set_query(query.unwrap_or_default());
            let toolbar = session.toolbar();
            match toolbar.filter {
                Some(filter) => println!("{} (filter: \"{filter}\")", toolbar.count_label),
                None => println!("{}", toolbar.count_label),
            }
            let visible = session.visible_notes();
            if visible.is_empty() && session.notes().is_empty() {
                println!("No notes yet. Create one with `simplenotes add --title <title>`.");
            }
            for note in visible {
                println!(
                    "{}  {}  {}",
                    note.id,
                    format_timestamp(&note.updated_at),
                    note.title
                );
            }
        }
        Command::Add { title, body } => {
            session.open_create();
            session.editor_mut().set_title(title);
            session.editor_mut().set_body(body);
            let note = session.save_editor()?;
            info!("event=cli_add module=cli status=ok");
            println!("{}", note.id);
        }
        Command::Edit { id, title, body } => {
            let id = NoteId::parse(id)?;
            session.open_edit(&id)?;
            if let Some(title) = title {
                session.editor_mut().set_title(title);
            }
            if let Some(body) = body {
                session.editor_mut().set_body(body);
            }
            let note = session.save_editor()?;
            info!("event=cli_edit module=cli status=ok");
            print_note(&note);
        }
        Command::Show { id } => {
            let id = NoteId::parse(id)?;
            let note = session
                .find(&id)
                .with_context(|| format!("note not found: {id}"))?;
            print_note(note);
        }
        Command::Delete { id, yes } => {
            let id = NoteId::parse(id)?;
            let confirmation = session.request_delete(&id)?;
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(confirmation.prompt())
                    .default(false)
                    .interact()?;
            if confirmed {
                let removed = session.confirm_delete(confirmation)?;
                info!("event=cli_delete module=cli status=ok");
                println!("Deleted {}", removed.id);
            } else {
                drop(confirmation);
                println!("Cancelled.");
            }
        }
        Command::Version => println!("simplenotes {}", core_version()),
    }
    Ok(())
}

fn print_note(note: &Note) {
    println!("{}", note.title);
    if !note.body.is_empty() {
        println!();
        println!("{}", note.body);
    }
    println!();
    println!("Created: {}", format_timestamp(&note.created_at));
    if note.was_edited() {
        println!("Updated: {}", format_timestamp(&note.updated_at));
    }
    println!("Id: {}", note.id);
}
