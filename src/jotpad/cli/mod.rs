//! # CLI Layer
//!
//! One UI client for jotpad. This is the only place that knows about the
//! terminal: argument parsing, prompts, colors and process exit codes.
//! Everything else goes through [`JotpadApi`].
//!
//! - `run()`: dispatch, called by `main.rs`
//! - `init_context()`: resolves the data directory and builds the API
//! - `handle_*()`: one per command; call the API, print the `CmdResult`

mod prompt;
mod render;
pub mod setup;
mod styles;

use chrono::Utc;
use directories::ProjectDirs;
use jotpad::api::{ConfigAction, JotpadApi};
use jotpad::commands::confirm::ConfirmAction;
use jotpad::config::JotpadConfig;
use jotpad::editor::{edit_content, EditorContent};
use jotpad::error::{JotpadError, Result};
use jotpad::store::fs_backend::FsBackend;
use jotpad::store::NoteStore;
use render::{print_full_notes, print_messages, print_notes};
use setup::{Cli, Commands};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::debug;

pub const DATA_DIR_ENV: &str = "JOTPAD_DATA";

struct AppContext {
    api: JotpadApi<FsBackend>,
    config: JotpadConfig,
}

pub fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&mut ctx),
        Some(Commands::View { indexes }) => handle_view(&mut ctx, indexes),
        Some(Commands::Create {
            title,
            body,
            no_editor,
        }) => handle_create(&mut ctx, title.join(" "), body, no_editor),
        Some(Commands::Edit {
            index,
            title,
            body,
            no_editor,
        }) => handle_edit(&mut ctx, index, title, body, no_editor),
        Some(Commands::Delete { indexes, yes }) => handle_delete(&mut ctx, indexes, yes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn resolve_data_dir(flag: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "jotpad", "jotpad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| JotpadError::Config("Could not determine a data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.as_ref())?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = JotpadConfig::load(&data_dir)?;
    let store = NoteStore::new(FsBackend::new(data_dir.clone())).with_key(config.storage_key.clone());
    let api = JotpadApi::new(store, data_dir);

    Ok(AppContext { api, config })
}

fn handle_list(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_notes(&result.listed_notes, ctx.config.preview_chars, Utc::now());
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_notes(&indexes)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

/// Piped stdin, if any and non-blank.
fn read_piped_stdin() -> Option<String> {
    if std::io::stdin().is_terminal() {
        return None;
    }
    let mut buffer = String::new();
    match std::io::stdin().read_to_string(&mut buffer) {
        Ok(_) if !buffer.trim().is_empty() => Some(buffer),
        _ => None,
    }
}

/// Body given up front: `--body`, else piped stdin. With `--no-editor`
/// stdin is never read, so a non-interactive stdin that stays open cannot
/// block the command.
fn supplied_body<F>(body: Option<String>, no_editor: bool, piped: F) -> Option<String>
where
    F: FnOnce() -> Option<String>,
{
    match body {
        Some(body) => Some(body),
        None if no_editor => None,
        None => piped(),
    }
}

fn handle_create(
    ctx: &mut AppContext,
    title: String,
    body: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (title, body) = match supplied_body(body, no_editor, read_piped_stdin) {
        Some(body) => (title, body),
        None if no_editor => (title, String::new()),
        None => {
            let edited = edit_content(&EditorContent::new(title, String::new()))?;
            (edited.title, edited.body)
        }
    };

    let result = ctx.api.create_note(title, body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: String,
    title: Option<String>,
    body: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let current = ctx.api.view_notes(&[index.as_str()])?;
    let Some(dn) = current.listed_notes.into_iter().next() else {
        return Ok(());
    };

    let (title, body) = if title.is_some() || body.is_some() || no_editor {
        (
            title.unwrap_or(dn.note.title),
            body.unwrap_or(dn.note.body),
        )
    } else {
        let edited = edit_content(&EditorContent::new(dn.note.title, dn.note.body))?;
        (edited.title, edited.body)
    };

    let result = ctx.api.update_note(&index, title, body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>, yes: bool) -> Result<()> {
    let action = ctx.api.confirm_delete(&indexes)?;
    if !confirmed(ctx, &action, yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    let result = ctx.api.delete_notes(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !confirmed(ctx, &ConfirmAction::DeleteAll, yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    let result = ctx.api.delete_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn confirmed(ctx: &AppContext, action: &ConfirmAction, yes: bool) -> Result<bool> {
    if yes || !ctx.config.confirm_deletes {
        return Ok(true);
    }
    prompt::confirm(action)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::Get(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    Ok(())
}
