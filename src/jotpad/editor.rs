//! External editor integration.
//!
//! The editor is the rich-text surface: whatever markup it produces becomes
//! the note body, untouched.

use crate::error::{JotpadError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Title and body as laid out in an editor buffer: `title\n\nbody`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub body: String,
}

impl EditorContent {
    pub fn new(title: String, body: String) -> Self {
        Self { title, body }
    }

    pub fn to_buffer(&self) -> String {
        format!("{}\n\n{}", self.title, self.body)
    }

    /// First line is the title. One blank separator line is dropped if
    /// present; everything after is the body.
    pub fn from_buffer(buffer: &str) -> Self {
        let (title, rest) = match buffer.split_once('\n') {
            Some((title, rest)) => (title, rest),
            None => (buffer, ""),
        };
        let body = match rest.strip_prefix('\n') {
            Some(body) => body,
            None if rest.starts_with("\r\n") => &rest[2..],
            None => rest,
        };
        Self {
            title: title.trim_end_matches('\r').to_string(),
            body: body.trim_end_matches(['\n', '\r']).to_string(),
        }
    }
}

/// Editor command: `$EDITOR`, then `$VISUAL`, then the first of
/// vim/vi/nano found on the path.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(JotpadError::Editor(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens `file_path` in the editor and returns its contents once the
/// editor exits.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    // $EDITOR may carry arguments, e.g. "code --wait"
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| JotpadError::Editor("Editor command is empty".to_string()))?;

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| JotpadError::Editor(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(JotpadError::Editor(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(fs::read_to_string(path)?)
}

/// Round-trips `initial` through the editor via a temporary `.html` file.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join(format!("jotpad-{}.html", uuid::Uuid::new_v4()));
    fs::write(&temp_file, initial.to_buffer())?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result?))
}
