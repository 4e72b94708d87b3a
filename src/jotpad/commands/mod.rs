//! # Command Layer
//!
//! Business logic for each user-facing operation, one submodule per command.
//! Commands operate on a [`NoteStore`](crate::store::NoteStore) and return a
//! structured [`CmdResult`]; they never print, prompt, or exit. Deciding
//! whether to ask for confirmation is the caller's job; [`confirm`] only
//! describes what would be asked.
//!
//! Tests here run against `MemBackend` with a frozen clock.
//!
//! - [`create`]: add a note
//! - [`list`]: every note, numbered
//! - [`view`]: selected notes in full
//! - [`update`]: replace a note (moves it to the top)
//! - [`delete`]: delete one note or a selection
//! - [`clear`]: delete everything, also resets corrupt storage
//! - [`config`]: read and write settings
//! - [`confirm`]: texts for the delete confirmations

use crate::index::DisplayNote;
use serde::Serialize;

pub mod clear;
pub mod config;
pub mod confirm;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Notes created, changed, or removed by the command
    pub affected_notes: Vec<DisplayNote>,
    /// Notes to show
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }
}

/// Title as shown in messages.
pub(crate) fn label(title: &str) -> &str {
    if title.trim().is_empty() {
        "(untitled)"
    } else {
        title
    }
}
