//! # API Facade
//!
//! The single entry point for every jotpad operation, whatever the UI.
//!
//! The facade:
//! - **Dispatches** to the matching command in `commands/`
//! - **Normalizes inputs**: user-facing note numbers ("1", "3") become
//!   [`DisplayIndex`] values, and from there store positions
//! - **Returns structured types** (`Result<CmdResult>`), never strings
//!
//! It holds no business logic and does no terminal I/O.
//!
//! `JotpadApi<B, C>` is generic over the storage backend and clock, so tests
//! run it on `MemBackend` with a frozen clock.

use crate::commands;
use crate::commands::confirm::ConfirmAction;
use crate::error::{JotpadError, Result};
use crate::index::DisplayIndex;
use crate::selection::Selection;
use crate::store::backend::StorageBackend;
use crate::store::NoteStore;
use crate::time::{Clock, SystemClock};
use std::path::PathBuf;
use std::str::FromStr;

pub struct JotpadApi<B: StorageBackend, C: Clock = SystemClock> {
    store: NoteStore<B, C>,
    config_dir: PathBuf,
}

impl<B: StorageBackend, C: Clock> JotpadApi<B, C> {
    pub fn new(store: NoteStore<B, C>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn store(&self) -> &NoteStore<B, C> {
        &self.store
    }

    pub fn list_notes(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    pub fn view_notes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes)?;
        commands::view::run(&mut self.store, &indexes)
    }

    pub fn create_note(&mut self, title: String, body: String) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, body)
    }

    pub fn update_note(
        &mut self,
        index: &str,
        title: String,
        body: String,
    ) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        commands::update::run(&mut self.store, index, title, body)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selection = self.selection(indexes)?;
        commands::delete::run(&mut self.store, &selection)
    }

    pub fn delete_all(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    /// Which confirmation deleting `indexes` calls for.
    pub fn confirm_delete<I: AsRef<str>>(&self, indexes: &[I]) -> Result<ConfirmAction> {
        Ok(ConfirmAction::for_selection(self.selection(indexes)?))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    fn selection<I: AsRef<str>>(&self, indexes: &[I]) -> Result<Selection> {
        Ok(parse_indexes(indexes)?.into_iter().collect())
    }
}

fn parse_index(input: &str) -> Result<DisplayIndex> {
    DisplayIndex::from_str(input)
        .map_err(|e| JotpadError::InvalidIndex(format!("{} ({})", input, e)))
}

fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    inputs.iter().map(|s| parse_index(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
