use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotpad", bin_name = "jotpad", version)]
#[command(about = "Titled rich-text notes, newest first", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the notes and config (overrides JOTPAD_DATA)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes, newest first
    #[command(alias = "ls")]
    List,

    /// Show notes in full
    #[command(alias = "v")]
    View {
        /// Note numbers as listed (1-based)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Create a note
    #[command(alias = "n")]
    Create {
        /// Title words, joined with spaces
        title: Vec<String>,

        /// Note body (markup is kept as written)
        #[arg(long)]
        body: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Replace a note's title and body, moving it to the top
    #[command(alias = "e")]
    Edit {
        /// Note number as listed
        index: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        body: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Delete notes
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every note (also resets unreadable storage)
    Clear {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// storage-key, preview-chars or confirm-deletes
        key: Option<String>,

        value: Option<String>,
    },
}
