//! # Jotpad Architecture
//!
//! Jotpad keeps short titled notes with rich-text (HTML-like) bodies in a
//! single key-value slot. The library is UI-agnostic; the `jotpad` binary is
//! one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, picks exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade; note numbers → positions                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: the ordered collection, always == storage     │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering and identity
//!
//! The collection is kept newest first by each note's sort key (epoch
//! milliseconds). Positions are indexes into that order, so they shift after
//! every mutation; each note also carries a stable id for callers that need
//! to hold on to a note across changes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Note collection and storage backends
//! - [`model`]: `Note` and `Collection`
//! - [`index`]: 1-based note numbers
//! - [`selection`]: Selection sets for bulk deletion
//! - [`time`]: Clock abstraction and date formatting
//! - [`config`]: Configuration
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod model;
pub mod selection;
pub mod store;
pub mod time;
