//! promptpad - a personal library of reusable prompts
//!
//! Prompts (a title plus rich-text content) live in an ordered collection
//! persisted as one JSON document in a key-value store. An
//! [`AppController`] drives the session: edit, save, select, delete,
//! search and copy. The `promptpad` binary puts a command line and an
//! interactive shell in front of it.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod manager;
pub mod utils;
pub mod view;

// Re-export core types and traits for easier use
pub use crate::app::{AppController, SaveOutcome};
pub use crate::core::{
    data::{Prompt, PromptCollection},
    editor::{EditorModel, Field},
    repository::PromptRepository,
    store::{Backend, FileBackend, MemoryBackend, PromptStore, STORAGE_KEY},
    traits::{ClipboardSink, KeyValueBackend},
};
pub use crate::utils::error::{AppError, AppResult};
pub use crate::view::{ListAction, ListEntry, ListFormat, ListView, MarkupPolicy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
