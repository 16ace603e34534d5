//! Core trait definitions
//!
//! These traits are the seams between the prompt logic and the outside
//! world: where bytes are persisted and where copied text ends up.

use crate::utils::error::AppResult;

/// Synchronous string key-value storage
///
/// Mirrors the shape of a browser's `localStorage`: whole values are read and
/// written at once, and there are no partial updates.
pub trait KeyValueBackend {
    /// Read the value stored under `key`, if any
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Remove the value stored under `key`; absent keys are not an error
    fn remove_item(&mut self, key: &str) -> AppResult<()>;
}

/// Destination for copied prompt text
pub trait ClipboardSink {
    /// Place `text` on the clipboard
    ///
    /// Implementations report a missing clipboard facility and a failed copy
    /// as `AppError::Clipboard` with a user-facing message.
    fn copy_text(&mut self, text: &str) -> AppResult<()>;
}
