//! Persistent prompt storage
//!
//! The whole collection lives as one JSON array under a single key of a
//! [`KeyValueBackend`]. Reads and writes are all-or-nothing. Failures on
//! either side are logged and swallowed so a broken store never stops the
//! application from running.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, error, warn};

use crate::core::data::Prompt;
use crate::core::traits::KeyValueBackend;
use crate::utils::error::{AppError, AppResult};

/// Key under which the prompt collection is stored
pub const STORAGE_KEY: &str = "prompts_storage_data";

/// Backend storing each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            quota: None,
        }
    }

    /// Refuse single values larger than `quota` bytes
    pub fn with_quota(mut self, quota: Option<usize>) -> Self {
        self.quota = quota;
        self
    }

    pub fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(AppError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueBackend for FileBackend {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        if let Some(quota) = self.quota
            && value.len() > quota
        {
            return Err(AppError::Storage(format!(
                "Quota exceeded: {} bytes needed, {} allowed",
                value.len(),
                quota
            )));
        }
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        // Write next to the target and rename so readers never see half a file
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .map_err(|e| AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e)))?;
        std::fs::rename(&tmp, &path).map_err(|e| {
            AppError::Storage(format!("Failed to replace {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

/// In-process backend with an optional size quota in bytes
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    items: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: HashMap::new(),
            quota: Some(quota),
        }
    }

    fn used_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        if let Some(quota) = self.quota {
            let needed = self.used_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(AppError::Storage(format!(
                    "Quota exceeded: {} bytes needed, {} allowed",
                    needed, quota
                )));
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Backend chosen at startup: on disk, or in memory for throwaway sessions
#[derive(Debug, Clone)]
pub enum Backend {
    File(FileBackend),
    Memory(MemoryBackend),
}

impl KeyValueBackend for Backend {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Backend::File(b) => b.get_item(key),
            Backend::Memory(b) => b.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Backend::File(b) => b.set_item(key, value),
            Backend::Memory(b) => b.set_item(key, value),
        }
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        match self {
            Backend::File(b) => b.remove_item(key),
            Backend::Memory(b) => b.remove_item(key),
        }
    }
}

/// Loads and saves the prompt collection through a backend
#[derive(Debug)]
pub struct PromptStore<B: KeyValueBackend> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> PromptStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Read the stored collection. Absent or unreadable data yields an
    /// empty collection.
    pub fn load(&self) -> Vec<Prompt> {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored prompts");
                return Vec::new();
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "failed to read stored prompts");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Prompt>>(&raw) {
            Ok(prompts) => {
                debug!(key = %self.key, count = prompts.len(), "loaded prompts");
                prompts
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "failed to parse stored prompts");
                Vec::new()
            }
        }
    }

    /// Serialize and write the full collection, reporting any failure
    pub fn try_save(&mut self, prompts: &[Prompt]) -> AppResult<()> {
        let content = serde_json::to_string(prompts)
            .map_err(|e| AppError::Storage(format!("Failed to serialize prompts: {}", e)))?;
        self.backend.set_item(&self.key, &content)
    }

    /// Write the full collection. Failures are logged and otherwise ignored;
    /// the in-memory state stays authoritative for the running session.
    pub fn save(&mut self, prompts: &[Prompt]) {
        match self.try_save(prompts) {
            Ok(()) => debug!(key = %self.key, count = prompts.len(), "saved prompts"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to save prompts"),
        }
    }
}
