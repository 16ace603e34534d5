// Command handlers, one module per concern
pub mod config;    // Configuration management
pub mod crud;      // Add, show, edit, delete
pub mod query;     // List and copy
pub mod shell;     // Interactive session

pub use config::handle_config_command;
pub use crud::{handle_add_command, handle_delete_command, handle_edit_command, handle_show_command};
pub use query::{handle_copy_command, handle_list_command};
pub use shell::run_shell;

use tracing::debug;

use crate::app::AppController;
use crate::config::Config;
use crate::core::store::{Backend, FileBackend, MemoryBackend, PromptStore};

/// Storage backend for this run
pub fn open_backend(config: &Config, ephemeral: bool) -> Backend {
    let quota = config.general.storage_quota;
    if ephemeral {
        debug!("using in-memory storage");
        Backend::Memory(match quota {
            Some(quota) => MemoryBackend::with_quota(quota),
            None => MemoryBackend::new(),
        })
    } else {
        debug!(dir = %config.general.data_dir.display(), "using file storage");
        Backend::File(FileBackend::new(&config.general.data_dir).with_quota(quota))
    }
}

/// Load the stored prompts and start a controller over them
pub fn open_session(config: &Config, ephemeral: bool) -> AppController<Backend> {
    AppController::start(PromptStore::new(open_backend(config, ephemeral)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sessions_share_the_data_dir() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.general.data_dir = dir.path().to_path_buf();

        let mut app = open_session(&config, false);
        app.set_title("Persisted");
        app.set_content("body");
        app.save().unwrap();

        let reopened = open_session(&config, false);
        assert_eq!(reopened.repository().len(), 1);
        assert!(matches!(reopened.store().backend(), Backend::File(_)));
    }

    #[test]
    fn test_ephemeral_session_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.general.data_dir = dir.path().join("data");

        let mut app = open_session(&config, true);
        app.set_title("Gone");
        app.set_content("soon");
        app.save().unwrap();

        assert!(!dir.path().join("data").exists());
        assert!(open_session(&config, true).repository().is_empty());
    }
}
