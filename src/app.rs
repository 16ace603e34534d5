//! Application controller
//!
//! Owns every piece of session state (repository, editor, search query and
//! the last rendered list) and turns user actions into repository changes,
//! persistence and a fresh render. All actions run to completion before
//! the next one starts.

use tracing::{debug, info, warn};

use crate::core::data::Prompt;
use crate::core::editor::EditorModel;
use crate::core::repository::PromptRepository;
use crate::core::store::PromptStore;
use crate::core::traits::{ClipboardSink, KeyValueBackend};
use crate::utils::error::{AppError, AppResult};
use crate::utils::markup;
use crate::view::{ListAction, ListEntry, ListView};

pub const VALIDATION_MESSAGE: &str =
    "Please fill in both the title and the content of the prompt before saving.";
pub const SAVE_SUCCESS_MESSAGE: &str = "Prompt saved successfully!";
pub const COPY_SUCCESS_MESSAGE: &str = "Content copied to clipboard!";

/// Result of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub id: String,
    /// `true` when a new prompt was created, `false` for an in-place update
    pub created: bool,
}

pub struct AppController<B: KeyValueBackend> {
    store: PromptStore<B>,
    repo: PromptRepository,
    editor: EditorModel,
    query: String,
    entries: Vec<ListEntry>,
}

impl<B: KeyValueBackend> AppController<B> {
    /// Load the stored collection and render the unfiltered list
    pub fn start(store: PromptStore<B>) -> Self {
        let repo = PromptRepository::from_prompts(store.load());
        info!(count = repo.len(), "session started");

        let mut app = Self {
            store,
            repo,
            editor: EditorModel::new(),
            query: String::new(),
            entries: Vec::new(),
        };
        app.render();
        app
    }

    pub fn repository(&self) -> &PromptRepository {
        &self.repo
    }

    pub fn editor(&self) -> &EditorModel {
        &self.editor
    }

    pub fn store(&self) -> &PromptStore<B> {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The list as last rendered
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Input on the title field
    pub fn set_title(&mut self, title: &str) {
        self.editor.set_title(title);
    }

    /// Input on the content field
    pub fn set_content(&mut self, content: &str) {
        self.editor.set_content(content);
    }

    /// Save the editor contents.
    ///
    /// Updates the selected prompt in place, or creates a new one when
    /// nothing is selected or the selection no longer resolves.
    pub fn save(&mut self) -> AppResult<SaveOutcome> {
        let title = self.editor.title().trim().to_string();
        let content = self.editor.content().trim().to_string();

        if title.is_empty() || self.editor.content_text().trim().is_empty() {
            debug!("save rejected: empty title or content");
            return Err(AppError::Validation(VALIDATION_MESSAGE.to_string()));
        }

        let selected = self.repo.selected().map(str::to_string);
        let outcome = match selected {
            Some(id) if self.repo.update(&id, &title, &content) => SaveOutcome { id, created: false },
            stale => {
                if let Some(id) = stale {
                    warn!(%id, "selected prompt no longer exists, creating a new one");
                }
                let prompt = self
                    .repo
                    .create(&title, &content)
                    .ok_or_else(|| AppError::Validation(VALIDATION_MESSAGE.to_string()))?;
                SaveOutcome {
                    id: prompt.id.clone(),
                    created: true,
                }
            }
        };

        self.render();
        self.persist();
        info!(id = %outcome.id, created = outcome.created, "prompt saved");
        Ok(outcome)
    }

    /// Switch the editor to "new prompt" mode. Stored data is untouched.
    pub fn new_prompt(&mut self) {
        self.repo.clear_selection();
        self.editor.reset_for_new();
    }

    /// Remove a prompt whether or not it is loaded in the editor.
    ///
    /// The editor keeps whatever it shows; only the selection is dropped
    /// when it pointed at the removed prompt. Nothing is written when no
    /// prompt matched `id`, since the stored collection would be unchanged.
    pub fn delete(&mut self, id: &str) -> bool {
        let removed = self.repo.remove(id);
        self.render();
        if removed {
            self.persist();
            info!(%id, "prompt deleted");
        }
        removed
    }

    /// Load a prompt into the editor and make it the selection
    pub fn select(&mut self, id: &str) -> Option<&Prompt> {
        let prompt = self.repo.select(id)?.clone();
        self.editor.load_for_edit(&prompt);
        self.repo.find(id)
    }

    /// Re-render with a new query. Selection and editor are unaffected.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();
        self.render();
    }

    /// Dispatch an action taken on a rendered list entry
    pub fn handle_list_action(&mut self, action: ListAction) -> bool {
        match action {
            ListAction::Select(id) => self.select(&id).is_some(),
            ListAction::Remove(id) => self.delete(&id),
        }
    }

    /// Copy the plain-text form of the editor content. Returns the copied text.
    pub fn copy_content(&self, clipboard: &mut dyn ClipboardSink) -> AppResult<String> {
        let text = markup::inner_text(self.editor.content());
        clipboard.copy_text(&text)?;
        debug!(chars = text.chars().count(), "copied editor content");
        Ok(text)
    }

    fn render(&mut self) {
        self.entries = ListView::render(&self.repo, &self.query);
    }

    fn persist(&mut self) {
        self.store.save(self.repo.prompts());
    }
}
