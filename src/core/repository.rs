//! In-memory prompt repository
//!
//! Holds the ordered collection and the id of the prompt currently loaded in
//! the editor. The selection never owns a prompt; removing the selected
//! prompt clears it.

use tracing::{debug, error, warn};

use crate::core::data::{Prompt, PromptCollection};
use crate::core::id::IdGenerator;
use crate::utils::markup;

/// Title stored when an update arrives with an empty title
pub const FALLBACK_TITLE: &str = "Sem título";
/// Content stored when an update arrives with empty content
pub const FALLBACK_CONTENT: &str = "Sem conteúdo";

#[derive(Debug, Default)]
pub struct PromptRepository {
    collection: PromptCollection,
    selected: Option<String>,
    ids: IdGenerator,
}

impl PromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from stored prompts. Duplicate ids keep their
    /// first occurrence. Nothing is selected.
    pub fn from_prompts(prompts: Vec<Prompt>) -> Self {
        let mut collection = PromptCollection::from(prompts);
        let dropped = collection.dedup_ids();
        if dropped > 0 {
            warn!(dropped, "dropped prompts with duplicate ids");
        }

        let mut ids = IdGenerator::new();
        for prompt in collection.iter() {
            ids.observe(&prompt.id);
        }

        Self {
            collection,
            selected: None,
            ids,
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.collection.prompts
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, id: &str) -> Option<&Prompt> {
        if !self.collection.contains(id) {
            return None;
        }
        self.selected = Some(id.to_string());
        self.collection.find(id)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Insert a new prompt at the front and select it.
    ///
    /// Returns `None` without touching anything when the title or the text
    /// of the content is empty.
    pub fn create(&mut self, title: &str, content: &str) -> Option<&Prompt> {
        let title = title.trim();
        if title.is_empty() || markup::is_blank(content) {
            return None;
        }

        // The generator never repeats a token, so one more attempt than there
        // are prompts always finds a free id
        let attempts = self.collection.len() + 1;
        let Some(id) = (0..attempts)
            .map(|_| self.ids.next_id())
            .find(|id| !self.collection.contains(id))
        else {
            error!(attempts, "no free prompt id found");
            return None;
        };

        debug!(%id, "creating prompt");
        self.collection
            .insert_front(Prompt::new(id.clone(), title.to_string(), content.to_string()));
        self.selected = Some(id);
        self.collection.prompts.first()
    }

    /// Replace title and content of an existing prompt in place.
    ///
    /// Empty values are stored as [`FALLBACK_TITLE`] / [`FALLBACK_CONTENT`].
    pub fn update(&mut self, id: &str, title: &str, content: &str) -> bool {
        let title = title.trim();
        let title = if title.is_empty() { FALLBACK_TITLE } else { title };
        let content = if content.trim().is_empty() {
            FALLBACK_CONTENT
        } else {
            content
        };

        let updated = self
            .collection
            .update(id, title.to_string(), content.to_string());
        debug!(%id, updated, "updating prompt");
        updated
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.collection.remove(id).is_some();
        if removed && self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        debug!(%id, removed, "removing prompt");
        removed
    }

    pub fn find(&self, id: &str) -> Option<&Prompt> {
        self.collection.find(id)
    }

    pub fn filter(&self, query: &str) -> Vec<&Prompt> {
        self.collection.filter(query)
    }

    #[cfg(test)]
    pub(crate) fn collection_mut(&mut self) -> &mut PromptCollection {
        &mut self.collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn prompt(id: &str, title: &str) -> Prompt {
        Prompt::new(id.to_string(), title.to_string(), "body".to_string())
    }

    fn assert_unique_ids(repo: &PromptRepository) {
        let ids: HashSet<_> = repo.prompts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), repo.len());
    }

    #[test]
    fn test_create_inserts_front_and_selects() {
        let mut repo = PromptRepository::from_prompts(vec![prompt("a", "Old")]);
        let id = repo.create("  New  ", "<p>text</p>").unwrap().id.clone();

        assert_eq!(repo.prompts()[0].id, id);
        assert_eq!(repo.prompts()[0].title, "New");
        assert_eq!(repo.prompts()[0].content, "<p>text</p>");
        assert_eq!(repo.selected(), Some(id.as_str()));
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_create_after_largest_possible_id() {
        for stored in ["3w5e11264sgsf", "3w5e11264sgse"] {
            let mut repo = PromptRepository::from_prompts(vec![prompt(stored, "Edge")]);
            let first = repo.create("One", "body").unwrap().id.clone();
            let second = repo.create("Two", "body").unwrap().id.clone();

            assert_ne!(first, stored);
            assert_ne!(second, first);
            assert_eq!(repo.len(), 3);
            assert_unique_ids(&repo);
        }
    }

    #[test]
    fn test_create_rejects_empty_fields() {
        let mut repo = PromptRepository::new();
        assert!(repo.create("   ", "body").is_none());
        assert!(repo.create("title", "<div> </div>").is_none());
        assert!(repo.is_empty());
        assert!(repo.selected().is_none());
    }

    #[test]
    fn test_update_in_place_with_fallbacks() {
        let mut repo =
            PromptRepository::from_prompts(vec![prompt("a", "A"), prompt("b", "B"), prompt("c", "C")]);

        assert!(repo.update("b", "Bee", "<b>new</b>"));
        assert_eq!(repo.prompts()[1].title, "Bee");
        assert_eq!(repo.prompts()[0].title, "A");
        assert_eq!(repo.prompts()[2].title, "C");

        assert!(repo.update("b", " ", ""));
        assert_eq!(repo.prompts()[1].title, FALLBACK_TITLE);
        assert_eq!(repo.prompts()[1].content, FALLBACK_CONTENT);

        assert!(!repo.update("missing", "x", "y"));
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_remove_clears_matching_selection() {
        let mut repo = PromptRepository::from_prompts(vec![prompt("a", "A"), prompt("b", "B")]);
        repo.select("a");
        assert!(repo.remove("b"));
        assert_eq!(repo.selected(), Some("a"));
        assert!(repo.remove("a"));
        assert!(repo.selected().is_none());
        assert!(!repo.remove("a"));
    }

    #[test]
    fn test_select_unknown_id_keeps_selection() {
        let mut repo = PromptRepository::from_prompts(vec![prompt("a", "A")]);
        assert!(repo.select("a").is_some());
        assert!(repo.select("zz").is_none());
        assert_eq!(repo.selected(), Some("a"));
    }

    #[test]
    fn test_ids_stay_unique_across_operations() {
        let mut repo = PromptRepository::from_prompts(vec![prompt("zzzzzzzz", "Future")]);
        for i in 0..20 {
            repo.create(&format!("p{}", i), "x").unwrap();
            if i % 3 == 0 {
                let id = repo.prompts()[1].id.clone();
                repo.update(&id, "edited", "y");
            }
            if i % 5 == 0 {
                let id = repo.prompts()[0].id.clone();
                repo.remove(&id);
            }
            assert_unique_ids(&repo);
        }
    }

    #[test]
    fn test_loaded_duplicates_are_dropped() {
        let repo = PromptRepository::from_prompts(vec![prompt("a", "First"), prompt("a", "Second")]);
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find("a").map(|p| p.title.as_str()), Some("First"));
    }

    #[test]
    fn test_filter_delegates_to_collection() {
        let repo = PromptRepository::from_prompts(vec![prompt("a", "Alpha"), prompt("b", "beta")]);
        assert_eq!(repo.filter("A").len(), 2);
        assert_eq!(repo.filter("alp").len(), 1);
    }
}
