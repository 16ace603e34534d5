//! Core data structures for prompt management
//!
//! A prompt is a titled piece of rich text. The collection keeps prompts in
//! display order: newest-created first, with edits leaving positions alone.

use serde::{Deserialize, Serialize};

/// A single user-authored prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    /// Markup-bearing content, stored exactly as the editor produced it
    pub content: String,
}

/// Ordered collection of prompts, serialized as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptCollection {
    pub prompts: Vec<Prompt>,
}

impl Prompt {
    pub fn new(id: String, title: String, content: String) -> Self {
        Self { id, title, content }
    }

    /// Case-insensitive title match against an already lowercased needle
    fn title_matches(&self, needle: &str) -> bool {
        needle.is_empty() || self.title.to_lowercase().contains(needle)
    }
}

impl PromptCollection {
    /// Create a new empty prompt collection
    pub fn new() -> Self {
        Self {
            prompts: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prompt> {
        self.prompts.iter()
    }

    /// Insert a prompt at the front, where the newest prompt belongs
    pub fn insert_front(&mut self, prompt: Prompt) {
        self.prompts.insert(0, prompt);
    }

    pub fn find(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Replace title and content of the prompt with the given id in place
    pub fn update(&mut self, id: &str, title: String, content: String) -> bool {
        match self.prompts.iter_mut().find(|p| p.id == id) {
            Some(prompt) => {
                prompt.title = title;
                prompt.content = content;
                true
            }
            None => false,
        }
    }

    /// Remove the prompt with the given id, returning it
    pub fn remove(&mut self, id: &str) -> Option<Prompt> {
        let index = self.prompts.iter().position(|p| p.id == id)?;
        Some(self.prompts.remove(index))
    }

    /// Prompts whose title contains `query`, ignoring case and surrounding
    /// whitespace in the query. Content is never searched.
    pub fn filter(&self, query: &str) -> Vec<&Prompt> {
        let needle = query.trim().to_lowercase();
        self.prompts
            .iter()
            .filter(|p| p.title_matches(&needle))
            .collect()
    }

    /// Drop prompts whose id already appeared earlier in the collection.
    /// Returns the number of prompts removed.
    pub fn dedup_ids(&mut self) -> usize {
        let before = self.prompts.len();
        let mut seen = std::collections::HashSet::new();
        self.prompts.retain(|p| seen.insert(p.id.clone()));
        before - self.prompts.len()
    }
}

impl From<Vec<Prompt>> for PromptCollection {
    fn from(prompts: Vec<Prompt>) -> Self {
        Self { prompts }
    }
}
