//! Filtered list view of the repository
//!
//! `render` turns the repository plus a search query into list entries.
//! Each entry carries the two actions a user can trigger on it: selecting
//! it into the editor, or removing it.

use serde::Serialize;

use crate::core::data::Prompt;
use crate::core::repository::PromptRepository;
use crate::utils::markup::escape_html;

/// How stored title and content are placed into HTML output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupPolicy {
    /// Insert as-is; the stored markup is trusted
    #[default]
    Trusted,
    /// Escape so stored markup shows up as literal text
    Escaped,
}

impl MarkupPolicy {
    pub fn from_escape_flag(escape: bool) -> Self {
        if escape {
            MarkupPolicy::Escaped
        } else {
            MarkupPolicy::Trusted
        }
    }

    fn apply(self, text: &str) -> String {
        match self {
            MarkupPolicy::Trusted => text.to_string(),
            MarkupPolicy::Escaped => escape_html(text),
        }
    }
}

/// Action exposed by a list entry, keyed by prompt id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Select(String),
    Remove(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub title: String,
    pub content: String,
}

impl ListEntry {
    fn from_prompt(prompt: &Prompt) -> Self {
        Self {
            id: prompt.id.clone(),
            title: prompt.title.clone(),
            content: prompt.content.clone(),
        }
    }

    pub fn select_action(&self) -> ListAction {
        ListAction::Select(self.id.clone())
    }

    pub fn remove_action(&self) -> ListAction {
        ListAction::Remove(self.id.clone())
    }
}

pub struct ListView;

impl ListView {
    /// Entries for every prompt whose title matches `query`, in collection order
    pub fn render(repo: &PromptRepository, query: &str) -> Vec<ListEntry> {
        repo.filter(query)
            .into_iter()
            .map(ListEntry::from_prompt)
            .collect()
    }

    /// One `<li>` per entry, concatenated
    pub fn to_html(entries: &[ListEntry], policy: MarkupPolicy) -> String {
        entries
            .iter()
            .map(|entry| Self::entry_html(entry, policy))
            .collect()
    }

    /// Standalone document wrapping the rendered list
    pub fn to_html_page(entries: &[ListEntry], policy: MarkupPolicy) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>promptpad</title>
</head>
<body>
  <ul id="prompt-list">{}</ul>
</body>
</html>
"#,
            Self::to_html(entries, policy)
        )
    }

    fn entry_html(entry: &ListEntry, policy: MarkupPolicy) -> String {
        format!(
            r#"
    <li class="prompt-item" data-id="{id}" data-action="select">
      <div class="prompt-item-content">
        <span class="prompt-item-title">{title}</span>
        <span class="prompt-item-description">{content}</span>
      </div>

      <button class="btn-icon" title="Remover" data-action="remove">
        <img src="assets/remove.svg" alt="Remover" class="icon icon-trash" />
      </button>
    </li>
  "#,
            id = escape_html(&entry.id),
            title = policy.apply(&entry.title),
            content = policy.apply(&entry.content),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> PromptRepository {
        PromptRepository::from_prompts(vec![
            Prompt::new("b".into(), "Translate <em>text</em>".into(), "<b>bold</b>".into()),
            Prompt::new("a".into(), "Review".into(), "plain".into()),
        ])
    }

    #[test]
    fn test_render_filters_by_title() {
        let repo = repo();
        let entries = ListView::render(&repo, "");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "b");

        let entries = ListView::render(&repo, "REV");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].select_action(), ListAction::Select("a".into()));
        assert_eq!(entries[0].remove_action(), ListAction::Remove("a".into()));

        assert!(ListView::render(&repo, "bold").is_empty());
    }

    #[test]
    fn test_trusted_html_inserts_markup() {
        let entries = ListView::render(&repo(), "translate");
        let html = ListView::to_html(&entries, MarkupPolicy::Trusted);
        assert!(html.contains(r#"data-id="b""#));
        assert!(html.contains("<b>bold</b>"));
        assert!(html.contains("Translate <em>text</em>"));
    }

    #[test]
    fn test_escaped_html_neutralises_markup() {
        let entries = ListView::render(&repo(), "translate");
        let html = ListView::to_html(&entries, MarkupPolicy::Escaped);
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn test_page_wraps_list() {
        let page = ListView::to_html_page(&[], MarkupPolicy::from_escape_flag(true));
        assert!(page.contains(r#"<ul id="prompt-list"></ul>"#));
    }
}
