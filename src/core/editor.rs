//! Two-field prompt editor model
//!
//! The editor holds a plain-text title and a markup content field, and
//! tracks for each whether it currently shows as empty. Empty indicators
//! are presentational only; they never block input.

use crate::core::data::Prompt;
use crate::utils::markup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

#[derive(Debug, Clone)]
pub struct EditorModel {
    title: String,
    content: String,
    title_empty: bool,
    content_empty: bool,
    focused: Field,
}

impl Default for EditorModel {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            title_empty: true,
            content_empty: true,
            focused: Field::Title,
        }
    }
}

impl EditorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Raw content markup
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with markup removed
    pub fn content_text(&self) -> String {
        markup::text_content(&self.content)
    }

    pub fn focused(&self) -> Field {
        self.focused
    }

    /// Input event on the title field; input lands where focus is
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.focused = Field::Title;
        self.refresh(Field::Title);
    }

    /// Input event on the content field
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.focused = Field::Content;
        self.refresh(Field::Content);
    }

    /// Populate both fields from a stored prompt
    pub fn load_for_edit(&mut self, prompt: &Prompt) {
        self.title = prompt.title.clone();
        self.content = prompt.content.clone();
        self.refresh_all();
    }

    /// Clear both fields and put focus back on the title
    pub fn reset_for_new(&mut self) {
        self.title.clear();
        self.content.clear();
        self.refresh_all();
        self.focused = Field::Title;
    }

    /// Whether a field currently shows its empty placeholder
    pub fn is_empty(&self, field: Field) -> bool {
        match field {
            Field::Title => self.title_empty,
            Field::Content => self.content_empty,
        }
    }

    fn refresh(&mut self, field: Field) {
        match field {
            Field::Title => self.title_empty = self.title.trim().is_empty(),
            Field::Content => self.content_empty = markup::is_blank(&self.content),
        }
    }

    fn refresh_all(&mut self) {
        self.refresh(Field::Title);
        self.refresh(Field::Content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_with_title_focus() {
        let editor = EditorModel::new();
        assert!(editor.is_empty(Field::Title));
        assert!(editor.is_empty(Field::Content));
        assert_eq!(editor.focused(), Field::Title);
    }

    #[test]
    fn test_indicators_follow_input() {
        let mut editor = EditorModel::new();
        editor.set_title("  ");
        assert!(editor.is_empty(Field::Title));
        editor.set_title("Name");
        assert!(!editor.is_empty(Field::Title));
        assert!(editor.is_empty(Field::Content));

        editor.set_content("<div><br></div>");
        assert!(editor.is_empty(Field::Content));
        editor.set_content("<b>text</b>");
        assert!(!editor.is_empty(Field::Content));
        assert_eq!(editor.content_text(), "text");
    }

    #[test]
    fn test_load_restores_markup_and_reset_clears() {
        let mut editor = EditorModel::new();
        editor.set_content("draft");
        assert_eq!(editor.focused(), Field::Content);
        let prompt = Prompt::new("a".into(), "Title".into(), "<i>markup</i>".into());

        editor.load_for_edit(&prompt);
        assert_eq!(editor.title(), "Title");
        assert_eq!(editor.content(), "<i>markup</i>");
        assert!(!editor.is_empty(Field::Title));
        assert!(!editor.is_empty(Field::Content));

        editor.reset_for_new();
        assert_eq!(editor.title(), "");
        assert_eq!(editor.content(), "");
        assert!(editor.is_empty(Field::Title));
        assert!(editor.is_empty(Field::Content));
        assert_eq!(editor.focused(), Field::Title);
    }
}
