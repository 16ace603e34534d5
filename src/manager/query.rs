// Query operations - List, Copy

use crate::app::{AppController, COPY_SUCCESS_MESSAGE};
use crate::cli::{CopyArgs, ListArgs};
use crate::config::Config;
use crate::core::traits::{ClipboardSink, KeyValueBackend};
use crate::utils::error::{handle_flow, AppResult, FlowResult};
use crate::utils::{print_success, DisplayFormatter, SystemClipboard};
use crate::view::ListFormat;

// List operations
pub fn handle_list_command<B: KeyValueBackend>(
    config: &Config,
    app: &mut AppController<B>,
    args: &ListArgs,
) -> AppResult<()> {
    app.search(args.query.as_deref().unwrap_or(""));

    let format = args.format.or(config.general.format).unwrap_or_default();

    // Machine-readable formats still print an empty document
    if app.entries().is_empty() && !matches!(format, ListFormat::Json | ListFormat::Html) {
        handle_flow(FlowResult::EmptyList {
            item_type: "prompts matching your criteria".to_string(),
        });
        return Ok(());
    }

    DisplayFormatter::format_list(app.entries(), format, config)
}

// Copy operations
pub fn handle_copy_command<B: KeyValueBackend>(
    app: &mut AppController<B>,
    args: &CopyArgs,
) -> AppResult<()> {
    copy_with(app, args, &mut SystemClipboard::new())
}

fn copy_with<B: KeyValueBackend>(
    app: &mut AppController<B>,
    args: &CopyArgs,
    clipboard: &mut dyn ClipboardSink,
) -> AppResult<()> {
    if app.select(&args.id).is_none() {
        handle_flow(FlowResult::NotFound {
            item_type: "Prompt".to_string(),
            search_term: args.id.clone(),
        });
        return Ok(());
    }

    app.copy_content(clipboard)?;
    print_success(COPY_SUCCESS_MESSAGE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{MemoryBackend, PromptStore};
    use crate::utils::error::AppError;

    struct FakeClipboard {
        copied: Option<String>,
        fail: bool,
    }

    impl ClipboardSink for FakeClipboard {
        fn copy_text(&mut self, text: &str) -> AppResult<()> {
            if self.fail {
                return Err(AppError::Clipboard("no clipboard".to_string()));
            }
            self.copied = Some(text.to_string());
            Ok(())
        }
    }

    fn app_with_prompt() -> (AppController<MemoryBackend>, String) {
        let mut app = AppController::start(PromptStore::new(MemoryBackend::new()));
        app.set_title("Greeting");
        app.set_content("<p>Hello</p><p>there</p>");
        let id = app.save().unwrap().id;
        app.new_prompt();
        (app, id)
    }

    #[test]
    fn test_copy_selects_and_copies_text() {
        let (mut app, id) = app_with_prompt();
        let mut clipboard = FakeClipboard { copied: None, fail: false };

        copy_with(&mut app, &CopyArgs { id: id.clone() }, &mut clipboard).unwrap();
        assert_eq!(clipboard.copied.as_deref(), Some("Hello\nthere"));
        assert_eq!(app.repository().selected(), Some(id.as_str()));
    }

    #[test]
    fn test_copy_failure_is_reported() {
        let (mut app, id) = app_with_prompt();
        let mut clipboard = FakeClipboard { copied: None, fail: true };

        let err = copy_with(&mut app, &CopyArgs { id }, &mut clipboard).unwrap_err();
        assert!(matches!(err, AppError::Clipboard(_)));
        assert_eq!(app.repository().len(), 1);
    }

    #[test]
    fn test_list_applies_query() {
        let (mut app, _) = app_with_prompt();
        let args = ListArgs {
            query: Some("GREET".to_string()),
            format: Some(ListFormat::Json),
        };
        handle_list_command(&Config::default(), &mut app, &args).unwrap();
        assert_eq!(app.query(), "GREET");
        assert_eq!(app.entries().len(), 1);
    }
}
