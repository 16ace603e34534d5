//! Interactive session
//!
//! A line-oriented stand-in for the editor screen: each line is one user
//! action on the controller. Errors are reported and the session carries on.

use anyhow::Result;
use tracing::debug;

use crate::app::{AppController, COPY_SUCCESS_MESSAGE, SAVE_SUCCESS_MESSAGE};
use crate::config::Config;
use crate::core::traits::{ClipboardSink, KeyValueBackend};
use crate::utils::error::{handle_flow, report_error, FlowResult};
use crate::utils::markup;
use crate::utils::{self, print_success, DisplayFormatter, OutputStyle, SystemClipboard};
use crate::view::{ListAction, ListEntry, ListFormat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Title(String),
    /// Inline text, or `None` to read several lines
    Content(Option<String>),
    Save,
    New,
    Select(String),
    Delete(String),
    Search(String),
    Copy,
    List,
    Show,
    Help,
    Quit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "title" | "t" => ShellCommand::Title(rest.to_string()),
        "content" | "c" => ShellCommand::Content((!rest.is_empty()).then(|| rest.to_string())),
        "save" | "s" => ShellCommand::Save,
        "new" | "n" => ShellCommand::New,
        "select" | "sel" => ShellCommand::Select(required_id(word, rest)?),
        "delete" | "del" | "rm" => ShellCommand::Delete(required_id(word, rest)?),
        "search" | "/" => ShellCommand::Search(rest.to_string()),
        "copy" | "cp" => ShellCommand::Copy,
        "list" | "ls" => ShellCommand::List,
        "show" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help' for a list.", other)),
    };
    Ok(command)
}

fn required_id(word: &str, rest: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("Usage: {} <id>", word))
    } else {
        Ok(rest.to_string())
    }
}

pub fn run_shell<B: KeyValueBackend>(config: &Config, app: &mut AppController<B>) -> Result<()> {
    let mut clipboard = SystemClipboard::new();

    println!("{}", OutputStyle::heading("promptpad shell"));
    println!("{}", OutputStyle::muted("Type 'help' for commands, 'quit' to leave."));
    print_list(config, app);

    loop {
        let prompt = format!("{} ", OutputStyle::info("promptpad>"));
        let Some(line) = utils::prompt_input(&prompt)? else {
            println!();
            break;
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                utils::print_warning(&message);
                continue;
            }
        };

        if !dispatch(config, app, command, &mut clipboard) {
            break;
        }
    }

    Ok(())
}

/// Run one command. Returns `false` when the session should end.
pub fn dispatch<B: KeyValueBackend>(
    config: &Config,
    app: &mut AppController<B>,
    command: ShellCommand,
    clipboard: &mut dyn ClipboardSink,
) -> bool {
    debug!(?command, "shell command");
    match command {
        ShellCommand::Empty => {}
        ShellCommand::Title(title) => app.set_title(&title),
        ShellCommand::Content(Some(text)) => app.set_content(&markup::text_to_markup(&text)),
        ShellCommand::Content(None) => {
            let label = format!("{}:", OutputStyle::label("Content (Enter to finish, Esc to cancel)"));
            match utils::prompt_multiline(&label) {
                Ok(Some(text)) => app.set_content(&markup::text_to_markup(&text)),
                Ok(None) => handle_flow(FlowResult::Cancelled("Content left unchanged".to_string())),
                Err(e) => utils::print_warning(&e.to_string()),
            }
        }
        ShellCommand::Save => {
            if save_editor(app) {
                print_list(config, app);
            }
        }
        ShellCommand::New => {
            app.new_prompt();
            OutputStyle::print_editor(app.editor(), None);
        }
        ShellCommand::Select(id) => {
            let action = entry_action(app, &id, ListEntry::select_action, ListAction::Select);
            if app.handle_list_action(action) {
                OutputStyle::print_editor(app.editor(), app.repository().selected());
            } else {
                not_found(&id);
            }
        }
        ShellCommand::Delete(id) => {
            let action = entry_action(app, &id, ListEntry::remove_action, ListAction::Remove);
            if app.handle_list_action(action) {
                handle_flow(FlowResult::Success("Prompt deleted".to_string()));
                print_list(config, app);
            } else {
                not_found(&id);
            }
        }
        ShellCommand::Search(query) => {
            app.search(&query);
            print_list(config, app);
        }
        ShellCommand::Copy => match app.copy_content(clipboard) {
            Ok(_) => print_success(COPY_SUCCESS_MESSAGE),
            Err(e) => report_error(&e),
        },
        ShellCommand::List => print_list(config, app),
        ShellCommand::Show => OutputStyle::print_editor(app.editor(), app.repository().selected()),
        ShellCommand::Help => print_help(),
        ShellCommand::Quit => return false,
    }
    true
}

/// Action from the rendered entry with this id; ids hidden by the current
/// search are still accepted
fn entry_action<B: KeyValueBackend>(
    app: &AppController<B>,
    id: &str,
    from_entry: fn(&ListEntry) -> ListAction,
    fallback: fn(String) -> ListAction,
) -> ListAction {
    app.entries()
        .iter()
        .find(|entry| entry.id == id)
        .map(from_entry)
        .unwrap_or_else(|| fallback(id.to_string()))
}

/// Save the editor and report the outcome. Returns whether it saved.
fn save_editor<B: KeyValueBackend>(app: &mut AppController<B>) -> bool {
    match app.save() {
        Ok(_) => {
            print_success(SAVE_SUCCESS_MESSAGE);
            true
        }
        Err(e) => {
            report_error(&e);
            false
        }
    }
}

fn print_list<B: KeyValueBackend>(config: &Config, app: &AppController<B>) {
    if app.entries().is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "prompts".to_string(),
        });
        return;
    }
    // Terminal only; html and json belong to `promptpad list`
    if let Err(e) = DisplayFormatter::format_list(app.entries(), ListFormat::Simple, config) {
        report_error(&e);
    }
}

fn not_found(id: &str) {
    handle_flow(FlowResult::NotFound {
        item_type: "Prompt".to_string(),
        search_term: id.to_string(),
    });
}

fn print_help() {
    OutputStyle::print_header("Commands");
    let rows = [
        ("title <text>", "Set the title"),
        ("content [text]", "Set the content; without text, type several lines"),
        ("save", "Save the editor (updates the selected prompt, or creates one)"),
        ("new", "Clear the editor and the selection"),
        ("select <id>", "Load a prompt into the editor"),
        ("delete <id>", "Remove a prompt"),
        ("search [query]", "Filter the list by title; empty shows everything"),
        ("copy", "Copy the editor content to the clipboard"),
        ("list", "Show the current list"),
        ("show", "Show the editor"),
        ("quit", "Leave the shell"),
    ];
    for (usage, description) in rows {
        println!("  {:<16} {}", OutputStyle::label(usage), description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{MemoryBackend, PromptStore};
    use crate::utils::error::{AppError, AppResult};

    #[derive(Default)]
    struct NullClipboard {
        copied: Vec<String>,
    }

    impl ClipboardSink for NullClipboard {
        fn copy_text(&mut self, text: &str) -> AppResult<()> {
            if text.is_empty() {
                return Err(AppError::Clipboard("nothing to copy".to_string()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn run(app: &mut AppController<MemoryBackend>, clipboard: &mut NullClipboard, line: &str) -> bool {
        let command = parse_line(line).unwrap();
        dispatch(&Config::default(), app, command, clipboard)
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("  title  Code review "), Ok(ShellCommand::Title("Code review".into())));
        assert_eq!(parse_line("content"), Ok(ShellCommand::Content(None)));
        assert_eq!(parse_line("c two words"), Ok(ShellCommand::Content(Some("two words".into()))));
        assert_eq!(parse_line("SEARCH"), Ok(ShellCommand::Search(String::new())));
        assert_eq!(parse_line(""), Ok(ShellCommand::Empty));
        assert_eq!(parse_line("exit"), Ok(ShellCommand::Quit));
        assert!(parse_line("select").is_err());
        assert!(parse_line("frobnicate").is_err());
    }

    #[test]
    fn test_session_flow() {
        let mut app = AppController::start(PromptStore::new(MemoryBackend::new()));
        let mut clipboard = NullClipboard::default();

        assert!(run(&mut app, &mut clipboard, "title Translate"));
        assert!(run(&mut app, &mut clipboard, "content Into French"));
        assert!(run(&mut app, &mut clipboard, "save"));
        assert_eq!(app.repository().len(), 1);
        let id = app.repository().prompts()[0].id.clone();

        assert!(run(&mut app, &mut clipboard, "new"));
        assert!(run(&mut app, &mut clipboard, &format!("select {}", id)));
        assert!(run(&mut app, &mut clipboard, "copy"));
        assert_eq!(clipboard.copied, vec!["Into French".to_string()]);

        assert!(run(&mut app, &mut clipboard, "search xyz"));
        assert!(app.entries().is_empty());

        assert!(run(&mut app, &mut clipboard, &format!("delete {}", id)));
        assert!(app.repository().is_empty());
        assert!(!run(&mut app, &mut clipboard, "quit"));
    }

    #[test]
    fn test_select_and_delete_work_outside_current_search() {
        let mut app = AppController::start(PromptStore::new(MemoryBackend::new()));
        let mut clipboard = NullClipboard::default();

        run(&mut app, &mut clipboard, "title Hidden");
        run(&mut app, &mut clipboard, "content body");
        run(&mut app, &mut clipboard, "save");
        let id = app.repository().prompts()[0].id.clone();

        run(&mut app, &mut clipboard, "new");
        run(&mut app, &mut clipboard, "search nothing-matches");
        assert!(app.entries().is_empty());

        run(&mut app, &mut clipboard, &format!("select {}", id));
        assert_eq!(app.repository().selected(), Some(id.as_str()));
        assert_eq!(app.editor().title(), "Hidden");

        run(&mut app, &mut clipboard, &format!("delete {}", id));
        assert!(app.repository().is_empty());
        assert!(app.repository().selected().is_none());

        run(&mut app, &mut clipboard, "delete unknown");
        assert!(app.repository().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_session_alive() {
        let mut app = AppController::start(PromptStore::new(MemoryBackend::new()));
        let mut clipboard = NullClipboard::default();

        assert!(run(&mut app, &mut clipboard, "title Only a title"));
        assert!(run(&mut app, &mut clipboard, "save"));
        assert!(app.repository().is_empty());

        assert!(run(&mut app, &mut clipboard, "copy"));
        assert!(clipboard.copied.is_empty());
    }
}
