use colored::*;
use crate::config::Config;
use crate::core::data::Prompt;
use crate::core::editor::{EditorModel, Field};
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{content_preview, truncate_string};
use crate::utils::markup;
use crate::view::{ListEntry, ListFormat, ListView, MarkupPolicy};

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn content(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn id(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn heading(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::heading(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>8}: {}", Self::label(label), color_fn(value));
    }

    pub fn print_prompt_detailed(prompt: &Prompt) {
        println!("{}", Self::heading("📝 Prompt Details"));
        Self::print_field_colored("ID", &prompt.id, Self::id);
        Self::print_field_colored("Title", &prompt.title, Self::title);

        println!("\n{}:", Self::heading("📄 Content"));
        println!("{}", Self::content(&markup::inner_text(&prompt.content)));
    }

    /// Show the editor fields, with a placeholder for each empty one
    pub fn print_editor(editor: &EditorModel, selected: Option<&str>) {
        let mode = match selected {
            Some(id) => format!("editing {}", id),
            None => "new prompt".to_string(),
        };
        println!("{} {}", Self::heading("✏️  Editor"), Self::muted(&format!("({})", mode)));

        // Focused field gets a marker in front of its label
        let label = |field: Field, name: &str| {
            let marker = if editor.focused() == field { "›" } else { " " };
            format!("{} {}", marker, name)
        };

        if editor.is_empty(Field::Title) {
            Self::print_field_colored(&label(Field::Title, "Title"), "Title of the prompt", Self::muted);
        } else {
            Self::print_field_colored(&label(Field::Title, "Title"), editor.title(), Self::title);
        }

        if editor.is_empty(Field::Content) {
            Self::print_field_colored(&label(Field::Content, "Content"), "Write your prompt here", Self::muted);
        } else {
            println!("{:>10}:", Self::label(&label(Field::Content, "Content")));
            for line in markup::inner_text(editor.content()).lines() {
                println!("  {}", Self::content(line));
            }
        }
    }

    /// One line per entry: `id  title: preview`
    pub fn format_entry_line(entry: &ListEntry, config: &Config) -> String {
        if config.general.content_preview {
            format!(
                "{}  {}: {}",
                Self::id(&entry.id),
                Self::title(&entry.title),
                Self::content(&content_preview(&entry.content, 80))
            )
        } else {
            format!("{}  {}", Self::id(&entry.id), Self::title(&entry.title))
        }
    }
}

pub fn print_prompt_count(count: usize) {
    if count == 0 {
        println!("{}", OutputStyle::muted("No prompts found."));
    } else {
        println!(
            "📝 {} ({} found)",
            OutputStyle::header("Prompts"),
            OutputStyle::info(&count.to_string())
        );
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Display formatter for the rendered list
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Print entries in the requested format
    pub fn format_list(entries: &[ListEntry], format: ListFormat, config: &Config) -> AppResult<()> {
        match format {
            ListFormat::Simple => Self::print_simple_list(entries, config),
            ListFormat::Detailed => Self::print_detailed_list(entries),
            ListFormat::Table => Self::print_table_list(entries),
            ListFormat::Json => Self::print_json_list(entries)?,
            ListFormat::Html => {
                let policy = MarkupPolicy::from_escape_flag(config.general.escape_markup);
                print!("{}", ListView::to_html_page(entries, policy));
            }
        }
        Ok(())
    }

    fn print_simple_list(entries: &[ListEntry], config: &Config) {
        print_prompt_count(entries.len());
        if entries.is_empty() {
            return;
        }
        println!("{}", OutputStyle::separator());

        for entry in entries {
            println!("{}", OutputStyle::format_entry_line(entry, config));
        }
    }

    fn print_detailed_list(entries: &[ListEntry]) {
        OutputStyle::print_header("📝 Detailed Prompt List");

        for (i, entry) in entries.iter().enumerate() {
            println!("\n{}. {}", i + 1, OutputStyle::title(&entry.title));
            OutputStyle::print_field_colored("ID", &entry.id, OutputStyle::id);

            let text = markup::inner_text(&entry.content);
            let lines: Vec<&str> = text.lines().take(3).collect();
            if !lines.is_empty() {
                println!("   {}:", OutputStyle::label("Preview"));
                for line in lines {
                    println!("     {}", OutputStyle::content(line));
                }
                if text.lines().count() > 3 {
                    println!("     {}", OutputStyle::muted("..."));
                }
            }

            if i + 1 < entries.len() {
                println!("{}", OutputStyle::separator());
            }
        }
    }

    fn print_table_list(entries: &[ListEntry]) {
        print_prompt_count(entries.len());
        if entries.is_empty() {
            return;
        }

        let id_width = entries
            .iter()
            .map(|e| e.id.chars().count())
            .max()
            .unwrap_or(0)
            .max(2);
        let title_width = entries
            .iter()
            .map(|e| e.title.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(5, 40);
        let preview_width = 40;

        println!(
            "┌─{}─┬─{}─┬─{}─┐",
            "─".repeat(id_width),
            "─".repeat(title_width),
            "─".repeat(preview_width)
        );
        println!(
            "│ {:<iw$} │ {:<tw$} │ {:<pw$} │",
            "ID",
            "Title",
            "Content",
            iw = id_width,
            tw = title_width,
            pw = preview_width
        );
        println!(
            "├─{}─┼─{}─┼─{}─┤",
            "─".repeat(id_width),
            "─".repeat(title_width),
            "─".repeat(preview_width)
        );

        for entry in entries {
            println!(
                "│ {:<iw$} │ {:<tw$} │ {:<pw$} │",
                entry.id,
                truncate_string(&entry.title, title_width),
                content_preview(&entry.content, preview_width),
                iw = id_width,
                tw = title_width,
                pw = preview_width
            );
        }

        println!(
            "└─{}─┴─{}─┴─{}─┘",
            "─".repeat(id_width),
            "─".repeat(title_width),
            "─".repeat(preview_width)
        );
    }

    fn print_json_list(entries: &[ListEntry]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::System(format!("Failed to serialize prompts to JSON: {}", e)))?;
        println!("{}", json);
        Ok(())
    }
}
