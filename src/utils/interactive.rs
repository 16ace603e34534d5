use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};
use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

/// Read one line from stdin. Returns `None` at end of input.
pub fn prompt_input(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

/// Read multi-line text in raw mode.
///
/// Enter finishes, Shift+Enter or Ctrl+J starts a new line, Esc cancels
/// (`None`). Pasted text keeps its line breaks.
pub fn prompt_multiline(prompt: &str) -> Result<Option<String>> {
    println!("{}", prompt);

    terminal::enable_raw_mode()?;
    let _ = execute!(io::stdout(), EnableBracketedPaste);

    let result = (|| -> Result<Option<String>> {
        let mut lines: Vec<String> = Vec::new();
        let mut current_line = String::new();

        loop {
            match event::read()? {
                Event::Key(KeyEvent {
                    code: KeyCode::Char('j'),
                    modifiers: KeyModifiers::CONTROL,
                    ..
                })
                | Event::Key(KeyEvent {
                    code: KeyCode::Enter,
                    modifiers: KeyModifiers::SHIFT,
                    ..
                }) => {
                    lines.push(std::mem::take(&mut current_line));
                    print!("\r\n");
                    io::stdout().flush()?;
                }
                Event::Key(KeyEvent {
                    code: KeyCode::Enter,
                    ..
                }) => {
                    lines.push(current_line);
                    break;
                }
                Event::Key(KeyEvent {
                    code: KeyCode::Char(c),
                    ..
                }) => {
                    current_line.push(c);
                    print!("{}", c);
                    io::stdout().flush()?;
                }
                Event::Key(KeyEvent {
                    code: KeyCode::Backspace,
                    ..
                }) => {
                    if current_line.pop().is_some() {
                        execute!(
                            io::stdout(),
                            cursor::MoveLeft(1),
                            terminal::Clear(ClearType::UntilNewLine)
                        )?;
                    } else if let Some(previous) = lines.pop() {
                        current_line = previous;
                        execute!(
                            io::stdout(),
                            cursor::MoveUp(1),
                            cursor::MoveToColumn(0),
                            terminal::Clear(ClearType::UntilNewLine)
                        )?;
                        print!("{}", current_line);
                    }
                    io::stdout().flush()?;
                }
                Event::Key(KeyEvent {
                    code: KeyCode::Esc, ..
                }) => {
                    return Ok(None);
                }
                Event::Paste(pasted_text) => {
                    let mut pasted_lines = pasted_text.lines().peekable();
                    while let Some(line) = pasted_lines.next() {
                        current_line.push_str(line);
                        print!("{}", line);
                        if pasted_lines.peek().is_some() {
                            lines.push(std::mem::take(&mut current_line));
                            print!("\r\n");
                        }
                    }
                    io::stdout().flush()?;
                }
                _ => {}
            }
        }
        Ok(Some(lines.join("\n")))
    })();

    let _ = execute!(io::stdout(), DisableBracketedPaste);
    let _ = terminal::disable_raw_mode();

    println!();
    result
}

pub fn prompt_yes_no(prompt: &str) -> Result<bool> {
    loop {
        let Some(input) = prompt_input(&format!("{} [y/N]: ", prompt))? else {
            return Ok(false);
        };
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => println!("Please enter 'y' or 'n'"),
        }
    }
}

/// Pick an editor: explicit choice, then `$EDITOR`, then a common one found on disk
pub fn detect_editor(preferred: Option<&str>) -> String {
    if let Some(editor) = preferred.filter(|e| !e.trim().is_empty()) {
        return editor.to_string();
    }
    if let Ok(editor) = std::env::var("EDITOR")
        && !editor.trim().is_empty()
    {
        return editor;
    }

    if cfg!(windows) {
        return "notepad".to_string();
    }

    ["nvim", "vim", "nano"]
        .into_iter()
        .find(|candidate| {
            Path::new("/usr/bin").join(candidate).exists()
                || Path::new("/usr/local/bin").join(candidate).exists()
        })
        .unwrap_or("vi")
        .to_string()
}

/// Edit `content` in an external editor and return the result
pub fn open_editor_custom(content: Option<&str>, editor_cmd: Option<&str>) -> Result<String> {
    let temp_file = std::env::temp_dir().join(format!("promptpad_{}.txt", std::process::id()));

    std::fs::write(&temp_file, content.unwrap_or(""))
        .with_context(|| format!("Failed to create temp file: {}", temp_file.display()))?;

    if let Err(e) = edit_file_direct(&temp_file, editor_cmd) {
        let _ = std::fs::remove_file(&temp_file);
        return Err(e);
    }

    let edited = std::fs::read_to_string(&temp_file)?;
    std::fs::remove_file(&temp_file)?;

    Ok(edited.trim().to_string())
}

/// Open an existing file in the editor and wait for it to close
pub fn edit_file_direct(file_path: &Path, editor_cmd: Option<&str>) -> Result<()> {
    let editor = detect_editor(editor_cmd);

    // Editors like "code --wait" carry their own arguments
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");
    let status = Command::new(program)
        .args(parts)
        .arg(file_path)
        .status()
        .with_context(|| format!("Failed to execute editor: {}", editor))?;

    if !status.success() {
        return Err(anyhow::anyhow!("Editor exited with non-zero status"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_editor_prefers_explicit_choice() {
        assert_eq!(detect_editor(Some("hx")), "hx");
        assert!(!detect_editor(Some("  ")).is_empty());
        assert!(!detect_editor(None).is_empty());
    }
}
