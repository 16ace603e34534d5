//! System clipboard access through platform copy tools

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::traits::ClipboardSink;
use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayServer {
    Wayland,
    X11,
    Unknown,
}

/// Detect the current display server (Wayland or X11) on Linux systems
pub fn detect_display_server() -> DisplayServer {
    if let Ok(session_type) = env::var("XDG_SESSION_TYPE") {
        match session_type.to_lowercase().as_str() {
            "wayland" => return DisplayServer::Wayland,
            "x11" => return DisplayServer::X11,
            _ => {}
        }
    }

    if env::var("WAYLAND_DISPLAY").is_ok() {
        DisplayServer::Wayland
    } else if env::var("DISPLAY").is_ok() {
        DisplayServer::X11
    } else {
        DisplayServer::Unknown
    }
}

/// Copy tools to try, in order, for the current platform
pub fn candidate_tools(display_server: DisplayServer) -> Vec<(&'static str, Vec<&'static str>)> {
    if cfg!(target_os = "macos") {
        return vec![("pbcopy", vec![])];
    }
    if cfg!(target_os = "windows") {
        return vec![("clip", vec![])];
    }
    if !cfg!(target_os = "linux") {
        return Vec::new();
    }

    let wl = ("wl-copy", vec![]);
    let xclip = ("xclip", vec!["-selection", "clipboard"]);
    let xsel = ("xsel", vec!["--clipboard", "--input"]);

    match display_server {
        DisplayServer::X11 => vec![xclip, xsel, wl],
        DisplayServer::Wayland | DisplayServer::Unknown => vec![wl, xclip, xsel],
    }
}

/// Clipboard backed by whatever copy tool the platform provides
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    /// Pipe `text` into a copy tool. `Ok(false)` means the tool is not installed.
    fn run_tool(tool: &str, args: &[&str], text: &str) -> AppResult<bool> {
        let spawned = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(AppError::Clipboard(format!("Failed to spawn {}: {}", tool, e)));
            }
        };

        if let Some(stdin) = child.stdin.as_mut() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| AppError::Clipboard(format!("Failed to write to {}: {}", tool, e)))?;
        }
        // Close stdin so the tool sees end of input
        drop(child.stdin.take());

        let status = child
            .wait()
            .map_err(|e| AppError::Clipboard(format!("Failed to wait for {}: {}", tool, e)))?;

        if status.success() {
            Ok(true)
        } else {
            Err(AppError::Clipboard(format!("{} failed", tool)))
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> AppResult<()> {
        let tools = candidate_tools(detect_display_server());
        if tools.is_empty() {
            return Err(AppError::Clipboard(
                "Clipboard is not supported on this platform.".to_string(),
            ));
        }

        let mut last_error = None;
        for (tool, args) in &tools {
            match Self::run_tool(tool, args, text) {
                Ok(true) => {
                    debug!(tool, "copied to clipboard");
                    return Ok(());
                }
                Ok(false) => debug!(tool, "clipboard tool not installed"),
                Err(e) => {
                    debug!(tool, error = %e, "clipboard tool failed");
                    last_error = Some(e);
                }
            }
        }

        let names: Vec<_> = tools.iter().map(|(tool, _)| *tool).collect();
        Err(last_error.unwrap_or_else(|| {
            AppError::Clipboard(format!(
                "No clipboard tool available. Install one of: {}",
                names.join(", ")
            ))
        }))
    }
}
