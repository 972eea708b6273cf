//! External editor integration for opening the chosen file.
//!
//! The editor is picked from, in order: the configured command, `$VISUAL`,
//! `$EDITOR`, then the first well-known editor found on `PATH`.

use std::env;
use std::path::Path;
use std::process::Command;

use camino::Utf8Path;
use en_core::EditorConfig;
use tracing::{debug, info};

use crate::error::TuiError;

/// Editors tried, in order, when nothing is configured.
const FALLBACK_EDITORS: [&str; 5] = ["cursor", "code", "nvim", "vim", "nano"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditorKind {
    Cursor,
    VsCode,
    Nvim,
    Vim,
    Nano,
    Other,
}

impl EditorKind {
    const fn is_gui(self) -> bool {
        matches!(self, Self::Cursor | Self::VsCode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EditorCommand {
    program: String,
    args: Vec<String>,
    kind: EditorKind,
}

impl EditorCommand {
    fn build(&self, path: &Utf8Path) -> Command {
        let mut command = Command::new(&self.program);
        if let Some(dir) = path.parent().filter(|dir| dir.is_dir()) {
            command.current_dir(dir.as_std_path());
        }
        command.args(&self.args);
        if self.kind.is_gui() && !self.args.iter().any(|arg| arg == "--reuse-window") {
            // Open in the window already showing the project
            command.arg("--reuse-window");
        }
        command.arg(path.as_str());
        command
    }
}

fn parse_editor_command(command: &str) -> Option<EditorCommand> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?.to_owned();
    let args = parts.map(str::to_owned).collect::<Vec<_>>();
    let kind = editor_kind_from_program(&program);

    Some(EditorCommand {
        program,
        args,
        kind,
    })
}

fn editor_kind_from_program(program: &str) -> EditorKind {
    let file_name = Path::new(program)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(program)
        .to_lowercase();

    match file_name.as_str() {
        "cursor" | "cursor.exe" => EditorKind::Cursor,
        "code" | "code-insiders" | "code.exe" => EditorKind::VsCode,
        "nvim" | "nvim.exe" => EditorKind::Nvim,
        "vim" | "vim.exe" => EditorKind::Vim,
        "nano" | "nano.exe" => EditorKind::Nano,
        _ => EditorKind::Other,
    }
}

/// Picks the editor command. `on_path` reports whether a fallback program
/// is installed.
fn choose_editor(
    configured: Option<&str>,
    visual: Option<String>,
    editor: Option<String>,
    on_path: impl Fn(&str) -> bool,
) -> Option<EditorCommand> {
    let explicit = [configured.map(str::to_owned), visual, editor]
        .into_iter()
        .flatten()
        .find(|command| !command.trim().is_empty());

    if let Some(command) = explicit {
        return parse_editor_command(&command);
    }

    FALLBACK_EDITORS
        .into_iter()
        .find(|&program| on_path(program))
        .and_then(parse_editor_command)
}

fn resolve_editor(config: &EditorConfig) -> Result<EditorCommand, TuiError> {
    choose_editor(
        config.editor.as_deref(),
        env::var("VISUAL").ok(),
        env::var("EDITOR").ok(),
        |program| which::which(program).is_ok(),
    )
    .ok_or_else(|| TuiError::config("No editor configured. Set --editor, $VISUAL, or $EDITOR."))
}

/// Opens `path` in the resolved editor and waits for it to return.
///
/// # Errors
///
/// Returns an error if no editor can be found, it fails to start, or it
/// exits unsuccessfully.
pub fn open_in_editor(path: &Utf8Path, config: &EditorConfig) -> Result<(), TuiError> {
    let editor = resolve_editor(config)?;
    info!(program = %editor.program, path = %path, "Opening file");

    let status = editor.build(path).status()?;
    debug!(%status, "Editor finished");
    if status.success() {
        Ok(())
    } else {
        Err(TuiError::editor(format!("{} exited with status: {status}", editor.program)))
    }
}
