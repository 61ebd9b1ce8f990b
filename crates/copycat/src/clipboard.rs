use copycatapp::error::{CopyCatError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// A clipboard tool that reads the new contents from stdin.
struct ClipboardTool {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "pbcopy",
    args: &[],
}];

// xclip first, xsel as fallback
#[cfg(target_os = "linux")]
const TOOLS: &[ClipboardTool] = &[
    ClipboardTool {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardTool {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

#[cfg(target_os = "windows")]
const TOOLS: &[ClipboardTool] = &[ClipboardTool {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const TOOLS: &[ClipboardTool] = &[];

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut last_spawn_error = None;

    for tool in TOOLS {
        let child = Command::new(tool.program)
            .args(tool.args)
            .stdin(Stdio::piped())
            .spawn();
        match child {
            Ok(child) => return feed(tool.program, child, text),
            Err(e) => last_spawn_error = Some((tool.program, e)),
        }
    }

    match last_spawn_error {
        Some((program, e)) => Err(CopyCatError::Api(format!(
            "Failed to spawn {}: {}. {}",
            program,
            e,
            install_hint()
        ))),
        None => Err(CopyCatError::Api(
            "Clipboard not supported on this platform".to_string(),
        )),
    }
}

/// Empties the clipboard by copying an empty string.
pub fn clear_clipboard() -> Result<()> {
    copy_to_clipboard("")
}

fn feed(program: &str, mut child: std::process::Child, text: &str) -> Result<()> {
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| CopyCatError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| CopyCatError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyCatError::Api(format!("{} exited with error", program)))
    }
}

fn install_hint() -> &'static str {
    if cfg!(target_os = "linux") {
        "Install xclip or xsel."
    } else {
        "Is the clipboard tool on your PATH?"
    }
}

/// Short preview of copied text for the confirmation message.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let mut cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
