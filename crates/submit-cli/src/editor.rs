//! External editor used by the body prompt.

use std::io::{self, Write};
use std::path::Path;
use std::process::Command;

/// Pick the editor command: config, `$VISUAL`, `$EDITOR`, then `nano` or `vi` on `PATH`.
pub fn resolve_editor(configured: Option<&str>) -> Option<String> {
    let from_env = |key: &str| std::env::var(key).ok();
    configured
        .map(str::to_string)
        .into_iter()
        .chain(from_env("VISUAL"))
        .chain(from_env("EDITOR"))
        .find(|e| !e.trim().is_empty())
        .or_else(|| {
            ["nano", "vi"]
                .iter()
                .find_map(|bin| which::which(bin).ok())
                .map(|p| p.display().to_string())
        })
}

/// Short name shown in the prompt, e.g. `vim` for `/usr/bin/vim -f`.
pub fn display_name(editor: &str) -> String {
    let program = editor.split_whitespace().next().unwrap_or(editor);
    Path::new(program)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.to_string())
}

/// Open `contents` in `editor` and return the saved text.
///
/// `file_name` is a pattern like `*.md`; its suffix becomes the temp file
/// extension so editors pick the right syntax mode.
pub fn edit(editor: &str, contents: &str, file_name: &str) -> io::Result<String> {
    let suffix = file_name.trim_start_matches('*');
    let mut tmp = tempfile::Builder::new()
        .prefix("submit-")
        .suffix(suffix)
        .tempfile()?;
    tmp.write_all(contents.as_bytes())?;
    tmp.flush()?;

    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty editor command"))?;

    tracing::debug!(%editor, path = %tmp.path().display(), "launching editor");
    let status = Command::new(program).args(parts).arg(tmp.path()).status()?;
    if !status.success() {
        return Err(io::Error::other(format!("editor exited with {status}")));
    }

    std::fs::read_to_string(tmp.path())
}
