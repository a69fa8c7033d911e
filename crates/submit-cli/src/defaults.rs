use std::path::Path;
use std::process::Command;
use submit_core::types::Defaults;

/// Title and body suggested by the most recent commit in `root`.
///
/// Any git failure (not a repository, no commits, git missing) yields empty
/// defaults.
pub fn from_last_commit(root: &Path) -> Defaults {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(["log", "-1", "--format=%B"])
        .output();

    match output {
        Ok(out) if out.status.success() => {
            parse_commit_message(&String::from_utf8_lossy(&out.stdout))
        }
        Ok(out) => {
            tracing::debug!(
                stderr = %String::from_utf8_lossy(&out.stderr).trim(),
                "no commit defaults"
            );
            Defaults::default()
        }
        Err(e) => {
            tracing::debug!("git unavailable: {e}");
            Defaults::default()
        }
    }
}

/// First line becomes the title, the rest (trimmed) the body.
pub fn parse_commit_message(message: &str) -> Defaults {
    let message = message.trim();
    let (title, body) = message.split_once('\n').unwrap_or((message, ""));
    Defaults::new(title.trim(), body.trim())
}
