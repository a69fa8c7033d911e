use crate::error::Result;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SUBMIT_DIR: &str = ".submit";
pub const CONFIG_FILE: &str = ".submit/config.yaml";

/// Directories searched for templates, relative to the repository root.
/// The root itself is searched between `.github` and `docs`.
pub const GITHUB_DIR: &str = ".github";
pub const DOCS_DIR: &str = "docs";

/// Controlling terminal device opened for single-keystroke reads.
#[cfg(not(windows))]
pub const TTY_PATH: &str = "/dev/tty";
#[cfg(windows)]
pub const TTY_PATH: &str = "CONIN$";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// `~/.submit/config.yaml`, or `None` when no home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    home::home_dir().map(|h| h.join(CONFIG_FILE))
}

/// Candidate template directories in search order.
pub fn template_dirs(root: &Path) -> Vec<PathBuf> {
    vec![
        root.join(GITHUB_DIR),
        root.to_path_buf(),
        root.join(DOCS_DIR),
    ]
}

/// Entries of `dir` whose file name matches `name` ignoring ASCII case.
pub fn find_case_insensitive(dir: &Path, name: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    if !dir.is_dir() {
        return Ok(found);
    }
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry
            .file_name()
            .to_string_lossy()
            .eq_ignore_ascii_case(name)
        {
            found.push(entry.path());
        }
    }
    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn config_path_under_submit_dir() {
        let p = config_path(Path::new("/repo"));
        assert_eq!(p, PathBuf::from("/repo/.submit/config.yaml"));
    }

    #[test]
    fn template_dirs_order() {
        let dirs = template_dirs(Path::new("/repo"));
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/repo/.github"),
                PathBuf::from("/repo"),
                PathBuf::from("/repo/docs"),
            ]
        );
    }

    #[test]
    fn find_case_insensitive_matches_any_case() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Pull_Request_Template.md"), "x").unwrap();
        std::fs::write(dir.path().join("README.md"), "x").unwrap();
        let found = find_case_insensitive(dir.path(), "pull_request_template.md").unwrap();
        assert_eq!(found, vec![dir.path().join("Pull_Request_Template.md")]);
    }

    #[test]
    fn find_case_insensitive_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let found = find_case_insensitive(&dir.path().join("nope"), "x").unwrap();
        assert!(found.is_empty());
    }
}
