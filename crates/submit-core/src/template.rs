//! Body template discovery and extraction.
//!
//! Templates live in `.github/`, the repository root, or `docs/`, either as
//! a directory of markdown files (`PULL_REQUEST_TEMPLATE/*.md`) or as one
//! legacy file (`PULL_REQUEST_TEMPLATE.md`). A template may start with a
//! YAML front matter block whose `name` is used for display.

use crate::error::{Result, SubmitError};
use crate::paths;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// TemplateKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    PullRequest,
    Issue,
}

impl TemplateKind {
    /// Directory holding several templates.
    pub fn dir_name(self) -> &'static str {
        match self {
            TemplateKind::PullRequest => "PULL_REQUEST_TEMPLATE",
            TemplateKind::Issue => "ISSUE_TEMPLATE",
        }
    }

    /// Single-file form.
    pub fn legacy_name(self) -> &'static str {
        match self {
            TemplateKind::PullRequest => "PULL_REQUEST_TEMPLATE.md",
            TemplateKind::Issue => "ISSUE_TEMPLATE.md",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemplateKind::PullRequest => "pull request",
            TemplateKind::Issue => "issue",
        })
    }
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

/// All templates of `kind` under `root`, directory form first.
pub fn find_templates(root: &Path, kind: TemplateKind) -> Result<Vec<PathBuf>> {
    let found = find_non_legacy(root, kind.dir_name())?;
    if !found.is_empty() {
        return Ok(found);
    }
    Ok(find_legacy(root, kind.legacy_name())?.into_iter().collect())
}

/// Markdown files inside the first `name` directory (any case) that has any.
pub fn find_non_legacy(root: &Path, name: &str) -> Result<Vec<PathBuf>> {
    for dir in paths::template_dirs(root) {
        for candidate in paths::find_case_insensitive(&dir, name)? {
            if !candidate.is_dir() {
                continue;
            }
            let mut results = Vec::new();
            for entry in std::fs::read_dir(&candidate)? {
                let path = entry?.path();
                if path.is_file() && path.extension().is_some_and(|e| e == "md") {
                    results.push(path);
                }
            }
            if !results.is_empty() {
                results.sort();
                return Ok(results);
            }
        }
    }
    Ok(Vec::new())
}

/// The first file called `name` (any case) in the template directories.
pub fn find_legacy(root: &Path, name: &str) -> Result<Option<PathBuf>> {
    for dir in paths::template_dirs(root) {
        if let Some(found) = paths::find_case_insensitive(&dir, name)?
            .into_iter()
            .find(|p| p.is_file())
        {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    name: Option<String>,
}

static FRONT_MATTER_RE: OnceLock<Regex> = OnceLock::new();

fn front_matter_re() -> &'static Regex {
    FRONT_MATTER_RE.get_or_init(|| Regex::new(r"(?m)^---\r?\n(\s*\r?\n)?").unwrap())
}

/// Byte ranges of (whole block, inner YAML) when `contents` opens with front matter.
fn front_matter(contents: &str) -> Option<(std::ops::Range<usize>, std::ops::Range<usize>)> {
    let mut fences = front_matter_re().find_iter(contents);
    let open = fences.next()?;
    let close = fences.next()?;
    if open.start() != 0 {
        return None;
    }
    Some((0..close.end(), open.end()..close.start()))
}

/// Display name: front matter `name`, else the file name.
pub fn extract_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let Ok(contents) = std::fs::read_to_string(path) else {
        return file_name;
    };
    let Some((_, inner)) = front_matter(&contents) else {
        return file_name;
    };
    match serde_yaml::from_str::<FrontMatter>(&contents[inner]) {
        Ok(FrontMatter { name: Some(name) }) if !name.trim().is_empty() => name,
        _ => file_name,
    }
}

/// Template text with any front matter removed.
pub fn extract_contents(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).map_err(|source| SubmitError::Template {
        path: path.to_path_buf(),
        source,
    })?;
    match front_matter(&contents) {
        Some((block, _)) => Ok(contents[block.end..].to_string()),
        None => Ok(contents),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub path: PathBuf,
}

/// Name each template, with paths made relative to `root` where possible.
pub fn describe(root: &Path, paths: &[PathBuf]) -> Vec<TemplateInfo> {
    paths
        .iter()
        .map(|p| TemplateInfo {
            name: extract_name(p),
            path: p.strip_prefix(root).unwrap_or(p).to_path_buf(),
        })
        .collect()
}
