use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// FieldOptions
// ---------------------------------------------------------------------------

/// Candidate lists offered by the auxiliary sub-prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Shared pool for reviewers and assignees.
    #[serde(default = "default_people")]
    pub people: Vec<String>,
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,
    #[serde(default = "default_projects")]
    pub projects: Vec<String>,
    #[serde(default = "default_milestones")]
    pub milestones: Vec<String>,
}

/// Milestone entry meaning "no milestone".
pub const NO_MILESTONE: &str = "(none)";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_people() -> Vec<String> {
    strings(&[
        "github/cli",
        "github/hubbers",
        "mislav",
        "probablycorey",
        "vilmibm",
        "ampinsk",
        "billygriffin",
    ])
}

fn default_labels() -> Vec<String> {
    strings(&["bug", "discuss", "documentation", "feature", "help wanted"])
}

fn default_projects() -> Vec<String> {
    strings(&["Roadmap", "Q4 Planning", "Q/A Testing"])
}

fn default_milestones() -> Vec<String> {
    strings(&[NO_MILESTONE, "1.1-release", "1.2-beta"])
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            people: default_people(),
            labels: default_labels(),
            projects: default_projects(),
            milestones: default_milestones(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fields: FieldOptions,
    /// Editor command for the body prompt; falls back to `$VISUAL`/`$EDITOR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Config {
    /// Load the effective config for `root`.
    ///
    /// Priority:
    /// 1. `<root>/.submit/config.yaml`
    /// 2. `~/.submit/config.yaml`
    /// 3. Built-in defaults
    pub fn load(root: &Path) -> Result<Self> {
        match Self::source(root) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Path of the file [`Config::load`] would read, if any.
    pub fn source(root: &Path) -> Option<PathBuf> {
        let project = paths::config_path(root);
        if project.exists() {
            return Some(project);
        }
        paths::global_config_path().filter(|p| p.exists())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_yaml(&paths::config_path(root), self)
    }

    /// Write the built-in defaults to the project config unless one exists.
    /// Returns true if the file was written.
    pub fn init(root: &Path) -> Result<bool> {
        if paths::config_path(root).exists() {
            return Ok(false);
        }
        Self::default().save(root)?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        let lists = [
            ("people", &self.fields.people),
            ("labels", &self.fields.labels),
            ("projects", &self.fields.projects),
            ("milestones", &self.fields.milestones),
        ];

        for (name, list) in lists {
            if list.is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("fields.{name} is empty; its prompt will offer no options"),
                });
                continue;
            }
            let mut seen = HashSet::new();
            for item in list {
                if !seen.insert(item.as_str()) {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Warning,
                        message: format!("fields.{name} lists '{item}' more than once"),
                    });
                }
            }
            if list.iter().any(|s| s.trim().is_empty()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("fields.{name} contains a blank entry"),
                });
            }
        }

        if let Some(editor) = &self.editor {
            if editor.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: "editor is set but blank".to_string(),
                });
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_from_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from(&dir.path().join("x.yaml")).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".submit")).unwrap();
        std::fs::write(
            dir.path().join(".submit/config.yaml"),
            "fields:\n  labels: [p1, p2]\neditor: nano\n",
        )
        .unwrap();

        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.fields.labels, vec!["p1", "p2"]);
        assert_eq!(cfg.fields.projects, default_projects());
        assert_eq!(cfg.fields.milestones[0], NO_MILESTONE);
        assert_eq!(cfg.editor.as_deref(), Some("nano"));
    }

    #[test]
    fn empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let cfg = Config {
            editor: Some("code --wait".to_string()),
            ..Config::default()
        };
        cfg.save(dir.path()).unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), cfg);
    }

    #[test]
    fn init_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        assert!(Config::init(dir.path()).unwrap());
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());

        std::fs::write(paths::config_path(dir.path()), "editor: ed\n").unwrap();
        assert!(!Config::init(dir.path()).unwrap());
        assert_eq!(Config::load(dir.path()).unwrap().editor.as_deref(), Some("ed"));
    }

    #[test]
    fn default_config_has_no_warnings() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_flags_empty_and_duplicate_lists() {
        let mut cfg = Config::default();
        cfg.fields.projects.clear();
        cfg.fields.labels = vec!["bug".into(), "bug".into()];

        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.message.contains("fields.projects")));
        assert!(warnings.iter().any(|w| w.message.contains("'bug'")));
    }

    #[test]
    fn validate_flags_blank_entries() {
        let mut cfg = Config::default();
        cfg.fields.people.push("  ".into());
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Error);
    }
}
