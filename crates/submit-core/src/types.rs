use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// Outcome of the confirmation menu.
///
/// `Preview` is only the initial value of a [`Decision`]; the confirmation
/// loop resolves to `Submit` or `Cancel`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Preview,
    Submit,
    Cancel,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Preview => "preview",
            Action::Submit => "submit",
            Action::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Decision / Defaults
// ---------------------------------------------------------------------------

/// Resolved title, body and action produced by a survey.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    pub title: String,
    pub body: String,
    pub action: Action,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Defaults {
    pub title: String,
    pub body: String,
}

impl Defaults {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ExtraField
// ---------------------------------------------------------------------------

/// Auxiliary metadata category reachable from the confirmation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraField {
    Reviewers,
    Assignees,
    Labels,
    Projects,
    Milestone,
}

impl ExtraField {
    pub fn all() -> &'static [ExtraField] {
        &[
            ExtraField::Reviewers,
            ExtraField::Assignees,
            ExtraField::Labels,
            ExtraField::Projects,
            ExtraField::Milestone,
        ]
    }

    /// Shortcut key shown in the confirmation menu.
    pub fn key(self) -> char {
        match self {
            ExtraField::Reviewers => 'q',
            ExtraField::Assignees => 'a',
            ExtraField::Labels => 'l',
            ExtraField::Projects => 'p',
            ExtraField::Milestone => 'm',
        }
    }

    pub fn from_key(c: char) -> Option<ExtraField> {
        ExtraField::all().iter().copied().find(|f| f.key() == c)
    }

    /// Prompt message for the sub-prompt.
    pub fn message(self) -> &'static str {
        match self {
            ExtraField::Reviewers => "Reviewers",
            ExtraField::Assignees => "Assignees",
            ExtraField::Labels => "Labels",
            ExtraField::Projects => "Projects",
            ExtraField::Milestone => "Milestone",
        }
    }

    /// Menu entry text.
    pub fn menu_label(self) -> &'static str {
        match self {
            ExtraField::Reviewers => "Request reviewers",
            ExtraField::Assignees => "Assign people",
            ExtraField::Labels => "Add labels",
            ExtraField::Projects => "Add to projects",
            ExtraField::Milestone => "Add to milestone",
        }
    }
}

impl fmt::Display for ExtraField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// ExtraSelection
// ---------------------------------------------------------------------------

/// Values chosen in auxiliary sub-prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraSelection {
    pub reviewers: Vec<String>,
    pub assignees: Vec<String>,
    pub labels: Vec<String>,
    pub projects: Vec<String>,
    pub milestone: Option<String>,
}
