//! Question-asking abstraction.
//!
//! A survey hands an [`Asker`] a list of named [`Question`]s and gets back
//! [`Answers`] keyed by those names. The CLI provides a line-based terminal
//! implementation; tests use a scripted one.

use crate::error::AskError;
use std::collections::HashMap;

/// What kind of input a question collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Single-line text; blank input keeps `default`.
    Input { message: String, default: String },
    /// Pick one option; answered with [`Answer::Index`].
    Select {
        message: String,
        options: Vec<String>,
    },
    /// Pick any subset; answered with [`Answer::Indices`].
    MultiSelect {
        message: String,
        options: Vec<String>,
    },
    /// Multiline text edited in an external editor.
    Editor {
        message: String,
        /// Temp file name hint, e.g. `*.md`, used for the file extension.
        file_name: String,
        default: String,
        /// Do not echo `default` next to the message.
        hide_default: bool,
        /// Pre-fill the editor buffer with `default`.
        append_default: bool,
    },
}

impl Prompt {
    pub fn message(&self) -> &str {
        match self {
            Prompt::Input { message, .. }
            | Prompt::Select { message, .. }
            | Prompt::MultiSelect { message, .. }
            | Prompt::Editor { message, .. } => message,
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            Prompt::Select { options, .. } | Prompt::MultiSelect { options, .. } => options,
            Prompt::Input { .. } | Prompt::Editor { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub prompt: Prompt,
}

impl Question {
    pub fn new(name: impl Into<String>, prompt: Prompt) -> Self {
        Self {
            name: name.into(),
            prompt,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Index(usize),
    Indices(Vec<usize>),
}

/// Answers keyed by question name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(HashMap<String, Answer>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, answer: Answer) {
        self.0.insert(name.into(), answer);
    }

    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.0.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(Answer::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn index(&self, name: &str) -> Option<usize> {
        match self.0.get(name) {
            Some(Answer::Index(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn indices(&self, name: &str) -> Option<&[usize]> {
        match self.0.get(name) {
            Some(Answer::Indices(v)) => Some(v),
            _ => None,
        }
    }
}

pub trait Asker {
    /// Ask every question in order and collect the answers.
    fn ask(&mut self, questions: &[Question]) -> Result<Answers, AskError>;

    /// Ask a single unnamed question.
    fn ask_one(&mut self, prompt: Prompt) -> Result<Answer, AskError> {
        let question = Question::new(ONE, prompt);
        let mut answers = self.ask(std::slice::from_ref(&question))?;
        answers.0.remove(ONE).ok_or_else(|| AskError::InvalidAnswer {
            name: question.prompt.message().to_string(),
            reason: "no answer given".to_string(),
        })
    }
}

const ONE: &str = "value";

/// Check that `index` addresses one of `options`.
pub fn checked_index(name: &str, index: usize, options: &[String]) -> Result<usize, AskError> {
    if index < options.len() {
        Ok(index)
    } else {
        Err(AskError::InvalidAnswer {
            name: name.to_string(),
            reason: format!("option {index} out of range (0..{})", options.len()),
        })
    }
}
