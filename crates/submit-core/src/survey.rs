//! Title/body survey.
//!
//! Resolves which fields still need input, picks a body template, runs the
//! text prompts and finishes with the confirmation menu.

use crate::ask::{checked_index, Answer, Asker, Prompt, Question};
use crate::config::FieldOptions;
use crate::confirm::confirm_submission;
use crate::error::{AskError, Result, SubmitError};
use crate::template;
use crate::terminal::KeySource;
use crate::types::{Decision, Defaults};
use std::io::Write;
use std::path::PathBuf;

pub const TITLE: &str = "title";
pub const BODY: &str = "body";
const TEMPLATE_INDEX: &str = "index";

pub struct Survey<'a> {
    asker: &'a mut dyn Asker,
    keys: &'a mut dyn KeySource,
    out: &'a mut dyn Write,
    options: &'a FieldOptions,
}

impl<'a> Survey<'a> {
    pub fn new(
        asker: &'a mut dyn Asker,
        keys: &'a mut dyn KeySource,
        out: &'a mut dyn Write,
        options: &'a FieldOptions,
    ) -> Self {
        Self {
            asker,
            keys,
            out,
            options,
        }
    }

    /// Collect a title and body, then ask what to do with them.
    ///
    /// A `provided_title`/`provided_body` that is `None` or empty is
    /// prompted for. Provided values are copied into the returned
    /// [`Decision`] unchanged.
    pub fn title_body(
        &mut self,
        provided_title: Option<&str>,
        provided_body: Option<&str>,
        defaults: &Defaults,
        template_paths: &[PathBuf],
    ) -> Result<Decision> {
        let provided_title = provided_title.filter(|s| !s.is_empty());
        let provided_body = provided_body.filter(|s| !s.is_empty());

        let mut decision = Decision {
            title: defaults.title.clone(),
            ..Decision::default()
        };
        let mut template_contents = String::new();

        if provided_body.is_none() {
            if template_paths.is_empty() {
                decision.body = defaults.body.clone();
            } else {
                template_contents = select_template(self.asker, template_paths)?;
                decision.body = template_contents.clone();
            }
        }

        let mut questions = Vec::new();
        if provided_title.is_none() {
            questions.push(title_question(&decision.title));
        }
        if provided_body.is_none() {
            questions.push(body_question(&decision.body));
        }

        if !questions.is_empty() {
            let answers = self.asker.ask(&questions).map_err(SubmitError::Prompt)?;
            if let Some(title) = answers.text(TITLE) {
                decision.title = title.to_string();
            }
            if let Some(body) = answers.text(BODY) {
                decision.body = body.to_string();
            }
        }

        if let Some(title) = provided_title {
            decision.title = title.to_string();
        }
        if let Some(body) = provided_body {
            decision.body = body.to_string();
        }

        if decision.body.is_empty() {
            decision.body = template_contents;
        }

        decision.action = confirm_submission(self.asker, self.keys, self.out, self.options)
            .map_err(SubmitError::Confirm)?;
        tracing::debug!(action = %decision.action, "survey finished");

        Ok(decision)
    }
}

fn title_question(default: &str) -> Question {
    Question::new(
        TITLE,
        Prompt::Input {
            message: "Title".to_string(),
            default: default.to_string(),
        },
    )
}

fn body_question(default: &str) -> Question {
    Question::new(
        BODY,
        Prompt::Editor {
            message: "Body".to_string(),
            file_name: "*.md".to_string(),
            default: default.to_string(),
            hide_default: true,
            append_default: true,
        },
    )
}

/// Content of the chosen template.
///
/// With several candidates the operator picks one by name; a single
/// candidate is used as is. No candidates yields an empty body.
pub fn select_template(asker: &mut dyn Asker, template_paths: &[PathBuf]) -> Result<String> {
    let index = match template_paths.len() {
        0 => return Ok(String::new()),
        1 => 0,
        _ => {
            let names: Vec<String> = template_paths
                .iter()
                .map(|p| template::extract_name(p))
                .collect();
            let question = Question::new(
                TEMPLATE_INDEX,
                Prompt::Select {
                    message: "Choose a template".to_string(),
                    options: names,
                },
            );
            let answers = asker
                .ask(std::slice::from_ref(&question))
                .map_err(SubmitError::Prompt)?;
            let index = match answers.get(TEMPLATE_INDEX) {
                Some(Answer::Index(i)) => *i,
                other => {
                    return Err(SubmitError::Prompt(AskError::InvalidAnswer {
                        name: TEMPLATE_INDEX.to_string(),
                        reason: format!("expected an option index, got {other:?}"),
                    }))
                }
            };
            checked_index(TEMPLATE_INDEX, index, question.prompt.options())?
        }
    };

    let path = &template_paths[index];
    tracing::debug!(template = %path.display(), "using template");
    template::extract_contents(path)
}
