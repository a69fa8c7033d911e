//! Auxiliary metadata sub-prompts offered from the confirmation menu.

use crate::ask::{checked_index, Answer, Asker, Prompt};
use crate::config::{FieldOptions, NO_MILESTONE};
use crate::error::{AskError, Result, SubmitError};
use crate::types::{ExtraField, ExtraSelection};

/// Prompt for each of `fields` in the order given.
pub fn ask_extra_fields(
    asker: &mut dyn Asker,
    options: &FieldOptions,
    fields: &[ExtraField],
) -> Result<ExtraSelection> {
    let mut selection = ExtraSelection::default();

    for field in fields {
        match field {
            ExtraField::Reviewers => {
                selection.reviewers = ask_many(asker, *field, &options.people)?;
            }
            ExtraField::Assignees => {
                selection.assignees = ask_many(asker, *field, &options.people)?;
            }
            ExtraField::Labels => {
                selection.labels = ask_many(asker, *field, &options.labels)?;
            }
            ExtraField::Projects => {
                selection.projects = ask_many(asker, *field, &options.projects)?;
            }
            ExtraField::Milestone => {
                selection.milestone = ask_milestone(asker, &options.milestones)?;
            }
        }
    }

    Ok(selection)
}

fn ask_many(asker: &mut dyn Asker, field: ExtraField, options: &[String]) -> Result<Vec<String>> {
    let answer = asker
        .ask_one(Prompt::MultiSelect {
            message: field.message().to_string(),
            options: options.to_vec(),
        })
        .map_err(SubmitError::Prompt)?;

    let indices = match answer {
        Answer::Indices(v) => v,
        other => return Err(SubmitError::Prompt(unexpected(field, &other))),
    };

    indices
        .into_iter()
        .map(|i| {
            checked_index(field.message(), i, options)
                .map(|i| options[i].clone())
                .map_err(SubmitError::Prompt)
        })
        .collect()
}

fn ask_milestone(asker: &mut dyn Asker, options: &[String]) -> Result<Option<String>> {
    let field = ExtraField::Milestone;
    let answer = asker
        .ask_one(Prompt::Select {
            message: field.message().to_string(),
            options: options.to_vec(),
        })
        .map_err(SubmitError::Prompt)?;

    let index = match answer {
        Answer::Index(i) => checked_index(field.message(), i, options)?,
        other => return Err(SubmitError::Prompt(unexpected(field, &other))),
    };

    let chosen = &options[index];
    Ok((chosen != NO_MILESTONE).then(|| chosen.clone()))
}

fn unexpected(field: ExtraField, answer: &Answer) -> AskError {
    AskError::InvalidAnswer {
        name: field.message().to_string(),
        reason: format!("unexpected answer {answer:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedAsker;

    #[test]
    fn reviewers_and_assignees_share_people_pool() {
        let options = FieldOptions::default();
        let mut asker = ScriptedAsker::new(vec![
            Answer::Indices(vec![0, 2]),
            Answer::Indices(vec![1]),
        ]);

        let sel = ask_extra_fields(
            &mut asker,
            &options,
            &[ExtraField::Reviewers, ExtraField::Assignees],
        )
        .unwrap();

        assert_eq!(sel.reviewers, vec![options.people[0].clone(), options.people[2].clone()]);
        assert_eq!(sel.assignees, vec![options.people[1].clone()]);
        assert_eq!(asker.asked[0].prompt.options(), options.people.as_slice());
        assert_eq!(asker.asked[1].prompt.options(), options.people.as_slice());
        assert_eq!(asker.messages(), vec!["Reviewers", "Assignees"]);
    }

    #[test]
    fn labels_use_multi_select() {
        let mut asker = ScriptedAsker::new(vec![Answer::Indices(vec![0, 4])]);
        let sel = ask_extra_fields(&mut asker, &FieldOptions::default(), &[ExtraField::Labels])
            .unwrap();
        assert_eq!(sel.labels, vec!["bug", "help wanted"]);
        assert!(matches!(asker.asked[0].prompt, Prompt::MultiSelect { .. }));
    }

    #[test]
    fn milestone_uses_single_select() {
        let mut asker = ScriptedAsker::new(vec![Answer::Index(2)]);
        let sel =
            ask_extra_fields(&mut asker, &FieldOptions::default(), &[ExtraField::Milestone])
                .unwrap();
        assert_eq!(sel.milestone.as_deref(), Some("1.2-beta"));
        assert!(matches!(asker.asked[0].prompt, Prompt::Select { .. }));
    }

    #[test]
    fn milestone_none_entry_clears_selection() {
        let mut asker = ScriptedAsker::new(vec![Answer::Index(0)]);
        let sel =
            ask_extra_fields(&mut asker, &FieldOptions::default(), &[ExtraField::Milestone])
                .unwrap();
        assert!(sel.milestone.is_none());
        assert_eq!(sel, ExtraSelection::default());
    }

    #[test]
    fn prompt_failure_is_could_not_prompt() {
        let mut asker = ScriptedAsker::with_replies(vec![Err(AskError::Interrupted)]);
        let err = ask_extra_fields(&mut asker, &FieldOptions::default(), &[ExtraField::Projects])
            .unwrap_err();
        assert!(matches!(err, SubmitError::Prompt(AskError::Interrupted)));
        assert_eq!(err.to_string(), "could not prompt");
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut asker = ScriptedAsker::new(vec![Answer::Indices(vec![99])]);
        let err = ask_extra_fields(&mut asker, &FieldOptions::default(), &[ExtraField::Projects])
            .unwrap_err();
        assert!(matches!(err, SubmitError::Prompt(AskError::InvalidAnswer { .. })));
    }
}
