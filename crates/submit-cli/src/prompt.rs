//! Line-based [`Asker`] for interactive terminals.

use crate::editor;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use submit_core::ask::{Answer, Answers, Asker, Prompt, Question};
use submit_core::AskError;

pub struct TerminalAsker<R, W> {
    input: R,
    output: W,
    editor: Option<String>,
}

impl TerminalAsker<StdinLock<'static>, Stdout> {
    pub fn stdio(editor: Option<String>) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), editor)
    }
}

impl<R: BufRead, W: Write> TerminalAsker<R, W> {
    pub fn new(input: R, output: W, editor: Option<String>) -> Self {
        Self {
            input,
            output,
            editor,
        }
    }

    /// One line without its terminator; end of input means the operator bailed.
    fn read_line(&mut self) -> Result<String, AskError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AskError::Interrupted);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn input(&mut self, message: &str, default: &str) -> Result<Answer, AskError> {
        if default.is_empty() {
            write!(self.output, "? {message} ")?;
        } else {
            write!(self.output, "? {message} ({default}) ")?;
        }
        self.output.flush()?;

        let line = self.read_line()?;
        let value = line.trim();
        Ok(Answer::Text(if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }))
    }

    fn list_options(&mut self, message: &str, options: &[String]) -> io::Result<()> {
        writeln!(self.output, "? {message}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {option}", i + 1)?;
        }
        Ok(())
    }

    fn select(&mut self, message: &str, options: &[String]) -> Result<Answer, AskError> {
        if options.is_empty() {
            return Err(AskError::InvalidAnswer {
                name: message.to_string(),
                reason: "no options to choose from".to_string(),
            });
        }
        self.list_options(message, options)?;
        loop {
            write!(self.output, "  Choose [1-{}]: ", options.len())?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_choice(&line, options.len()) {
                Some(i) => return Ok(Answer::Index(i)),
                None => writeln!(
                    self.output,
                    "  Enter a number between 1 and {}",
                    options.len()
                )?,
            }
        }
    }

    fn multi_select(&mut self, message: &str, options: &[String]) -> Result<Answer, AskError> {
        self.list_options(message, options)?;
        loop {
            write!(self.output, "  Choose any (e.g. 1,3), enter for none: ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match parse_choices(&line, options.len()) {
                Some(v) => return Ok(Answer::Indices(v)),
                None => writeln!(
                    self.output,
                    "  Enter numbers between 1 and {}",
                    options.len()
                )?,
            }
        }
    }

    fn edit_text(
        &mut self,
        message: &str,
        file_name: &str,
        default: &str,
        hide_default: bool,
        append_default: bool,
    ) -> Result<Answer, AskError> {
        let Some(command) = self.editor.clone() else {
            // No editor available: fall back to a single line.
            let shown = if hide_default { "" } else { default };
            return match self.input(message, shown)? {
                Answer::Text(s) if s.is_empty() => Ok(Answer::Text(default.to_string())),
                other => Ok(other),
            };
        };

        loop {
            write!(
                self.output,
                "? {message} [(e) to launch {}, enter to skip] ",
                editor::display_name(&command)
            )?;
            if !hide_default && !default.is_empty() {
                write!(self.output, "({default}) ")?;
            }
            self.output.flush()?;

            match self.read_line()?.trim() {
                "" => return Ok(Answer::Text(default.to_string())),
                "e" | "E" => {
                    let initial = if append_default { default } else { "" };
                    let text = editor::edit(&command, initial, file_name)?;
                    return Ok(Answer::Text(text));
                }
                _ => continue,
            }
        }
    }
}

impl<R: BufRead, W: Write> Asker for TerminalAsker<R, W> {
    fn ask(&mut self, questions: &[Question]) -> Result<Answers, AskError> {
        let mut answers = Answers::new();
        for q in questions {
            let answer = match &q.prompt {
                Prompt::Input { message, default } => self.input(message, default)?,
                Prompt::Select { message, options } => self.select(message, options)?,
                Prompt::MultiSelect { message, options } => self.multi_select(message, options)?,
                Prompt::Editor {
                    message,
                    file_name,
                    default,
                    hide_default,
                    append_default,
                } => self.edit_text(message, file_name, default, *hide_default, *append_default)?,
            };
            answers.insert(q.name.clone(), answer);
        }
        Ok(answers)
    }
}

/// 1-based choice to 0-based index.
fn parse_choice(line: &str, count: usize) -> Option<usize> {
    let n: usize = line.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}

/// Comma or space separated 1-based choices; blank is the empty set.
fn parse_choices(line: &str, count: usize) -> Option<Vec<usize>> {
    let mut chosen = Vec::new();
    for token in line.split([',', ' ']).filter(|t| !t.is_empty()) {
        let i = parse_choice(token, count)?;
        if !chosen.contains(&i) {
            chosen.push(i);
        }
    }
    Some(chosen)
}
