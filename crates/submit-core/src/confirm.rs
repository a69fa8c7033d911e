//! Single-keystroke confirmation menu.
//!
//! The menu is printed, one key is read from the terminal in raw mode, and
//! the key either ends the loop (Enter submits, Esc or Ctrl-C cancels) or
//! opens an auxiliary sub-prompt after which the menu is shown again.

use crate::ask::Asker;
use crate::config::FieldOptions;
use crate::extra::ask_extra_fields;
use crate::terminal::KeySource;
use crate::types::{Action, ExtraField};
use crossterm::style::Stylize;
use std::io::{self, Write};

/// Bytes requested per read; enough for a short escape sequence.
pub const KEY_BUF_LEN: usize = 3;

const CTRL_C: u8 = 3;
const ESC: u8 = 27;
const CR: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Submit,
    Cancel,
    Extra(ExtraField),
    Other,
}

/// Classify the first byte of a read.
pub fn interpret(byte: u8) -> Key {
    match byte {
        CTRL_C | ESC => Key::Cancel,
        CR => Key::Submit,
        b => ExtraField::from_key(b as char).map_or(Key::Other, Key::Extra),
    }
}

pub fn render_menu(out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{} What's next?  {}",
        "?".green(),
        "[Use letters to select]".cyan()
    )?;
    writeln!(out, "  {} Submit", "(Enter)".green())?;
    writeln!(out, "  {} Cancel", "  (Esc)".green())?;
    writeln!(out, "  {}", "---".dark_grey())?;
    for field in ExtraField::all() {
        writeln!(
            out,
            "  {} {}",
            format!("({})", field.key()).green(),
            field.menu_label()
        )?;
    }
    out.flush()
}

/// Run the menu loop until the operator submits or cancels.
///
/// Auxiliary sub-prompt failures are logged and the menu is shown again.
/// A failed read from `keys` ends the loop with that error.
pub fn confirm_submission(
    asker: &mut dyn Asker,
    keys: &mut dyn KeySource,
    out: &mut dyn Write,
    options: &FieldOptions,
) -> io::Result<Action> {
    let mut buf = [0u8; KEY_BUF_LEN];

    loop {
        render_menu(out)?;

        let n = keys.read_key(&mut buf)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no key read from terminal",
            ));
        }
        tracing::debug!(read = n, byte = buf[0], "confirmation key");

        match interpret(buf[0]) {
            Key::Cancel => return Ok(Action::Cancel),
            Key::Submit => return Ok(Action::Submit),
            Key::Extra(field) => match ask_extra_fields(asker, options, &[field]) {
                // Selections are not part of the Decision yet.
                Ok(selection) => tracing::debug!(%field, ?selection, "discarding selection"),
                Err(e) => {
                    let cause = std::error::Error::source(&e)
                        .map(|s| s.to_string())
                        .unwrap_or_default();
                    tracing::warn!(%field, %cause, "{e}");
                }
            },
            Key::Other => {}
        }
    }
}
