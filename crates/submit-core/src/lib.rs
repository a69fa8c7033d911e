pub mod ask;
pub mod config;
pub mod confirm;
pub mod error;
pub mod extra;
pub mod io;
pub mod paths;
pub mod survey;
pub mod template;
pub mod terminal;
pub mod types;

#[cfg(test)]
mod testing;

pub use error::{AskError, Result, SubmitError};
