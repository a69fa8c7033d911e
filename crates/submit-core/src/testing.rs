//! Scripted collaborators for unit tests.

use crate::ask::{Answer, Answers, Asker, Question};
use crate::error::AskError;
use crate::terminal::KeySource;
use std::collections::VecDeque;
use std::io;

/// Replies to questions from a fixed script, one reply per question.
pub struct ScriptedAsker {
    replies: VecDeque<Result<Answer, AskError>>,
    pub asked: Vec<Question>,
    pub calls: usize,
}

impl ScriptedAsker {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self::with_replies(answers.into_iter().map(Ok).collect())
    }

    pub fn with_replies(replies: Vec<Result<Answer, AskError>>) -> Self {
        Self {
            replies: replies.into(),
            asked: Vec::new(),
            calls: 0,
        }
    }

    pub fn messages(&self) -> Vec<&str> {
        self.asked.iter().map(|q| q.prompt.message()).collect()
    }
}

impl Asker for ScriptedAsker {
    fn ask(&mut self, questions: &[Question]) -> Result<Answers, AskError> {
        self.calls += 1;
        let mut answers = Answers::new();
        for q in questions {
            self.asked.push(q.clone());
            let reply = self.replies.pop_front().ok_or_else(|| AskError::InvalidAnswer {
                name: q.name.clone(),
                reason: "unscripted question".to_string(),
            })?;
            answers.insert(q.name.clone(), reply?);
        }
        Ok(answers)
    }
}

/// Yields scripted reads; each entry is the bytes of one read call.
pub struct ScriptedKeys {
    reads: VecDeque<io::Result<Vec<u8>>>,
    pub attempts: usize,
}

impl ScriptedKeys {
    pub fn bytes(keys: &[u8]) -> Self {
        Self::reads(keys.iter().map(|b| Ok(vec![*b])).collect())
    }

    pub fn reads(reads: Vec<io::Result<Vec<u8>>>) -> Self {
        Self {
            reads: reads.into(),
            attempts: 0,
        }
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.attempts += 1;
        let bytes = self
            .reads
            .pop_front()
            .unwrap_or_else(|| Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script ended")))?;
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        Ok(n)
    }
}
