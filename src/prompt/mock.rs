// Gitstr Auth: Scripted line reader for tests
//
// Replays a fixed list of answers and records every prompt it was shown.
// Once the script runs out, reads fail with `PromptError::Closed`, the same
// way a closed stdin does.

use std::collections::VecDeque;

use super::{LineReader, PromptError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptCall {
    pub prompt: String,
    pub default: String,
    pub masked: bool,
}

pub struct ScriptedReader {
    script: VecDeque<Result<String, PromptError>>,
    calls: Vec<PromptCall>,
}

impl ScriptedReader {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_results(answers.into_iter().map(|a| Ok(a.into())).collect())
    }

    pub fn from_results(script: Vec<Result<String, PromptError>>) -> Self {
        Self {
            script: script.into(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[PromptCall] {
        &self.calls
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(
        &mut self,
        prompt: &str,
        default: &str,
        masked: bool,
    ) -> Result<String, PromptError> {
        self.calls.push(PromptCall {
            prompt: prompt.to_string(),
            default: default.to_string(),
            masked,
        });
        self.script.pop_front().unwrap_or(Err(PromptError::Closed))
    }
}
