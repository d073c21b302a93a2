//! Question model and the ordered answer pipeline
//!
//! A provider exposes its questions as a list of [`QuestionStep`]s. Each step
//! builds its [`Question`] lazily from the answers recorded so far, so a later
//! step (e.g. the DBMS version) can depend on an earlier one (the DBMS).

use crate::error::{Result, SandboxError};
use std::fmt;

/// Which widget a question is presented with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Pick one entry from a closed list of options
    Selector,
    /// Free text, falling back to the default on empty submission
    TextInput,
}

/// Stable name of a question within a provider's pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKey {
    ProjectName,
    AgentVersion,
    Dbms,
    DbmsVersion,
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionKey::ProjectName => "project name",
            QuestionKey::AgentVersion => "agent version",
            QuestionKey::Dbms => "DBMS",
            QuestionKey::DbmsVersion => "DBMS version",
        };
        f.write_str(name)
    }
}

/// A single prompt presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub key: QuestionKey,
    pub kind: QuestionKind,
    pub prompt: String,
    /// Only used by [`QuestionKind::TextInput`]
    pub default_answer: String,
    /// Only used by [`QuestionKind::Selector`]
    pub options: Vec<String>,
    pub answer: Option<String>,
}

impl Question {
    pub fn selector(key: QuestionKey, prompt: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            key,
            kind: QuestionKind::Selector,
            prompt: prompt.into(),
            default_answer: String::new(),
            options,
            answer: None,
        }
    }

    pub fn text_input(
        key: QuestionKey,
        prompt: impl Into<String>,
        default_answer: impl Into<String>,
    ) -> Self {
        Self {
            key,
            kind: QuestionKind::TextInput,
            prompt: prompt.into(),
            default_answer: default_answer.into(),
            options: Vec::new(),
            answer: None,
        }
    }

    /// Fill in the answer. Consumes the question so it can only happen once.
    pub fn answered(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }
}

/// Result of running an interactive widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Given(String),
    /// The user interrupted the widget
    Cancelled,
}

impl Answer {
    /// The answer text, or `None` if cancelled or empty.
    ///
    /// An empty answer ends the session the same way a cancellation does.
    pub fn into_value(self) -> Option<String> {
        match self {
            Answer::Given(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}

/// One step of a provider's question pipeline
#[derive(Clone, Copy)]
pub struct QuestionStep {
    pub key: QuestionKey,
    generate: fn(&AnswerLog) -> Question,
}

impl QuestionStep {
    pub const fn new(key: QuestionKey, generate: fn(&AnswerLog) -> Question) -> Self {
        Self { key, generate }
    }

    /// Build this step's question from the answers recorded so far
    pub fn question(&self, answers: &AnswerLog) -> Question {
        (self.generate)(answers)
    }
}

impl fmt::Debug for QuestionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionStep").field("key", &self.key).finish()
    }
}

/// Append-only record of answered questions, in the order they were asked
#[derive(Debug, Clone, Default)]
pub struct AnswerLog {
    answered: Vec<Question>,
}

impl AnswerLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.answered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answered.is_empty()
    }

    /// Answer for `key`, if that question has been answered
    pub fn get(&self, key: QuestionKey) -> Option<&str> {
        self.answered
            .iter()
            .find(|q| q.key == key)
            .and_then(|q| q.answer.as_deref())
    }

    /// Like [`AnswerLog::get`], but a missing answer is an error
    pub fn require(&self, key: QuestionKey) -> Result<&str> {
        self.get(key).ok_or(SandboxError::MissingAnswer(key))
    }
}

/// Walks a provider's steps in order, recording each answer before the next
/// question is generated.
#[derive(Debug)]
pub struct Pipeline<'a> {
    steps: &'a [QuestionStep],
    answers: AnswerLog,
}

impl<'a> Pipeline<'a> {
    pub fn new(steps: &'a [QuestionStep]) -> Self {
        Self {
            steps,
            answers: AnswerLog::new(),
        }
    }

    /// Generate the next unanswered question, or `None` when all are answered
    pub fn next_question(&self) -> Option<Question> {
        self.steps
            .get(self.answers.len())
            .map(|step| step.question(&self.answers))
    }

    /// Record the answer to the question returned by [`Pipeline::next_question`]
    pub fn record(&mut self, question: Question, answer: String) -> Result<()> {
        let expected = match self.steps.get(self.answers.len()) {
            Some(step) => step.key,
            None => return Err(SandboxError::MissingAnswer(question.key)),
        };
        if question.key != expected {
            return Err(SandboxError::OutOfOrder {
                expected,
                got: question.key,
            });
        }
        self.answers.answered.push(question.answered(answer));
        Ok(())
    }

    pub fn answers(&self) -> &AnswerLog {
        &self.answers
    }

    pub fn into_answers(self) -> AnswerLog {
        self.answers
    }
}
