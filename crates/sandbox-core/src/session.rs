//! Question loop and project generation, independent of the terminal UI
//!
//! The interactive widgets sit behind the [`Prompter`] trait so the whole
//! flow can be driven by scripted answers.

use crate::providers::{Provider, ProviderKind};
use crate::questions::{Answer, AnswerLog, Pipeline, Question, QuestionKind};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const PROVIDER_PROMPT: &str = "What provider would you like to use?";

/// Source of answers for the session's questions
pub trait Prompter {
    /// Single choice from `options`. `hints` runs parallel to `options`.
    fn select(&mut self, prompt: &str, options: &[String], hints: Option<&[String]>)
        -> Result<Answer>;

    /// Free text, with `default` returned for an empty submission
    fn input(&mut self, prompt: &str, default: &str) -> Result<Answer>;

    /// Present a provider question with the matching widget
    fn ask(&mut self, question: &Question) -> Result<Answer> {
        match question.kind {
            QuestionKind::Selector => self.select(&question.prompt, &question.options, None),
            QuestionKind::TextInput => self.input(&question.prompt, &question.default_answer),
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The project was generated at this path
    Created(PathBuf),
    /// The user cancelled or gave an empty answer
    Cancelled,
}

/// Ask which provider to use. `None` means the user cancelled.
pub fn select_provider<P: Prompter>(prompter: &mut P) -> Result<Option<Provider>> {
    let available = ProviderKind::available();
    let names: Vec<String> = available.iter().map(|k| k.display_name().to_string()).collect();
    let descriptions: Vec<String> = available.iter().map(|k| k.description().to_string()).collect();

    let Some(name) = prompter
        .select(PROVIDER_PROMPT, &names, Some(descriptions.as_slice()))?
        .into_value()
    else {
        return Ok(None);
    };

    Ok(Some(Provider::from_name(&name)?))
}

/// Run the provider's questions in order. `None` means the session was
/// cancelled before every question was answered.
pub fn collect_answers<P: Prompter>(
    provider: &Provider,
    prompter: &mut P,
) -> Result<Option<AnswerLog>> {
    let mut pipeline = Pipeline::new(provider.question_steps());

    while let Some(question) = pipeline.next_question() {
        let Some(answer) = prompter.ask(&question)?.into_value() else {
            tracing::debug!(question = %question.key, "session cancelled");
            return Ok(None);
        };
        pipeline.record(question, answer)?;
    }

    Ok(Some(pipeline.into_answers()))
}

/// Full flow after the credential is known: provider, questions, generation.
///
/// Nothing is written to disk unless every question is answered.
pub async fn run_session<P: Prompter>(
    prompter: &mut P,
    credential: &str,
    base_dir: &Path,
) -> Result<Outcome> {
    let Some(provider) = select_provider(prompter)? else {
        return Ok(Outcome::Cancelled);
    };
    tracing::debug!(provider = %provider.kind(), "provider selected");

    let Some(answers) = collect_answers(&provider, prompter)? else {
        return Ok(Outcome::Cancelled);
    };

    let project_dir = provider
        .generate_project(&answers, credential, base_dir)
        .await?;
    Ok(Outcome::Created(project_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SandboxError;
    use std::collections::VecDeque;

    /// Replays canned answers and records the prompts it was shown
    struct Scripted {
        answers: VecDeque<Answer>,
        prompts: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[Option<&str>]) -> Self {
            Self {
                answers: answers
                    .iter()
                    .map(|a| match a {
                        Some(v) => Answer::Given(v.to_string()),
                        None => Answer::Cancelled,
                    })
                    .collect(),
                prompts: Vec::new(),
            }
        }

        fn next(&mut self, prompt: &str) -> Result<Answer> {
            self.prompts.push(prompt.to_string());
            Ok(self.answers.pop_front().unwrap_or(Answer::Cancelled))
        }
    }

    impl Prompter for Scripted {
        fn select(
            &mut self,
            prompt: &str,
            options: &[String],
            _hints: Option<&[String]>,
        ) -> Result<Answer> {
            assert!(!options.is_empty());
            self.next(prompt)
        }

        fn input(&mut self, prompt: &str, default: &str) -> Result<Answer> {
            match self.next(prompt)? {
                Answer::Given(v) if v.is_empty() => Ok(Answer::Given(default.to_string())),
                other => Ok(other),
            }
        }
    }

    #[test]
    fn test_cancel_at_provider_prompt() {
        let mut prompter = Scripted::new(&[None]);
        assert!(select_provider(&mut prompter).unwrap().is_none());
    }

    #[test]
    fn test_unknown_provider_is_not_implemented() {
        let mut prompter = Scripted::new(&[Some("Azure")]);
        let err = select_provider(&mut prompter).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SandboxError>(),
            Some(SandboxError::NotImplemented(name)) if name == "Azure"
        ));
    }

    #[test]
    fn test_collect_answers_stops_at_first_cancel() {
        let provider = Provider::from_name("Docker").unwrap();
        let mut prompter = Scripted::new(&[Some("demo"), Some("latest"), None, Some("16")]);

        assert!(collect_answers(&provider, &mut prompter).unwrap().is_none());
        assert_eq!(prompter.prompts.len(), 3);
    }

    #[test]
    fn test_empty_text_input_uses_default_project_name() {
        let provider = Provider::from_name("Docker").unwrap();
        let mut prompter = Scripted::new(&[Some(""), Some("latest"), Some("MySQL"), Some("8.0.37")]);

        let answers = collect_answers(&provider, &mut prompter).unwrap().unwrap();
        assert_eq!(
            answers.get(crate::questions::QuestionKey::ProjectName),
            Some("dbm-sandbox")
        );
    }

    #[tokio::test]
    async fn test_run_session_creates_project() {
        let tmp = tempfile::tempdir().unwrap();
        let mut prompter = Scripted::new(&[
            Some("Docker"),
            Some("demo"),
            Some("latest"),
            Some("Postgres"),
            Some("16"),
        ]);

        let outcome = run_session(&mut prompter, "secret", tmp.path()).await.unwrap();
        assert_eq!(outcome, Outcome::Created(tmp.path().join("demo")));
        assert_eq!(prompter.prompts[0], PROVIDER_PROMPT);
    }
}
