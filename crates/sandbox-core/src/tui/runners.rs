//! Interactive widgets backed by cliclack

use crate::error::SandboxError;
use crate::questions::Answer;
use crate::session::Prompter;
use anyhow::Result;
use std::io;

/// Longest text a [`TextPrompt`] accepts
pub const MAX_INPUT_LEN: usize = 156;

const NO_SELECTION: &str = "No option selected, 👋 Bye";
const NO_VALUE: &str = "No value provided, 👋 Bye";

/// Map a cliclack result, treating an interrupt (Esc / Ctrl-C) as cancel
fn interrupted_as_cancel(result: io::Result<String>, notice: &str) -> Result<Answer> {
    match result {
        Ok(value) => Ok(Answer::Given(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            cliclack::outro_cancel(notice)?;
            Ok(Answer::Cancelled)
        }
        Err(e) => Err(e.into()),
    }
}

/// Single choice from a closed list. Filtering is never enabled.
#[derive(Debug, Clone)]
pub struct Selector {
    prompt: String,
    options: Vec<String>,
    descriptions: Option<Vec<String>>,
}

impl Selector {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        descriptions: Option<Vec<String>>,
    ) -> Result<Self, SandboxError> {
        let prompt = prompt.into();
        if options.is_empty() {
            return Err(SandboxError::EmptyOptions(prompt));
        }
        Ok(Self {
            prompt,
            options,
            descriptions,
        })
    }

    fn hint(&self, index: usize) -> &str {
        self.descriptions
            .as_ref()
            .and_then(|d| d.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn run(&self) -> Result<Answer> {
        // Use indices as values so labels are returned verbatim
        let mut select = cliclack::select(&self.prompt);
        for (idx, option) in self.options.iter().enumerate() {
            select = select.item(idx, option, self.hint(idx));
        }

        let chosen = select
            .interact()
            .map(|idx: usize| self.options[idx].clone());
        interrupted_as_cancel(chosen, NO_SELECTION)
    }
}

/// Single-line text entry with a default shown as placeholder
#[derive(Debug, Clone)]
pub struct TextPrompt {
    prompt: String,
    default: String,
}

impl TextPrompt {
    pub fn new(prompt: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            default: default.into(),
        }
    }

    pub fn run(&self) -> Result<Answer> {
        let typed = cliclack::input(&self.prompt)
            .placeholder(&self.default)
            .required(false)
            .validate(|input: &String| {
                if input.chars().count() > MAX_INPUT_LEN {
                    Err(format!("Must be at most {} characters", MAX_INPUT_LEN))
                } else {
                    Ok(())
                }
            })
            .interact::<String>();

        let answer = interrupted_as_cancel(typed, NO_VALUE)?;
        Ok(match answer {
            Answer::Given(value) => Answer::Given(resolve_input(value, &self.default)),
            Answer::Cancelled => Answer::Cancelled,
        })
    }
}

/// Empty submission means "use the default"
pub fn resolve_input(typed: String, default: &str) -> String {
    if typed.is_empty() {
        default.to_string()
    } else {
        typed
    }
}

/// [`Prompter`] that shows real terminal widgets
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(
        &mut self,
        prompt: &str,
        options: &[String],
        hints: Option<&[String]>,
    ) -> Result<Answer> {
        Selector::new(prompt, options.to_vec(), hints.map(<[String]>::to_vec))?.run()
    }

    fn input(&mut self, prompt: &str, default: &str) -> Result<Answer> {
        TextPrompt::new(prompt, default).run()
    }
}
