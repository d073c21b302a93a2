//! Sandbox Core - library behind the `dbm-sandbox` CLI
//!
//! Asks the user a short series of questions (provider, agent version,
//! database and its version, project name) and stamps out a project directory
//! from a bundled set of templates.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - question model, DBMS registry, embedded
//!   assets, tree copying and template rendering
//! - **Layer 2: Workflow Orchestration** - providers and the [`session`] loop
//!   driven through the [`session::Prompter`] trait
//! - **Layer 3: CLI/TUI Interface** - cliclack widgets (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based widgets and session runner
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use sandbox_core::providers::Provider;
//! use sandbox_core::questions::Pipeline;
//!
//! let provider = Provider::from_name("Docker")?;
//! let mut pipeline = Pipeline::new(provider.question_steps());
//! while let Some(question) = pipeline.next_question() {
//!     let answer = my_answer_for(&question);
//!     pipeline.record(question, answer)?;
//! }
//! provider
//!     .generate_project(pipeline.answers(), &api_key, &std::env::current_dir()?)
//!     .await?;
//! ```

pub mod error;
pub mod product;
pub mod providers;
pub mod questions;
pub mod session;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Result, SandboxError};
pub use product::ProductConfig;
pub use providers::{Dbms, DockerProvider, Provider, ProviderKind};
pub use questions::{Answer, AnswerLog, Pipeline, Question, QuestionKey, QuestionKind};
pub use session::{Outcome, Prompter};

#[cfg(feature = "tui")]
pub use tui::run;
