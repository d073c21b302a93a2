//! Sandbox providers
//!
//! A provider asks its own questions and turns the answers into a project
//! directory. Only the local Docker provider is implemented; the cloud
//! providers are named so they can be resolved, but report as not
//! implemented.

pub mod agent;
pub mod dbms;
pub mod docker;

use crate::error::{Result, SandboxError};
use crate::questions::{AnswerLog, QuestionStep};
use std::fmt;
use std::path::{Path, PathBuf};

pub use dbms::Dbms;
pub use docker::DockerProvider;

/// Every provider name the tool knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Docker,
    Rds,
    Aurora,
    Azure,
    Gcp,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::Docker,
        ProviderKind::Rds,
        ProviderKind::Aurora,
        ProviderKind::Azure,
        ProviderKind::Gcp,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderKind::Docker => "Docker",
            ProviderKind::Rds => "RDS",
            ProviderKind::Aurora => "Aurora",
            ProviderKind::Azure => "Azure",
            ProviderKind::Gcp => "GCP",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProviderKind::Docker => "Uses Docker locally to create your project",
            ProviderKind::Rds => "Uses Amazon RDS in our Amazon Sandbox to create your project",
            ProviderKind::Aurora => {
                "Uses Amazon Aurora in our Amazon Sandbox to create your project"
            }
            ProviderKind::Azure => "Uses our Microsoft Azure Sandbox to create your project",
            ProviderKind::Gcp => "Uses our Google Cloud Sandbox to create your project",
        }
    }

    pub fn is_implemented(&self) -> bool {
        matches!(self, ProviderKind::Docker)
    }

    /// Providers offered to the user, in display order
    pub fn available() -> Vec<ProviderKind> {
        Self::ALL
            .into_iter()
            .filter(ProviderKind::is_implemented)
            .collect()
    }

    pub fn from_name(name: &str) -> Option<ProviderKind> {
        Self::ALL.into_iter().find(|k| k.display_name() == name)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An implemented provider
#[derive(Debug, Clone)]
pub enum Provider {
    Docker(DockerProvider),
}

impl Provider {
    /// Resolve a provider by display name
    pub fn from_name(name: &str) -> Result<Provider> {
        match ProviderKind::from_name(name) {
            Some(kind) => Provider::from_kind(kind),
            None => Err(SandboxError::NotImplemented(name.to_string())),
        }
    }

    pub fn from_kind(kind: ProviderKind) -> Result<Provider> {
        match kind {
            ProviderKind::Docker => Ok(Provider::Docker(DockerProvider::new())),
            other => Err(SandboxError::NotImplemented(other.display_name().to_string())),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        match self {
            Provider::Docker(_) => ProviderKind::Docker,
        }
    }

    /// Ordered question steps for this provider
    pub fn question_steps(&self) -> &[QuestionStep] {
        match self {
            Provider::Docker(docker) => docker.question_steps(),
        }
    }

    /// Materialize the project under `base_dir`, returning its path
    pub async fn generate_project(
        &self,
        answers: &AnswerLog,
        credential: &str,
        base_dir: &Path,
    ) -> Result<PathBuf> {
        match self {
            Provider::Docker(docker) => docker.generate_project(answers, credential, base_dir).await,
        }
    }
}
