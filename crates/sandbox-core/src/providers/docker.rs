//! Local Docker provider
//!
//! Generates a project directory holding a `docker-compose.yaml` that runs
//! the Datadog Agent next to the chosen database, plus the database's config
//! and init scripts copied from the asset bundle.

use super::agent::agent_versions;
use super::dbms::Dbms;
use crate::error::Result;
use crate::questions::{AnswerLog, Question, QuestionKey, QuestionStep};
use crate::templates::{self, EmbeddedFs, ASSETS};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Name of the rendered compose manifest in the generated project
pub const COMPOSE_FILE: &str = "docker-compose.yaml";

const COMPOSE_TEMPLATE: &str = "docker-compose.tmpl";

const DEFAULT_PROJECT_NAME: &str = "dbm-sandbox";

fn project_name(_: &AnswerLog) -> Question {
    Question::text_input(
        QuestionKey::ProjectName,
        "What is your project name?",
        DEFAULT_PROJECT_NAME,
    )
}

fn agent_version(_: &AnswerLog) -> Question {
    Question::selector(
        QuestionKey::AgentVersion,
        "What version of the agent would you like to use?",
        agent_versions(),
    )
}

fn dbms(_: &AnswerLog) -> Question {
    Question::selector(
        QuestionKey::Dbms,
        "What DBMS would you like to use?",
        Dbms::names(),
    )
}

fn dbms_version(answers: &AnswerLog) -> Question {
    let dbms = Dbms::lookup(answers.get(QuestionKey::Dbms).unwrap_or_default());
    Question::selector(
        QuestionKey::DbmsVersion,
        "What version of the DBMS would you like to use?",
        dbms.versions.iter().map(|v| v.to_string()).collect(),
    )
}

const STEPS: &[QuestionStep] = &[
    QuestionStep::new(QuestionKey::ProjectName, project_name),
    QuestionStep::new(QuestionKey::AgentVersion, agent_version),
    QuestionStep::new(QuestionKey::Dbms, dbms),
    QuestionStep::new(QuestionKey::DbmsVersion, dbms_version),
];

/// Values substituted into the compose template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    pub agent: AgentTemplateData,
    pub db: DbTemplateData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentTemplateData {
    pub version: String,
    pub api_key: String,
    /// Also the name of the generated directory
    pub project_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbTemplateData {
    pub dbms: String,
    pub version: String,
}

impl TemplateData {
    pub fn from_answers(answers: &AnswerLog, api_key: &str) -> Result<Self> {
        Ok(Self {
            agent: AgentTemplateData {
                version: answers.require(QuestionKey::AgentVersion)?.to_string(),
                api_key: api_key.to_string(),
                project_name: answers.require(QuestionKey::ProjectName)?.to_string(),
            },
            db: DbTemplateData {
                dbms: answers.require(QuestionKey::Dbms)?.to_string(),
                version: answers.require(QuestionKey::DbmsVersion)?.to_string(),
            },
        })
    }
}

/// Builds sandbox projects that run locally with Docker Compose
#[derive(Debug, Clone)]
pub struct DockerProvider {
    assets: &'static EmbeddedFs,
    /// Location of this provider's templates inside `assets`
    template_root: &'static str,
}

impl Default for DockerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DockerProvider {
    pub fn new() -> Self {
        Self {
            assets: &ASSETS,
            template_root: "docker",
        }
    }

    pub fn question_steps(&self) -> &'static [QuestionStep] {
        STEPS
    }

    /// Create `<base_dir>/<project name>` from the collected answers.
    ///
    /// Fails without touching the filesystem if the target already exists.
    /// Any later failure leaves what was already written on disk.
    pub async fn generate_project(
        &self,
        answers: &AnswerLog,
        api_key: &str,
        base_dir: &Path,
    ) -> Result<PathBuf> {
        let data = TemplateData::from_answers(answers, api_key)?;
        let project_dir = base_dir.join(&data.agent.project_name);

        templates::ensure_absent(&project_dir).await?;
        templates::create_directory(&project_dir).await?;

        // Asset subtrees are named after the raw answer, without the lookup fallback
        let dbms_dir = format!("{}/{}", self.template_root, data.db.dbms.to_lowercase());
        let copied = templates::copy_tree(self.assets, &dbms_dir, &project_dir).await?;
        tracing::info!(
            dbms = %data.db.dbms,
            files = copied.len(),
            "copied database assets"
        );

        let compose_template = format!("{}/{}", self.template_root, COMPOSE_TEMPLATE);
        let compose = templates::render_template(self.assets, &compose_template, &data)?;
        templates::write_rendered(&project_dir.join(COMPOSE_FILE), &compose).await?;

        tracing::info!(project = %project_dir.display(), "project generated");
        Ok(project_dir)
    }
}
