//! Product configuration trait for the CLI binary
//!
//! The binary implements this trait to supply its identity and the
//! environment it reads, keeping the session logic free of hardcoded names.

use crate::error::{Result, SandboxError};
use std::path::Path;

/// Configuration for a sandbox-generating CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// ASCII-art banner printed before the first prompt
    fn banner(&self) -> &'static str;

    /// Welcome line shown under the banner
    fn welcome(&self) -> &'static str;

    /// Environment variable holding the API credential
    fn credential_env(&self) -> &'static str;

    /// Environment variable holding the diagnostic log filter
    fn log_env(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Instructions shown after the project has been created
    fn next_steps(&self, project_dir: &Path) -> Vec<String>;

    /// Read the credential from the environment. Unset and empty are both
    /// treated as missing.
    fn credential(&self) -> Result<String> {
        let var = self.credential_env();
        match std::env::var(var) {
            Ok(value) if !value.is_empty() => Ok(value),
            _ => Err(SandboxError::MissingCredential { var }),
        }
    }
}
