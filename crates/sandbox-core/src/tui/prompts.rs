//! Charm-style CLI session using cliclack

use crate::error::SandboxError;
use crate::product::ProductConfig;
use crate::session::{self, Outcome};
use crate::tui::runners::TerminalPrompter;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Brand colour used for the banner (#632CA6)
const BRAND: (u8, u8, u8) = (0x63, 0x2C, 0xA6);

/// Run the interactive session.
///
/// Flow errors (missing credential, unknown provider, generation failure) are
/// reported to the user and the function still returns `Ok`. Terminal I/O
/// failures, whether from a prompt or from printing, are returned as errors.
pub async fn run<C: ProductConfig>(config: &C) -> Result<()> {
    print_banner(config);
    cliclack::intro(config.display_name())?;

    let credential = match config.credential() {
        Ok(credential) => credential,
        Err(e) => {
            cliclack::log::error(e.to_string())?;
            cliclack::outro_cancel("No project created")?;
            return Ok(());
        }
    };

    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut prompter = TerminalPrompter;

    match session::run_session(&mut prompter, &credential, &base_dir).await {
        Ok(Outcome::Created(project_dir)) => {
            cliclack::log::success("Your project has been created")?;
            print_next_steps(config, &project_dir)?;
        }
        // The widget already printed its goodbye notice
        Ok(Outcome::Cancelled) => {}
        Err(e) => {
            tracing::debug!(error = ?e, "session failed");
            let Some(message) = failure_message(&e) else {
                return Err(e);
            };
            cliclack::log::error(message)?;
            cliclack::outro_cancel("No project created")?;
        }
    }

    Ok(())
}

/// Message shown for a failed session, or `None` when the terminal itself
/// failed and there is nobody left to show it to.
fn failure_message(e: &anyhow::Error) -> Option<String> {
    if e.downcast_ref::<std::io::Error>().is_some() {
        return None;
    }
    match e.downcast_ref::<SandboxError>() {
        Some(err @ (SandboxError::NotImplemented(_) | SandboxError::MissingCredential { .. })) => {
            Some(err.to_string())
        }
        _ => Some(format!("Error generating project: {}", e)),
    }
}

fn print_banner<C: ProductConfig>(config: &C) {
    let (r, g, b) = BRAND;
    println!();
    for line in config.banner().lines() {
        println!("  {}", line.truecolor(r, g, b));
    }
    println!();
    println!("    {}", config.welcome());
    println!();
}

fn print_next_steps<C: ProductConfig>(config: &C, project_dir: &Path) -> Result<()> {
    let steps = config.next_steps(project_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy monitoring!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_provider_errors_have_no_generation_prefix() {
        let err = anyhow::Error::from(SandboxError::NotImplemented("Azure".to_string()));
        assert_eq!(
            failure_message(&err).unwrap(),
            r#"Provider "Azure" not implemented"#
        );
    }

    #[test]
    fn test_generation_errors_keep_prefix() {
        let err = anyhow::Error::from(SandboxError::TargetExists(PathBuf::from("demo")));
        let message = failure_message(&err).unwrap();
        assert!(message.starts_with("Error generating project: "));
        assert!(message.contains("demo"));

        let err = anyhow::Error::from(SandboxError::io(
            "write",
            "demo/docker-compose.yaml",
            io::Error::from(io::ErrorKind::PermissionDenied),
        ));
        assert!(failure_message(&err)
            .unwrap()
            .starts_with("Error generating project: Failed to write demo/docker-compose.yaml"));
    }

    #[test]
    fn test_terminal_failure_is_not_reported() {
        let err = anyhow::Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "tty closed"));
        assert!(failure_message(&err).is_none());
    }
}
