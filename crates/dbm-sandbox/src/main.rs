//! dbm-sandbox - create DBM sandbox projects

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};
use sandbox_core::ProductConfig;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const BANNER: &str = r"       ____                                        ____
  ____/ / /_  ____ ___       _________ _____  ____/ / /_  ____  _  __
 / __  / __ \/ __ '__ \     / ___/ __ '/ __ \/ __  / __ \/ __ \| |/_/
/ /_/ / /_/ / / / / / /    (__  ) /_/ / / / / /_/ / /_/ / /_/ />  <
\__,_/_.___/_/ /_/ /_/    /____/\__,_/_/ /_/\__,_/_.___/\____/_/|_|";

/// dbm-sandbox product configuration
#[derive(Clone)]
pub struct SandboxConfig;

impl ProductConfig for SandboxConfig {
    fn name(&self) -> &'static str {
        "dbm-sandbox"
    }

    fn display_name(&self) -> &'static str {
        "DBM Sandbox"
    }

    fn banner(&self) -> &'static str {
        BANNER
    }

    fn welcome(&self) -> &'static str {
        "Welcome to the dbm sandboxing tool, where the goal is to help you create DBM sandboxes."
    }

    fn credential_env(&self) -> &'static str {
        "DD_API_KEY"
    }

    fn log_env(&self) -> &'static str {
        "DBM_SANDBOX_LOG"
    }

    fn cli_description(&self) -> &'static str {
        "A tool for automating the creation of a DBM sandbox"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        if current.as_deref() != Some(dir) {
            let shown = current
                .as_deref()
                .and_then(|cwd| dir.strip_prefix(cwd).ok())
                .unwrap_or(dir);
            steps.push(format!("cd {}", shown.display()));
        }

        steps.push("docker compose up -d".to_string());
        steps.push("Open Database Monitoring in Datadog to see your database".to_string());

        steps
    }
}

/// Takes no arguments; name and help text come from [`SandboxConfig`]
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {}

fn parse_args(config: &SandboxConfig) -> Args {
    let matches = Args::command()
        .name(config.name())
        .about(config.cli_description())
        .get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Diagnostics go to stderr and stay quiet unless the log variable is set
fn init_tracing(config: &SandboxConfig) {
    let filter = EnvFilter::try_from_env(config.log_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside of a prompt (inside one, the prompt handles it)
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = SandboxConfig;
    let _args = parse_args(&config);
    init_tracing(&config);

    let result = sandbox_core::run(&config).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_takes_no_arguments() {
        Args::command().debug_assert();
        assert!(Args::try_parse_from(["dbm-sandbox"]).is_ok());
        assert!(Args::try_parse_from(["dbm-sandbox", "extra"]).is_err());
    }

    #[test]
    fn test_next_steps_end_with_compose_up() {
        let dir = std::env::temp_dir().join("demo");
        let steps = SandboxConfig.next_steps(&dir);
        assert!(steps[0].starts_with("cd "));
        assert!(steps.contains(&"docker compose up -d".to_string()));
    }

    #[test]
    fn test_missing_credential_is_reported() {
        // name chosen so no real environment sets it
        #[derive(Clone)]
        struct Unset;
        impl ProductConfig for Unset {
            fn name(&self) -> &'static str {
                "unset"
            }
            fn display_name(&self) -> &'static str {
                "unset"
            }
            fn banner(&self) -> &'static str {
                ""
            }
            fn welcome(&self) -> &'static str {
                ""
            }
            fn credential_env(&self) -> &'static str {
                "DBM_SANDBOX_TEST_UNSET_CREDENTIAL"
            }
            fn log_env(&self) -> &'static str {
                "DBM_SANDBOX_TEST_LOG"
            }
            fn cli_description(&self) -> &'static str {
                ""
            }
            fn next_steps(&self, _dir: &Path) -> Vec<String> {
                Vec::new()
            }
        }

        let err = Unset.credential().unwrap_err();
        assert!(err.to_string().contains("DBM_SANDBOX_TEST_UNSET_CREDENTIAL"));
    }
}
