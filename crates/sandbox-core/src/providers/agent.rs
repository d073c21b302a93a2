//! Agent image versions offered for the sandbox

/// Latest major releases of the Datadog Agent image, newest first.
///
/// https://hub.docker.com/r/datadog/agent/tags
pub const AGENT_VERSIONS: &[&str] = &["latest", "7.54.0", "7.53.0", "7.52.0"];

pub fn agent_versions() -> Vec<String> {
    AGENT_VERSIONS.iter().map(|v| v.to_string()).collect()
}
