//! Render bundled text templates with tera

use crate::error::{Result, SandboxError};
use crate::templates::bundle::EmbeddedFs;
use serde::Serialize;
use tera::{Context, Tera};

/// Render the bundle template at `path` against `data`.
///
/// Templates are rendered without autoescaping since the output is YAML, not
/// HTML.
pub fn render_template<T: Serialize>(assets: &EmbeddedFs, path: &str, data: &T) -> Result<String> {
    let source = assets.read_to_str(path)?;
    render_str(path, source, data)
}

pub fn render_str<T: Serialize>(name: &str, source: &str, data: &T) -> Result<String> {
    let render_err = |source| SandboxError::Render {
        template: name.to_string(),
        source,
    };

    let context = Context::from_serialize(data).map_err(render_err)?;
    Tera::one_off(source, &context, false).map_err(render_err)
}
