//! Multi-document YAML output

use crate::error::{GenerateError, Result};
use crate::generator::Resource;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Render resources as a YAML stream, one `---` separated document each.
/// No resources renders to an empty string.
pub fn render(resources: &[Resource]) -> Result<String> {
    let mut out = String::new();
    for resource in resources {
        out.push_str("---\n");
        out.push_str(&serde_yaml::to_string(resource).map_err(GenerateError::Serialize)?);
    }
    Ok(out)
}

/// Render resources into a writer.
pub fn write_to<W: Write>(resources: &[Resource], mut writer: W) -> std::io::Result<()> {
    let rendered = render(resources).map_err(std::io::Error::other)?;
    writer.write_all(rendered.as_bytes())?;
    writer.flush()
}

/// Write resources to `destination`, replacing any existing file.
///
/// The whole stream is rendered before the file is opened, so a
/// serialization failure leaves the destination untouched.
pub fn write(resources: &[Resource], destination: &Path) -> Result<()> {
    let rendered = render(resources)?;
    std::fs::write(destination, rendered).map_err(|source| GenerateError::Write {
        path: destination.to_path_buf(),
        source,
    })?;
    info!(
        path = %destination.display(),
        documents = resources.len(),
        "Wrote manifests"
    );
    Ok(())
}
