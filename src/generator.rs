//! Version-file generation
//!
//! Renders a template file with the fields of a parsed [Version] and writes
//! the result, creating the output directory if needed. Placeholders are
//! `{major}`, `{minor}`, `{bug}`, `{stage}` and `{stage_rev}`; `{stage}`
//! expands to the stage's numeric value so generated headers can store it in
//! an integer field.

use crate::domain::Version;
use crate::error::{Result, VersionManagerError};
use std::fs;
use std::path::Path;

/// Substitute version fields into a template string
pub fn render_template(template: &str, version: &Version) -> String {
    template
        .replace("{major}", &version.major.to_string())
        .replace("{minor}", &version.minor.to_string())
        .replace("{bug}", &version.bug.to_string())
        .replace("{stage}", &version.stage.value().to_string())
        .replace("{stage_rev}", &version.stage_rev.to_string())
}

/// Generate a version file from a template file.
///
/// Reads `template_path`, substitutes the version fields and writes the
/// result to `output_path`. Missing template files are
/// [VersionManagerError::Template]; output I/O failures propagate as `Io`.
pub fn generate_version_file(
    version: &Version,
    template_path: &Path,
    output_path: &Path,
) -> Result<()> {
    let template = fs::read_to_string(template_path).map_err(|e| {
        VersionManagerError::template(format!(
            "cannot read template '{}': {}",
            template_path.display(),
            e
        ))
    })?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(output_path, render_template(&template, version))?;
    Ok(())
}
