//! README rendering and writing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ansible_readme_render::ReadmeRenderer;

use crate::error::{Error, Result};
use crate::gather::RoleDocumentation;
use crate::locator::role_name;
use crate::report::{Event, Reporter};

/// File name used when `--name` is not given.
pub const DEFAULT_README_NAME: &str = "README.md";

/// Renders every gathered record, keyed by role name.
pub fn render_readmes(
    renderer: &ReadmeRenderer,
    records: &BTreeMap<String, RoleDocumentation>,
) -> Result<BTreeMap<String, String>> {
    records
        .iter()
        .map(|(name, record)| Ok((name.clone(), renderer.render(record)?)))
        .collect()
}

/// Writes `content` to `role_path/readme_name`.
///
/// # Errors
///
/// [`Error::ReadmeAlreadyExists`] when the file exists and `force` is false.
pub fn write_readme(role_path: &Path, readme_name: &str, content: &str, force: bool) -> Result<PathBuf> {
    let path = role_path.join(readme_name);
    if path.exists() && !force {
        return Err(Error::ReadmeAlreadyExists { path });
    }

    fs::write(&path, content).map_err(|err| Error::io(&path, err))?;
    Ok(path)
}

/// Writes the rendered README of every role, stopping at the first refusal.
pub fn write_readmes(
    role_paths: &[PathBuf],
    readmes: &BTreeMap<String, String>,
    readme_name: &str,
    force: bool,
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(role_paths.len());

    for role_path in role_paths {
        let name = role_name(role_path);
        let Some(content) = readmes.get(&name) else {
            tracing::warn!(role = %name, "no rendered README for role");
            continue;
        };

        reporter.report(Event::ReadmeRendered {
            role_name: name.clone(),
            content: content.clone(),
        });

        let path = write_readme(role_path, readme_name, content, force)?;
        reporter.report(Event::ReadmeWritten { path: path.clone() });
        written.push(path);
    }
    Ok(written)
}
