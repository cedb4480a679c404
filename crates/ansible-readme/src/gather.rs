//! Documentation gathering.
//!
//! Each role contributes up to three YAML files plus a synthetic record:
//!
//! | Key | Source | When missing or empty |
//! |-----|--------|-----------------------|
//! | `meta` | `meta/main.yml` | `{galaxy_info: {}}` |
//! | `defaults` | `defaults/main.yml` | `{}` |
//! | `docs` | `docs/main.yml` | `{}` |
//! | `extras` | the role directory | always `{role_name: <basename>}` |
//!
//! Files are loaded with safe semantics: explicit YAML tags are refused.
//! Merge keys are expanded and a repeated key keeps its last value.
//! Malformed YAML is fatal; only absence is tolerated.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::locator::{role_name, MAIN_FILE};
use crate::report::{Event, Reporter};
use crate::yaml;

/// Key `meta` always carries.
pub const GALAXY_INFO: &str = "galaxy_info";

/// Everything a README template can reference for one role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleDocumentation {
    pub meta: Mapping,
    pub defaults: Mapping,
    pub docs: Mapping,
    pub extras: Extras,
}

/// Values derived from the role itself rather than its files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extras {
    pub role_name: String,
}

/// Loads a YAML mapping from `path`, or an empty mapping if the file is absent or empty.
pub fn load_yaml_or_empty(path: &Path) -> Result<Mapping> {
    if !path.exists() {
        return Ok(Mapping::new());
    }

    let content = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    if is_blank(content) {
        return Ok(Mapping::new());
    }

    let value = yaml::from_str(content).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    reject_tags(path, &value)?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        value if is_empty(&value) => Ok(Mapping::new()),
        _ => Err(Error::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}

/// Nothing but whitespace and comments.
fn is_blank(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}

fn reject_tags(path: &Path, value: &Value) -> Result<()> {
    match value {
        Value::Tagged(tagged) => Err(Error::UnsafeYamlTag {
            path: path.to_path_buf(),
            tag: tagged.tag.to_string(),
        }),
        Value::Sequence(items) => items.iter().try_for_each(|item| reject_tags(path, item)),
        Value::Mapping(mapping) => mapping.iter().try_for_each(|(key, value)| {
            reject_tags(path, key)?;
            reject_tags(path, value)
        }),
        _ => Ok(()),
    }
}

/// Documents that carry nothing (`~`, `false`, `0`, `""`, `[]`) count as empty.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(mapping) => mapping.is_empty(),
        Value::Tagged(_) => false,
    }
}

fn role_file(role_path: &Path, dir: &str) -> PathBuf {
    role_path.join(dir).join(MAIN_FILE)
}

/// Role metadata from `meta/main.yml`, with `galaxy_info` always present.
pub fn gather_meta(role_path: &Path) -> Result<Mapping> {
    let mut meta = load_yaml_or_empty(&role_file(role_path, "meta"))?;
    let key = Value::from(GALAXY_INFO);
    if !meta.contains_key(&key) {
        meta.insert(key, Value::Mapping(Mapping::new()));
    }
    Ok(meta)
}

/// Role variables from `defaults/main.yml`.
pub fn gather_defaults(role_path: &Path) -> Result<Mapping> {
    load_yaml_or_empty(&role_file(role_path, "defaults"))
}

/// Hand-written variable documentation from `docs/main.yml`.
pub fn gather_docs(role_path: &Path) -> Result<Mapping> {
    load_yaml_or_empty(&role_file(role_path, "docs"))
}

pub fn gather_extras(role_path: &Path) -> Extras {
    Extras {
        role_name: role_name(role_path),
    }
}

/// Builds the full documentation record for one role.
pub fn gather_role(role_path: &Path) -> Result<RoleDocumentation> {
    Ok(RoleDocumentation {
        meta: gather_meta(role_path)?,
        defaults: gather_defaults(role_path)?,
        docs: gather_docs(role_path)?,
        extras: gather_extras(role_path),
    })
}

/// Documentation records for every gathered role, keyed by role name.
#[derive(Debug, Default)]
pub struct Gatherer {
    records: BTreeMap<String, RoleDocumentation>,
}

impl Gatherer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gathers every role, replacing any record already held under the same name.
    ///
    /// Roles sharing a base name overwrite each other; the last one wins.
    pub fn gather_all(&mut self, role_paths: &[PathBuf], reporter: &dyn Reporter) -> Result<()> {
        let mut seen = Vec::with_capacity(role_paths.len());

        for path in role_paths {
            let record = gather_role(path)?;
            let name = record.extras.role_name.clone();
            if seen.contains(&name) {
                tracing::warn!(role = %name, path = %path.display(), "role name collision, replacing earlier record");
            }
            seen.push(name.clone());

            reporter.report(Event::DocsGathered {
                role_name: name.clone(),
                record: Box::new(record.clone()),
            });
            self.records.insert(name, record);
        }
        Ok(())
    }

    pub fn records(&self) -> &BTreeMap<String, RoleDocumentation> {
        &self.records
    }

    pub fn get(&self, role_name: &str) -> Option<&RoleDocumentation> {
        self.records.get(role_name)
    }
}
