//! `docs/main.yml` scaffolding.
//!
//! The stub lists every default variable with a placeholder description,
//! ready to be filled in by hand:
//!
//! ```yaml
//! ---
//! defaults:
//!   nginx_port:
//!     help: TODO.
//! ```
//!
//! An existing `docs/` directory is left alone unless overwriting is
//! requested, in which case the stub is regenerated and prior edits are lost.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::gather::gather_defaults;
use crate::locator::MAIN_FILE;
use crate::report::{Event, Reporter};

pub const DOCS_DIR: &str = "docs";

/// Placeholder description for every scaffolded variable.
pub const HELP_PLACEHOLDER: &str = "TODO.";

/// What happened to one role's `docs/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// `docs/` already existed; nothing was touched.
    Skipped(PathBuf),
    /// The stub was written to this `docs/main.yml`.
    Written(PathBuf),
}

/// Builds the stub YAML for a role's defaults, keeping their declaration order.
pub fn docs_stub(defaults: &Mapping) -> Result<String> {
    let mut variables = Mapping::new();
    for name in defaults.keys() {
        let mut doc = Mapping::new();
        doc.insert(Value::from("help"), Value::from(HELP_PLACEHOLDER));
        variables.insert(name.clone(), Value::Mapping(doc));
    }

    let mut stub = Mapping::new();
    stub.insert(Value::from("defaults"), Value::Mapping(variables));

    let yaml = serde_yaml::to_string(&stub).map_err(|source| Error::Yaml {
        path: PathBuf::from(DOCS_DIR).join(MAIN_FILE),
        source,
    })?;
    Ok(format!("---\n{}", yaml))
}

/// Ensures `role_path/docs/main.yml` exists.
///
/// Skips the role when `docs/` is already present and `overwrite_requested`
/// is false.
pub fn scaffold_docs(
    role_path: &Path,
    overwrite_requested: bool,
    reporter: &dyn Reporter,
) -> Result<ScaffoldOutcome> {
    let docs_path = role_path.join(DOCS_DIR);

    if docs_path.exists() && !overwrite_requested {
        reporter.report(Event::DocsSkipped {
            docs_path: docs_path.clone(),
        });
        return Ok(ScaffoldOutcome::Skipped(docs_path));
    }

    let stub = docs_stub(&gather_defaults(role_path)?)?;
    if !docs_path.exists() {
        fs::create_dir(&docs_path).map_err(|err| Error::io(&docs_path, err))?;
    }

    let main_path = docs_path.join(MAIN_FILE);
    fs::write(&main_path, stub).map_err(|err| Error::io(&main_path, err))?;

    tracing::debug!(path = %main_path.display(), "wrote docs stub");
    reporter.report(Event::DocsScaffolded {
        docs_path: docs_path.clone(),
    });
    Ok(ScaffoldOutcome::Written(main_path))
}

/// Scaffolds every role in order, stopping at the first error.
pub fn scaffold_all(
    role_paths: &[PathBuf],
    overwrite_requested: bool,
    reporter: &dyn Reporter,
) -> Result<Vec<ScaffoldOutcome>> {
    role_paths
        .iter()
        .map(|path| scaffold_docs(path, overwrite_requested, reporter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Level, MemoryReporter, NullReporter};
    use tempfile::TempDir;

    fn role_with_defaults(defaults: &str) -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("defaults")).unwrap();
        fs::write(tmp.path().join("defaults").join(MAIN_FILE), defaults).unwrap();
        tmp
    }

    #[test]
    fn test_docs_stub_shape() {
        let defaults: Mapping = serde_yaml::from_str("zeta: 1\nalpha: [a]\n").unwrap();
        let stub = docs_stub(&defaults).unwrap();

        assert!(stub.starts_with("---\ndefaults:\n"));
        assert!(!stub.contains('{'), "stub should be block style: {stub}");
        assert!(stub.find("zeta").unwrap() < stub.find("alpha").unwrap());

        let parsed: Value = serde_yaml::from_str(&stub).unwrap();
        let expected: Value =
            serde_yaml::from_str("defaults: {zeta: {help: TODO.}, alpha: {help: TODO.}}").unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_docs_stub_without_defaults() {
        let stub = docs_stub(&Mapping::new()).unwrap();
        let parsed: Value = serde_yaml::from_str(&stub).unwrap();
        assert_eq!(parsed, serde_yaml::from_str::<Value>("defaults: {}").unwrap());
    }

    #[test]
    fn test_scaffold_creates_docs() {
        let role = role_with_defaults("---\nfoobar: barfoo\n");
        let reporter = MemoryReporter::new();

        let outcome = scaffold_docs(role.path(), false, &reporter).unwrap();
        let main_path = role.path().join("docs").join(MAIN_FILE);
        assert_eq!(outcome, ScaffoldOutcome::Written(main_path.clone()));

        let written = fs::read_to_string(main_path).unwrap();
        assert!(written.contains("foobar:\n    help: TODO."));
        assert_eq!(reporter.at_least(Level::Info).len(), 1);
    }

    #[test]
    fn test_scaffold_documents_merged_defaults() {
        let role = role_with_defaults("---\nbase: &b\n  nginx_user: www\n<<: *b\nnginx_port: 80\n");

        scaffold_docs(role.path(), false, &NullReporter).unwrap();
        let written = fs::read_to_string(role.path().join("docs").join(MAIN_FILE)).unwrap();
        assert!(written.contains("nginx_user:\n    help: TODO."));
        assert!(!written.contains("<<"));
    }

    #[test]
    fn test_scaffold_skips_existing_docs() {
        let role = role_with_defaults("---\nfoobar: barfoo\n");
        let docs = role.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join(MAIN_FILE), "hand written").unwrap();

        let reporter = MemoryReporter::new();
        for _ in 0..2 {
            let outcome = scaffold_docs(role.path(), false, &reporter).unwrap();
            assert_eq!(outcome, ScaffoldOutcome::Skipped(docs.clone()));
        }

        assert_eq!(
            fs::read_to_string(docs.join(MAIN_FILE)).unwrap(),
            "hand written"
        );
        assert!(reporter
            .events()
            .iter()
            .all(|event| matches!(event, Event::DocsSkipped { .. })));
    }

    #[test]
    fn test_scaffold_overwrite_regenerates() {
        let role = role_with_defaults("---\nfoobar: barfoo\n");
        let docs = role.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(docs.join(MAIN_FILE), "hand written").unwrap();

        scaffold_docs(role.path(), true, &NullReporter).unwrap();
        let first = fs::read_to_string(docs.join(MAIN_FILE)).unwrap();
        assert!(first.contains("foobar"));

        scaffold_docs(role.path(), true, &NullReporter).unwrap();
        assert_eq!(fs::read_to_string(docs.join(MAIN_FILE)).unwrap(), first);
    }

    #[test]
    fn test_scaffold_all_stops_on_bad_defaults() {
        let good = role_with_defaults("---\na: 1\n");
        let bad = role_with_defaults("---\na: [\n");
        let result = scaffold_all(
            &[good.path().to_path_buf(), bad.path().to_path_buf()],
            false,
            &NullReporter,
        );
        assert!(matches!(result, Err(Error::Yaml { .. })));
        assert!(good.path().join("docs").join(MAIN_FILE).exists());
        assert!(!bad.path().join("docs").exists());
    }
}
