//! Role discovery.
//!
//! A path is classified by directory conventions only:
//!
//! ```text
//! roles/              <- RoleLayout::Multiple
//! ├── nginx/          <- RoleLayout::Single
//! │   ├── defaults/main.yml
//! │   └── tasks/main.yml
//! └── postgres/
//!     └── meta/main.yml
//! ```
//!
//! [`classify`] is a pure check; [`RoleLocator::locate`] turns a successful
//! classification into the list of role roots to document.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Conventional role subdirectories used to recognise a role.
pub const STANDARD_ROLE_DIRS: &[&str] = &[
    "defaults",
    "files",
    "meta",
    "molecule",
    "tasks",
    "templates",
    "vars",
];

/// File every conventional role subdirectory is expected to carry.
pub const MAIN_FILE: &str = "main.yml";

/// What a roles path holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleLayout {
    /// The path is itself a role.
    Single,
    /// At least one immediate subdirectory is a role.
    Multiple,
    /// Neither.
    Invalid,
}

/// Immediate subdirectories of `path`, sorted by name. Symlinks are followed.
fn subdirectories(path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(path).map_err(|err| Error::io(path, err))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| Error::io(path, err))?;
        let entry_path = entry.path();
        if entry_path.is_dir() {
            dirs.push(entry_path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Does `path` look like the root of a role?
///
/// True when at least one immediate subdirectory has a conventional role
/// name and at least one conventional subdirectory holds a `main.yml`.
pub fn has_standard_role_layout(path: &Path) -> Result<bool> {
    let has_standard_dir = subdirectories(path)?.iter().any(|dir| {
        dir.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| STANDARD_ROLE_DIRS.contains(&name))
    });
    if !has_standard_dir {
        return Ok(false);
    }

    Ok(STANDARD_ROLE_DIRS
        .iter()
        .any(|dir| path.join(dir).join(MAIN_FILE).exists()))
}

/// Classifies `path` as a single role, a directory of roles, or neither.
///
/// A single role wins: its subdirectories are never inspected as roles.
pub fn classify(path: &Path) -> Result<RoleLayout> {
    if has_standard_role_layout(path)? {
        return Ok(RoleLayout::Single);
    }

    for dir in subdirectories(path)? {
        if has_standard_role_layout(&dir)? {
            return Ok(RoleLayout::Multiple);
        }
    }
    Ok(RoleLayout::Invalid)
}

/// Role name for a role root: the directory's base name.
pub fn role_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// A classified roles path and the role roots found under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLocator {
    root: PathBuf,
    layout: RoleLayout,
    role_paths: Vec<PathBuf>,
}

impl RoleLocator {
    /// Classifies `path` and collects its role roots.
    ///
    /// # Errors
    ///
    /// - [`Error::NotADirectory`] if `path` is missing or not a directory
    /// - [`Error::PathNotARole`] if `path` holds no role at all
    pub fn locate(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let root = std::path::absolute(path).map_err(|err| Error::io(path, err))?;
        if !root.is_dir() {
            return Err(Error::NotADirectory { path: root });
        }

        let layout = classify(&root)?;
        let role_paths = match layout {
            RoleLayout::Single => vec![root.clone()],
            // Every subdirectory is documented, not only those that pass the layout check.
            RoleLayout::Multiple => subdirectories(&root)?,
            RoleLayout::Invalid => return Err(Error::PathNotARole { path: root }),
        };

        tracing::debug!(
            root = %root.display(),
            ?layout,
            roles = role_paths.len(),
            "located roles"
        );

        Ok(Self {
            root,
            layout,
            role_paths,
        })
    }

    /// The absolute roles path that was classified.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> RoleLayout {
        self.layout
    }

    pub fn is_single_role(&self) -> bool {
        self.layout == RoleLayout::Single
    }

    pub fn is_multiple_role(&self) -> bool {
        self.layout == RoleLayout::Multiple
    }

    /// Role roots to document, in a stable order.
    pub fn role_paths(&self) -> &[PathBuf] {
        &self.role_paths
    }
}
