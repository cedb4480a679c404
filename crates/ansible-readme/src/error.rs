//! Error types for role discovery, gathering and README generation.

use std::io;
use std::path::{Path, PathBuf};

use ansible_readme_render::RenderError;
use thiserror::Error;

/// Errors that can occur while documenting roles.
#[derive(Debug, Error)]
pub enum Error {
    /// The path is neither a role nor a directory of roles.
    #[error("{} does not contain any Ansible roles", .path.display())]
    PathNotARole { path: PathBuf },

    /// The roles path does not exist or is not a directory.
    #[error("{} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// A README is already present and overwriting was not requested.
    #[error(
        "Discovered {} which already exists, refusing to overwrite (pass --force to override this)",
        .path.display()
    )]
    ReadmeAlreadyExists { path: PathBuf },

    /// A role YAML file is malformed.
    #[error("failed to parse {}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A role YAML file uses an explicit tag, which safe loading refuses.
    #[error("{} uses the YAML tag `{tag}`, which is not allowed", .path.display())]
    UnsafeYamlTag { path: PathBuf, tag: String },

    /// A role YAML file holds something other than a mapping.
    #[error("{} must contain a YAML mapping", .path.display())]
    NotAMapping { path: PathBuf },

    /// Filesystem access failed.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The README template failed to compile or render.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl Error {
    /// Create an I/O error tied to the path being accessed.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for role documentation operations.
pub type Result<T> = std::result::Result<T, Error>;
