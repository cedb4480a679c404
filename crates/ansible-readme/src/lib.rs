//! # Ansible Readme - Documenting README Files for Ansible Roles
//!
//! `ansible-readme` finds Ansible roles under a path, gathers what each role
//! declares about itself, and renders a README per role.
//!
//! ## Workflow
//!
//! ```text
//! RoleLocator::locate ──► scaffold_all ──► Gatherer::gather_all ──► render_readmes ──► write_readmes
//!   (classify path)       (docs/main.yml)   (meta, defaults, docs)   (template)         (README.md)
//! ```
//!
//! - [`locator`]: single role, directory of roles, or an error
//! - [`scaffold`]: `docs/main.yml` stubs with a placeholder per default variable
//! - [`gather`]: the four-key record (`meta`, `defaults`, `docs`, `extras`)
//! - [`readme`]: rendering with `ansible-readme-render` and safe writing
//! - [`report`]: the [`Reporter`] every phase talks to
//!
//! ## Example
//!
//! ```rust,no_run
//! use ansible_readme::{commands, GenerateOptions, NullReporter, RoleLocator};
//!
//! let locator = RoleLocator::locate("roles/")?;
//! let written = commands::generate(&locator, &GenerateOptions::default(), &NullReporter)?;
//! for path in written {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), ansible_readme::Error>(())
//! ```

pub mod cli;
pub mod commands;
mod error;
pub mod gather;
pub mod locator;
pub mod logging;
pub mod readme;
pub mod report;
pub mod scaffold;
mod yaml;

pub use commands::GenerateOptions;
pub use error::{Error, Result};
pub use gather::{Extras, Gatherer, RoleDocumentation};
pub use locator::{classify, RoleLayout, RoleLocator};
pub use report::{ConsoleReporter, Event, MemoryReporter, NullReporter, Reporter};
pub use scaffold::ScaffoldOutcome;

pub use ansible_readme_render::{ReadmeRenderer, ReadmeTemplate};
