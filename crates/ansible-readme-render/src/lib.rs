//! # Ansible Readme Render - README Templates for Ansible Roles
//!
//! `ansible-readme-render` turns a gathered role documentation record into
//! README text. It wraps MiniJinja behind the [`TemplateEngine`] trait and
//! registers the two documentation filters templates rely on.
//!
//! ## Core Concepts
//!
//! - [`ReadmeTemplate`]: Where the template comes from (built in or a file on disk)
//! - [`ReadmeRenderer`]: A compiled template ready to render any number of roles
//! - [`TemplateEngine`]: The engine seam, implemented by [`MiniJinjaEngine`]
//! - [`filters`]: `listify` and `quicklistify`
//!
//! ## Quick Start
//!
//! ```rust
//! use ansible_readme_render::{ReadmeRenderer, ReadmeTemplate};
//! use serde::Serialize;
//! use std::collections::BTreeMap;
//!
//! #[derive(Serialize)]
//! struct Extras { role_name: String }
//!
//! #[derive(Serialize)]
//! struct Record {
//!     meta: BTreeMap<String, String>,
//!     defaults: BTreeMap<String, String>,
//!     docs: BTreeMap<String, String>,
//!     extras: Extras,
//! }
//!
//! let renderer = ReadmeRenderer::new(&ReadmeTemplate::Builtin).unwrap();
//! let record = Record {
//!     meta: BTreeMap::new(),
//!     defaults: BTreeMap::from([("nginx_port".into(), "80".into())]),
//!     docs: BTreeMap::new(),
//!     extras: Extras { role_name: "nginx".into() },
//! };
//!
//! let readme = renderer.render(&record).unwrap();
//! assert!(readme.starts_with("# nginx"));
//! assert!(readme.contains("[nginx_port](#nginx_port)"));
//! ```
//!
//! ## Custom Templates
//!
//! File templates are resolved relative to their own directory, so a custom
//! `readme.md.j2` can `{% include %}` or `{% extends %}` its siblings:
//!
//! ```rust,ignore
//! let template = ReadmeTemplate::File("docs/templates/readme.md.j2".into());
//! let renderer = ReadmeRenderer::new(&template)?;
//! ```

mod assets;
mod engine;
mod error;
pub mod filters;
mod renderer;

pub use assets::{BUILTIN_TEMPLATE, BUILTIN_TEMPLATE_NAME};
pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use error::RenderError;
pub use renderer::{ReadmeRenderer, ReadmeTemplate};

pub use minijinja::Value;
