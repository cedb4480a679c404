//! Compiled README renderer.
//!
//! [`ReadmeRenderer`] compiles one [`ReadmeTemplate`] up front and renders any
//! number of role records with it. Compilation failures (missing file, syntax
//! errors) surface from [`ReadmeRenderer::new`], before any role is rendered.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::assets::{BUILTIN_TEMPLATE, BUILTIN_TEMPLATE_NAME};
use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::RenderError;
use minijinja::Value;

/// Where the README template comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReadmeTemplate {
    /// The template shipped with the crate.
    #[default]
    Builtin,
    /// A template file on disk. Sibling files are available to
    /// `{% include %}` and `{% extends %}`.
    File(PathBuf),
}

impl ReadmeTemplate {
    /// Builds a template source from an optional path, falling back to the built-in one.
    pub fn from_path(path: Option<impl Into<PathBuf>>) -> Self {
        match path {
            Some(path) => ReadmeTemplate::File(path.into()),
            None => ReadmeTemplate::Builtin,
        }
    }
}

/// A renderer with one compiled README template.
pub struct ReadmeRenderer {
    engine: Box<dyn TemplateEngine>,
    template_name: String,
}

impl ReadmeRenderer {
    /// Compiles the given template.
    ///
    /// # Errors
    ///
    /// - [`RenderError::TemplateNotFound`] if a template file does not exist
    /// - [`RenderError::TemplateError`] if the template does not compile
    pub fn new(template: &ReadmeTemplate) -> Result<Self, RenderError> {
        match template {
            ReadmeTemplate::Builtin => {
                let mut engine = MiniJinjaEngine::new();
                engine.add_template(BUILTIN_TEMPLATE_NAME, BUILTIN_TEMPLATE)?;
                Ok(Self::with_engine(engine, BUILTIN_TEMPLATE_NAME))
            }
            ReadmeTemplate::File(path) => Self::from_file(path),
        }
    }

    /// Wraps an engine that already knows `template_name`.
    pub fn with_engine(engine: impl TemplateEngine + 'static, template_name: &str) -> Self {
        Self {
            engine: Box::new(engine),
            template_name: template_name.to_string(),
        }
    }

    fn from_file(path: &Path) -> Result<Self, RenderError> {
        if !path.is_file() {
            return Err(RenderError::TemplateNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| RenderError::TemplateNotFound(path.display().to_string()))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let engine = MiniJinjaEngine::with_template_dir(dir);
        // Compile now so syntax errors are reported before any role is processed.
        engine.environment().get_template(&name)?;
        Ok(Self::with_engine(engine, &name))
    }

    /// Name the template is registered under.
    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// Renders the template with `data` as the top-level context.
    pub fn render<S: Serialize + ?Sized>(&self, data: &S) -> Result<String, RenderError> {
        let context = Value::from_serialize(data);
        self.engine.render_named(&self.template_name, &context)
    }
}
