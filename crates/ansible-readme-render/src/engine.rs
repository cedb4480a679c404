//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait which keeps README
//! rendering independent of the template backend. The default implementation
//! is [`MiniJinjaEngine`].

use std::path::Path;

use minijinja::{Environment, Value};

use crate::error::RenderError;
use crate::filters::register_filters;

/// A template engine that can render named templates with a context.
///
/// Template engines handle:
/// - Template compilation and caching
/// - Variable substitution and control flow
/// - The documentation filters (`listify`, `quicklistify`)
pub trait TemplateEngine: Send + Sync {
    /// Adds a named template to the engine.
    ///
    /// The template is compiled and cached for later use via [`render_named`](Self::render_named).
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered (or loader-resolvable) template.
    fn render_named(&self, name: &str, context: &Value) -> Result<String, RenderError>;
}

/// MiniJinja-based template engine.
///
/// Blocks are trimmed the way documentation templates expect: the newline
/// after a block tag is removed and whitespace before a block tag on its own
/// line is stripped.
///
/// # Example
///
/// ```rust
/// use ansible_readme_render::{MiniJinjaEngine, TemplateEngine, Value};
///
/// let mut engine = MiniJinjaEngine::new();
/// engine.add_template("title", "# {{ role_name }}").unwrap();
/// let context = Value::from_serialize(std::collections::BTreeMap::from([("role_name", "nginx")]));
///
/// let output = engine.render_named("title", &context).unwrap();
/// assert_eq!(output, "# nginx");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new MiniJinja engine with the documentation filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env);
        Self { env }
    }

    /// Creates an engine that resolves template names from files under `dir`.
    pub fn with_template_dir(dir: impl AsRef<Path>) -> Self {
        let mut engine = Self::new();
        engine
            .env
            .set_loader(minijinja::path_loader(dir.as_ref().to_path_buf()));
        engine
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, context: &Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}
