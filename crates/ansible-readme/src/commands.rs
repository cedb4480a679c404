//! The `init` and `generate` workflows.
//!
//! Both start from a [`RoleLocator`], so an invalid roles path fails before
//! anything is read or written.

use std::path::PathBuf;

use ansible_readme_render::{ReadmeRenderer, ReadmeTemplate};

use crate::error::Result;
use crate::gather::Gatherer;
use crate::locator::RoleLocator;
use crate::readme::{render_readmes, write_readmes, DEFAULT_README_NAME};
use crate::report::{Event, Reporter};
use crate::scaffold::{scaffold_all, ScaffoldOutcome};

/// Settings for `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    readme_name: String,
    template: ReadmeTemplate,
    force: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            readme_name: DEFAULT_README_NAME.to_string(),
            template: ReadmeTemplate::Builtin,
            force: false,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// File name of the generated README inside each role.
    pub fn readme_name(mut self, name: impl Into<String>) -> Self {
        self.readme_name = name.into();
        self
    }

    pub fn template(mut self, template: ReadmeTemplate) -> Self {
        self.template = template;
        self
    }

    /// Overwrite READMEs that already exist.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn get_readme_name(&self) -> &str {
        &self.readme_name
    }

    pub fn get_template(&self) -> &ReadmeTemplate {
        &self.template
    }

    pub fn is_forced(&self) -> bool {
        self.force
    }
}

fn report_roles(locator: &RoleLocator, reporter: &dyn Reporter) {
    reporter.report(Event::RolesLocated {
        root: locator.root().to_path_buf(),
        layout: locator.layout(),
        paths: locator.role_paths().to_vec(),
    });
}

/// Scaffolds `docs/main.yml` for every role. `force` regenerates existing stubs.
pub fn init(locator: &RoleLocator, force: bool, reporter: &dyn Reporter) -> Result<Vec<ScaffoldOutcome>> {
    report_roles(locator, reporter);
    scaffold_all(locator.role_paths(), force, reporter)
}

/// Scaffolds missing docs, gathers every role, renders and writes the READMEs.
///
/// The template is compiled first so a broken template fails before any file
/// is touched. Existing `docs/` directories are never overwritten here.
pub fn generate(
    locator: &RoleLocator,
    options: &GenerateOptions,
    reporter: &dyn Reporter,
) -> Result<Vec<PathBuf>> {
    report_roles(locator, reporter);
    let renderer = ReadmeRenderer::new(&options.template)?;

    scaffold_all(locator.role_paths(), false, reporter)?;

    let mut gatherer = Gatherer::new();
    gatherer.gather_all(locator.role_paths(), reporter)?;

    let readmes = render_readmes(&renderer, gatherer.records())?;
    write_readmes(
        locator.role_paths(),
        &readmes,
        &options.readme_name,
        options.force,
        reporter,
    )
}
