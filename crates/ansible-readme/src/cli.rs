//! Command-line interface.
//!
//! ```text
//! ansible-readme [--debug] init [ROLES_PATH] [--force]
//! ansible-readme [--debug] generate [ROLES_PATH] [--force] [-t TEMPLATE] [-n NAME]
//! ```

use std::path::PathBuf;

use ansible_readme_render::ReadmeTemplate;
use clap::{Args, Parser, Subcommand};

use crate::commands::{self, GenerateOptions};
use crate::error::Result;
use crate::locator::RoleLocator;
use crate::readme::DEFAULT_README_NAME;
use crate::report::Reporter;

const BANNER: &str = r"
        ___    _   _______ ________  __    ______
       /   |  / | / / ___//  _/ __ )/ /   / ____/
      / /| | /  |/ /\__ \ / // __  / /   / __/
     / ___ |/ /|  /___/ _/ // /_/ / /___/ /___
    /_/ _____/_________/______________________
       / __ \/ ____/   |  / __ \/  |/  / ____/
      / /_/ / __/ / /| | / / / / /|_/ / __/
     / _, _/ /___/ ___ |/ /_/ / /  / / /___
    /_/ |_/_____/_/  |_/_____/_/  /_/_____/

Generate documenting README files for Ansible roles";

#[derive(Debug, Parser)]
#[command(
    name = "ansible-readme",
    version,
    about = "Generate documenting README files for Ansible roles",
    long_about = BANNER
)]
pub struct Cli {
    /// Show debug logging
    #[arg(long, global = true, overrides_with = "no_debug")]
    debug: bool,

    #[arg(long = "no-debug", global = true, hide = true)]
    no_debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialise new docs/ paths.
    Init(InitArgs),
    /// Generate new README files.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Role, or directory of roles, to document
    #[arg(default_value = ".")]
    pub roles_path: PathBuf,

    /// Overwrite existing docs/ paths
    #[arg(long, overrides_with = "no_force")]
    force: bool,

    #[arg(long = "no-force", hide = true)]
    no_force: bool,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Role, or directory of roles, to document
    #[arg(default_value = ".")]
    pub roles_path: PathBuf,

    /// Overwrite existing README files
    #[arg(long, overrides_with = "no_force")]
    force: bool,

    #[arg(long = "no-force", hide = true)]
    no_force: bool,

    /// Jinja2 template for the README file [default: built-in template]
    #[arg(short, long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Generated README file name
    #[arg(short, long, value_name = "FILENAME", default_value = DEFAULT_README_NAME)]
    pub name: String,
}

impl InitArgs {
    pub fn force(&self) -> bool {
        self.force && !self.no_force
    }
}

impl GenerateArgs {
    pub fn force(&self) -> bool {
        self.force && !self.no_force
    }

    pub fn options(&self) -> GenerateOptions {
        GenerateOptions::new()
            .readme_name(self.name.clone())
            .template(ReadmeTemplate::from_path(self.template.clone()))
            .force(self.force())
    }
}

impl Cli {
    /// Whether `--debug` is in effect.
    pub fn debug(&self) -> bool {
        self.debug && !self.no_debug
    }

    /// Runs the selected command.
    pub fn run(&self, reporter: &dyn Reporter) -> Result<()> {
        match &self.command {
            Command::Init(args) => {
                let locator = RoleLocator::locate(&args.roles_path)?;
                commands::init(&locator, args.force(), reporter)?;
            }
            Command::Generate(args) => {
                let locator = RoleLocator::locate(&args.roles_path)?;
                commands::generate(&locator, &args.options(), reporter)?;
            }
        }
        Ok(())
    }
}
