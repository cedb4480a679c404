//! Progress reporting.
//!
//! Every phase reports what it did through a [`Reporter`] passed in by the
//! caller. Events are plain data; only [`ConsoleReporter`] knows about colors.
//!
//! ```text
//! --> /srv/roles contains multiple roles: /srv/roles/db, /srv/roles/web
//! --> /srv/roles/db/docs already exists, skipping (use init command with --force to override)
//! ```

use std::cell::RefCell;
use std::fmt;
use std::path::PathBuf;

use console::style;

use crate::gather::RoleDocumentation;
use crate::locator::RoleLayout;

/// How prominent an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Only shown with `--debug`.
    Debug,
    Info,
    Success,
}

/// Something worth telling the user about.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The roles path was classified.
    RolesLocated {
        root: PathBuf,
        layout: RoleLayout,
        paths: Vec<PathBuf>,
    },
    /// A role already has `docs/` and overwriting was not requested.
    DocsSkipped { docs_path: PathBuf },
    /// A `docs/main.yml` stub was written.
    DocsScaffolded { docs_path: PathBuf },
    /// A role's documentation record was assembled.
    DocsGathered {
        role_name: String,
        record: Box<RoleDocumentation>,
    },
    /// A README was rendered (not yet written).
    ReadmeRendered { role_name: String, content: String },
    /// A README was written to disk.
    ReadmeWritten { path: PathBuf },
}

impl Event {
    pub fn level(&self) -> Level {
        match self {
            Event::RolesLocated { .. }
            | Event::DocsGathered { .. }
            | Event::ReadmeRendered { .. } => Level::Debug,
            Event::DocsSkipped { .. } | Event::DocsScaffolded { .. } => Level::Info,
            Event::ReadmeWritten { .. } => Level::Success,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::RolesLocated {
                root,
                layout,
                paths,
            } => {
                let holds = match layout {
                    RoleLayout::Single => "a single role",
                    RoleLayout::Multiple => "multiple roles",
                    RoleLayout::Invalid => "no roles",
                };
                let paths: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                write!(
                    f,
                    "{} contains {}: {}",
                    root.display(),
                    holds,
                    paths.join(", ")
                )
            }
            Event::DocsSkipped { docs_path } => write!(
                f,
                "{} already exists, skipping (use init command with --force to override)",
                docs_path.display()
            ),
            Event::DocsScaffolded { docs_path } => {
                write!(f, "Initialised {}", docs_path.display())
            }
            Event::DocsGathered { role_name, record } => match serde_yaml::to_string(record) {
                Ok(yaml) => write!(f, "Gathered role documentation for {}:\n{}", role_name, yaml),
                Err(_) => write!(f, "Gathered role documentation for {}: {:?}", role_name, record),
            },
            Event::ReadmeRendered { role_name, content } => {
                write!(f, "README for {} will look like:\n\n{}", role_name, content)
            }
            Event::ReadmeWritten { path } => write!(f, "Wrote {}", path.display()),
        }
    }
}

/// Receives events from the locator, scaffolder, gatherer and writer.
pub trait Reporter {
    fn report(&self, event: Event);
}

/// Prints events to stdout, colored when the terminal supports it.
///
/// Debug events are dropped unless `debug` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    debug: bool,
}

impl ConsoleReporter {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, event: Event) {
        match event.level() {
            Level::Debug if !self.debug => {}
            Level::Debug | Level::Info => println!("--> {}", style(event).cyan()),
            Level::Success => println!("{}", style(event).green()),
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: Event) {}
}

/// Keeps events in memory for inspection.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: RefCell<Vec<Event>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Events at or above `level`.
    pub fn at_least(&self, level: Level) -> Vec<Event> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.level() >= level)
            .cloned()
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_located_message() {
        let event = Event::RolesLocated {
            root: PathBuf::from("/srv/roles"),
            layout: RoleLayout::Multiple,
            paths: vec![PathBuf::from("/srv/roles/db"), PathBuf::from("/srv/roles/web")],
        };
        assert_eq!(
            event.to_string(),
            "/srv/roles contains multiple roles: /srv/roles/db, /srv/roles/web"
        );
        assert_eq!(event.level(), Level::Debug);
    }

    #[test]
    fn test_docs_skipped_mentions_force() {
        let event = Event::DocsSkipped {
            docs_path: PathBuf::from("/srv/roles/db/docs"),
        };
        assert!(event.to_string().contains("--force"));
        assert_eq!(event.level(), Level::Info);
    }

    #[test]
    fn test_memory_reporter_filters_by_level() {
        let reporter = MemoryReporter::new();
        reporter.report(Event::ReadmeRendered {
            role_name: "db".into(),
            content: "# db".into(),
        });
        reporter.report(Event::ReadmeWritten {
            path: PathBuf::from("/srv/roles/db/README.md"),
        });

        assert_eq!(reporter.events().len(), 2);
        assert_eq!(
            reporter.at_least(Level::Info),
            vec![Event::ReadmeWritten {
                path: PathBuf::from("/srv/roles/db/README.md"),
            }]
        );
    }
}
