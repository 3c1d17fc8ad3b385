//! Report rendering and output
//!
//! A [`Report`] walks the organizations of a finished registry in ascending id
//! order and renders each one. The renderer adds nothing between blocks.
//!
//! The destination is either standard output or a new file. A new file is
//! created exclusively (never overwritten), buffered, and closed when the
//! writer goes out of scope, whether rendering finished or failed.

use crate::core::registry::OrganizationRegistry;
use crate::core::traits::Render;
use crate::types::{Organization, ReportError};
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Where the report is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    /// The process's standard output
    Stdout,
    /// A file that must not exist yet
    File(PathBuf),
}

impl ReportDestination {
    /// Destination for a command-line path; `-` selects stdout
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            ReportDestination::Stdout
        } else {
            ReportDestination::File(path.to_path_buf())
        }
    }

    /// Fail if the destination is a file that already exists
    pub fn ensure_available(&self) -> Result<(), ReportError> {
        match self {
            ReportDestination::File(path) if path.exists() => {
                Err(ReportError::output_exists(path.display()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ReportDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportDestination::Stdout => write!(f, "stdout"),
            ReportDestination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The organizations of a run in report order
#[derive(Debug)]
pub struct Report<'a> {
    organizations: Vec<&'a Organization>,
}

impl<'a> Report<'a> {
    /// Order the registry's organizations by ascending id
    pub fn new(registry: &'a OrganizationRegistry) -> Self {
        Report {
            organizations: registry.get_all_organizations(),
        }
    }

    /// Render every organization block to `out`
    pub fn render(&self, out: &mut dyn Write) -> Result<(), ReportError> {
        for organization in &self.organizations {
            organization.render(out)?;
        }
        Ok(())
    }
}

/// Render the registry to `destination`
///
/// # Errors
///
/// * `OutputExists` if the destination file appeared before it could be created
/// * `IoError` if creating, writing or flushing fails
pub fn write_report(
    registry: &OrganizationRegistry,
    destination: &ReportDestination,
) -> Result<(), ReportError> {
    let report = Report::new(registry);

    match destination {
        ReportDestination::Stdout => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            report.render(&mut out)?;
            out.flush()?;
        }
        ReportDestination::File(path) => {
            let file = OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(path)
                .map_err(|e| match e.kind() {
                    ErrorKind::AlreadyExists => ReportError::output_exists(path.display()),
                    _ => ReportError::from(e),
                })?;

            let mut out = BufWriter::new(file);
            report.render(&mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
