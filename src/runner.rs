//! Report job
//!
//! A [`ReportJob`] is one complete run: pre-flight checks, reading both input
//! files, the ingestion pipeline, and writing the report. Every fatal error is
//! returned as-is; the caller decides how to exit.
//!
//! Pre-flight happens before any input is read:
//! 1. Both input files must exist
//! 2. The output file must not exist
//!
//! No report is written unless every stage before rendering succeeded.

use crate::core::pipeline::ReportPipeline;
use crate::io::json_reader::read_json;
use crate::io::report_writer::{write_report, ReportDestination};
use crate::types::ReportError;
use std::path::PathBuf;
use tracing::info;

/// Inputs and destination of one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportJob {
    /// Organizations (companies) JSON file
    pub organizations_path: PathBuf,
    /// Members (users) JSON file
    pub members_path: PathBuf,
    pub destination: ReportDestination,
}

impl ReportJob {
    /// Check inputs exist and the output does not, without reading anything
    pub fn preflight(&self) -> Result<(), ReportError> {
        for path in [&self.organizations_path, &self.members_path] {
            if !path.exists() {
                return Err(ReportError::file_not_found(path.display()));
            }
        }
        self.destination.ensure_available()
    }

    /// Run the whole job
    ///
    /// # Errors
    ///
    /// Any pre-flight, parse, validation, referential, overflow or I/O error.
    /// Nothing is written to the destination when an error occurs before
    /// rendering starts.
    pub fn execute(&self) -> Result<(), ReportError> {
        self.preflight()?;

        let mut pipeline = ReportPipeline::from_organizations(read_json(&self.organizations_path)?)?;
        let members = pipeline.associate_members(read_json(&self.members_path)?)?;
        let registry = pipeline.aggregate()?;

        write_report(&registry, &self.destination)?;

        info!(
            organizations = registry.len(),
            members,
            destination = %self.destination,
            "report written"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::{tempdir, TempDir};

    const COMPANIES: &str = r#"[{"id": 1, "name": "Acme", "top_up": 10, "email_status": true}]"#;
    const USERS: &str = r#"[{"id": 1, "first_name": "Ada", "last_name": "Lovelace",
        "email": "ada@acme.com", "company_id": 1, "email_status": true,
        "active_status": true, "tokens": 100}]"#;

    fn job_in(dir: &TempDir, companies: &str, users: &str) -> ReportJob {
        let organizations_path = dir.path().join("companies.json");
        let members_path = dir.path().join("users.json");
        fs::write(&organizations_path, companies).unwrap();
        fs::write(&members_path, users).unwrap();

        ReportJob {
            organizations_path,
            members_path,
            destination: ReportDestination::File(dir.path().join("output.txt")),
        }
    }

    fn output_path(job: &ReportJob) -> &Path {
        match &job.destination {
            ReportDestination::File(path) => path,
            ReportDestination::Stdout => panic!("expected file destination"),
        }
    }

    #[test]
    fn test_execute_writes_report() {
        let dir = tempdir().unwrap();
        let job = job_in(&dir, COMPANIES, USERS);

        job.execute().unwrap();

        let report = fs::read_to_string(output_path(&job)).unwrap();
        assert!(report.contains("\t\tLovelace, Ada, ada@acme.com\n"));
        assert!(report.contains("\t\t  New Token Balance 110\n"));
        assert!(report.ends_with("\t\tTotal amount of top ups for Acme: 10\n"));
    }

    #[test]
    fn test_missing_input_fails_preflight() {
        let dir = tempdir().unwrap();
        let mut job = job_in(&dir, COMPANIES, USERS);
        job.members_path = dir.path().join("missing.json");

        assert_eq!(
            job.execute(),
            Err(ReportError::file_not_found(job.members_path.display()))
        );
        assert!(!output_path(&job).exists());
    }

    #[test]
    fn test_existing_output_is_left_untouched() {
        let dir = tempdir().unwrap();
        // Malformed inputs prove pre-flight fails before anything is parsed
        let job = job_in(&dir, "not json", "not json");
        fs::write(output_path(&job), "previous report").unwrap();

        assert_eq!(
            job.execute(),
            Err(ReportError::output_exists(output_path(&job).display()))
        );
        assert_eq!(
            fs::read_to_string(output_path(&job)).unwrap(),
            "previous report"
        );
    }

    #[test]
    fn test_fatal_error_writes_no_report() {
        let dir = tempdir().unwrap();
        let orphan = USERS.replace(r#""company_id": 1"#, r#""company_id": 2"#);
        let job = job_in(&dir, COMPANIES, &orphan);

        assert_eq!(job.execute(), Err(ReportError::orphaned_member(1, 2)));
        assert!(!output_path(&job).exists());
    }
}
