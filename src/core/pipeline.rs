//! Ingestion pipeline
//!
//! Turns the two parsed input files into a fully aggregated
//! [`OrganizationRegistry`]. The stages run strictly in order and the first
//! fatal error halts the run:
//!
//! 1. Check the organizations value is an array of objects
//! 2. Validate every organization record
//! 3. Register organizations (a repeated id is fatal)
//! 4. Check, validate and resolve every member record (an orphan is fatal)
//! 5. Associate members with their organizations (duplicates only warn)
//! 6. Top up every organization
//!
//! Rendering the registry is left to [`crate::io::report_writer`].

use crate::core::registry::OrganizationRegistry;
use crate::core::validation::{expect_records, parse_member, parse_organization};
use crate::types::{Admission, Member, Organization, RecordKind, ReportError};
use serde_json::Value;
use tracing::debug;

/// Pipeline state between registering organizations and aggregation
#[derive(Debug)]
pub struct ReportPipeline {
    registry: OrganizationRegistry,
}

impl ReportPipeline {
    /// Build the registry from the parsed organizations file
    ///
    /// Every record is validated before any is registered.
    ///
    /// # Errors
    ///
    /// - `UnexpectedFormat` if the value is not an array of objects
    /// - `InvalidOrganization` for the first record failing validation
    /// - `DuplicateOrganization` for the first repeated id
    pub fn from_organizations(raw: Value) -> Result<Self, ReportError> {
        let records = expect_records(raw, RecordKind::Organization)?;

        let organizations = records
            .into_iter()
            .map(|record| parse_organization(record).map(Organization::from))
            .collect::<Result<Vec<_>, _>>()?;

        let mut registry = OrganizationRegistry::new();
        for organization in organizations {
            registry.register(organization)?;
        }

        debug!(organizations = registry.len(), "registered organizations");
        Ok(ReportPipeline { registry })
    }

    /// Validate the parsed members file and associate each member
    ///
    /// Every record is validated, and its organization resolved, before any
    /// member is associated. Returns the number of members associated.
    ///
    /// # Errors
    ///
    /// - `UnexpectedFormat` if the value is not an array of objects
    /// - `InvalidMember` for the first record failing validation
    /// - `OrphanedMember` for the first member referencing an unknown organization
    pub fn associate_members(&mut self, raw: Value) -> Result<usize, ReportError> {
        let records = expect_records(raw, RecordKind::Member)?;

        let members = records
            .into_iter()
            .map(|record| {
                let member = Member::from(parse_member(record)?);
                if !self.registry.contains(member.organization_id) {
                    return Err(ReportError::orphaned_member(
                        member.id,
                        member.organization_id,
                    ));
                }
                Ok(member)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = members.len();
        let mut duplicates = 0;
        for member in members {
            if self.registry.admit(member)? == Admission::Duplicate {
                duplicates += 1;
            }
        }

        debug!(members = count, duplicates, "associated members");
        Ok(count)
    }

    /// Apply the top-ups and hand back the finished registry
    pub fn aggregate(mut self) -> Result<OrganizationRegistry, ReportError> {
        self.registry.top_up_all()?;
        debug!(organizations = self.registry.len(), "applied top-ups");
        Ok(self.registry)
    }
}

/// Run every ingestion stage over both parsed inputs
pub fn run_pipeline(organizations: Value, members: Value) -> Result<OrganizationRegistry, ReportError> {
    let mut pipeline = ReportPipeline::from_organizations(organizations)?;
    pipeline.associate_members(members)?;
    pipeline.aggregate()
}
