//! Token Top-Up Report Library
//! # Overview
//!
//! This library reads a list of organizations (companies) and their members
//! (users) from JSON, credits each organization's top-up amount to its active
//! members, and renders a deterministic text report of who is and is not
//! notified by email.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Organization, Member, input records, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::validation`] - Exact-type validation of parsed JSON records
//!   - [`core::registry`] - Run-scoped organizations keyed by id
//!   - [`core::pipeline`] - Ordered ingestion, association and aggregation
//! - [`io`] - JSON input and report output
//! - [`runner`] - One complete run from file paths to written report
//!
//! # Failure Policy
//!
//! Every structural, validation or referential problem halts the run before
//! any report is written. The one exception is a duplicate member inside an
//! organization (same id, or same email ignoring ASCII case): it is logged as
//! a warning and the member is still kept.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use crate::core::{run_pipeline, OrganizationRegistry, Render, ReportPipeline};
pub use io::{write_report, Report, ReportDestination};
pub use runner::ReportJob;
pub use types::{
    Admission, Member, MemberId, MemberRecord, Organization, OrganizationId, OrganizationRecord,
    RecordKind, ReportError,
};
