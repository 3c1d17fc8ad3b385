//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `organization`: Organizations and their member policies
//! - `member`: Member accounts and balance history
//! - `record`: Raw input records as deserialized from JSON
//! - `error`: Error types for the report run

pub mod error;
pub mod member;
pub mod organization;
pub mod record;

pub use error::{RecordKind, ReportError};
pub use member::{Member, MemberId};
pub use organization::{Admission, Organization, OrganizationId};
pub use record::{MemberRecord, OrganizationRecord};
