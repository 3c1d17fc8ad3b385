//! Error types for the token top-up report
//!
//! This module defines every fatal condition a run can hit. All of them halt
//! the run: nothing here is recovered from or downgraded to a warning. The only
//! non-fatal condition (a duplicate member inside one organization) is logged
//! by [`crate::types::Organization::add_member`] and never becomes an error.
//!
//! # Error Categories
//!
//! - **Structural Errors**: missing input file, pre-existing output, malformed JSON,
//!   wrong top-level shape
//! - **Validation Errors**: a record with a missing or mistyped field
//! - **Referential Errors**: duplicate organization id, member of an unknown organization
//! - **Arithmetic Errors**: balance overflow during top-up

use super::{MemberId, OrganizationId};
use std::fmt;
use thiserror::Error;

/// Which of the two input sets a record or file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Organization,
    Member,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Organization => write!(f, "Companies"),
            RecordKind::Member => write!(f, "Users"),
        }
    }
}

/// Main error type for the report run
///
/// Each variant carries enough context for an operator to find and fix the
/// offending input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// An input file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// The output path already exists and will not be overwritten
    #[error("Output file {path} already exists")]
    OutputExists {
        /// The pre-existing output path
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Input file is not valid JSON
    #[error("JSON parse error in {path}: {message}")]
    ParseError {
        /// File being parsed
        path: String,
        /// Description of the parse error
        message: String,
    },

    /// Parsed input is not an array of objects
    #[error("{kind} file is not in the expected json format")]
    UnexpectedFormat {
        /// Which input set had the wrong shape
        kind: RecordKind,
    },

    /// Organization record failed field validation
    #[error("Invalid company (field '{field}'): {record}")]
    InvalidOrganization {
        /// First field that failed validation
        field: String,
        /// The offending record as compact JSON
        record: String,
    },

    /// Member record failed field validation
    #[error("Invalid user (field '{field}'): {record}")]
    InvalidMember {
        /// First field that failed validation
        field: String,
        /// The offending record as compact JSON
        record: String,
    },

    /// Two organization records share an id
    #[error("Duplicate company entry: {id}")]
    DuplicateOrganization {
        /// The repeated organization id
        id: OrganizationId,
    },

    /// Member references an organization that was never registered
    #[error("Orphaned user {member}: company {organization} does not exist")]
    OrphanedMember {
        /// Member id
        member: MemberId,
        /// The unknown organization id
        organization: OrganizationId,
    },

    /// Applying a top-up would overflow the member balance
    #[error("Balance overflow topping up user {member} in company {organization}")]
    BalanceOverflow {
        /// Member id
        member: MemberId,
        /// Owning organization id
        organization: OrganizationId,
    },
}

// Conversion from io::Error to ReportError
impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReportError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: impl fmt::Display) -> Self {
        ReportError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an OutputExists error
    pub fn output_exists(path: impl fmt::Display) -> Self {
        ReportError::OutputExists {
            path: path.to_string(),
        }
    }

    /// Create a ParseError from a serde_json error
    pub fn parse_error(path: impl fmt::Display, error: &serde_json::Error) -> Self {
        ReportError::ParseError {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an UnexpectedFormat error
    pub fn unexpected_format(kind: RecordKind) -> Self {
        ReportError::UnexpectedFormat { kind }
    }

    /// Create an InvalidOrganization or InvalidMember error, depending on `kind`
    pub fn invalid_record(kind: RecordKind, field: &str, record: impl fmt::Display) -> Self {
        let field = field.to_string();
        let record = record.to_string();
        match kind {
            RecordKind::Organization => ReportError::InvalidOrganization { field, record },
            RecordKind::Member => ReportError::InvalidMember { field, record },
        }
    }

    /// Create a DuplicateOrganization error
    pub fn duplicate_organization(id: OrganizationId) -> Self {
        ReportError::DuplicateOrganization { id }
    }

    /// Create an OrphanedMember error
    pub fn orphaned_member(member: MemberId, organization: OrganizationId) -> Self {
        ReportError::OrphanedMember {
            member,
            organization,
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(member: MemberId, organization: OrganizationId) -> Self {
        ReportError::BalanceOverflow {
            member,
            organization,
        }
    }
}
