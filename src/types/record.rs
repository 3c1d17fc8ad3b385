//! Raw input records as they appear in the JSON files
//!
//! These structs mirror the on-disk field names. They are only deserialized
//! after [`crate::core::validation`] has checked every field's exact JSON type,
//! so serde never sees a truthy stand-in for a boolean.

use super::{MemberId, OrganizationId};
use serde::Deserialize;

/// Organization record from the companies file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationRecord {
    pub id: OrganizationId,
    pub name: String,
    /// Amount credited to each active member per run
    pub top_up: i64,
    pub email_status: bool,
}

/// Member record from the users file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberRecord {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Owning organization id
    pub company_id: OrganizationId,
    pub email_status: bool,
    pub active_status: bool,
    /// Starting balance
    pub tokens: i64,
}
