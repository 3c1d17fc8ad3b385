//! Organization types for the token top-up report
//!
//! An organization owns its members, a top-up amount and an email policy.
//! It decides which members are topped up, which are emailed, and renders its
//! own block of the report.

use super::member::Member;
use super::record::OrganizationRecord;
use super::ReportError;
use crate::core::traits::Render;
use std::io::{self, Write};
use tracing::warn;

/// Organization identifier
///
/// Unique across all organizations in a run.
pub type OrganizationId = i64;

/// Outcome of adding a member to an organization
///
/// Either way the member is appended; `Duplicate` only records that the
/// id or email clashed with an existing member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Unique,
    Duplicate,
}

/// An organization and the members it owns
#[derive(Debug, Clone, PartialEq)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,

    /// Amount credited to every active member by [`Organization::top_up_members`]
    pub top_up_amount: i64,

    /// When false, no member of this organization is emailed
    pub sends_email: bool,

    /// Members in arrival order
    members: Vec<Member>,

    /// Sum of the top-ups applied by the last aggregation
    total_previous_top_up: i64,
}

impl Organization {
    /// Members in arrival order, duplicates included
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Total applied by the last [`Organization::top_up_members`] call
    pub fn total_previous_top_up(&self) -> i64 {
        self.total_previous_top_up
    }

    /// Append a member to this organization
    ///
    /// A member sharing an id, or a case-insensitive email, with an existing
    /// member is logged as a warning and still appended. Duplicates are kept
    /// so that the report shows exactly what the input contained.
    pub fn add_member(&mut self, member: Member) -> Admission {
        let admission = if self.duplicate(&member) {
            warn!(
                organization = self.id,
                member = member.id,
                email = %member.email,
                "Duplicated user: {} {} <{}>",
                member.first_name,
                member.last_name,
                member.email
            );
            Admission::Duplicate
        } else {
            Admission::Unique
        };

        self.members.push(member);
        admission
    }

    /// Whether `member` clashes with a member already in this organization
    ///
    /// Clashes are a shared id or an email equal under ASCII case folding.
    pub fn duplicate(&self, member: &Member) -> bool {
        self.members
            .iter()
            .any(|m| m.id == member.id || m.email.eq_ignore_ascii_case(&member.email))
    }

    /// Members with `is_active` set, in arrival order
    pub fn active_members(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.is_active)
    }

    /// Credit `top_up_amount` to every active member
    ///
    /// Stores and returns the sum of the amounts applied. Inactive members are
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns `BalanceOverflow` if a member balance or the organization total
    /// would overflow.
    pub fn top_up_members(&mut self) -> Result<i64, ReportError> {
        let amount = self.top_up_amount;
        let mut total: i64 = 0;

        for member in self.members.iter_mut().filter(|m| m.is_active) {
            let applied = member.top_up(amount)?;
            total = total
                .checked_add(applied)
                .ok_or_else(|| ReportError::balance_overflow(member.id, member.organization_id))?;
        }

        self.total_previous_top_up = total;
        Ok(total)
    }

    /// Active members to notify by email, sorted by last then first name
    ///
    /// Always empty when the organization itself does not send email,
    /// whatever the members' own preference.
    pub fn email_members(&self) -> Vec<&Member> {
        if !self.sends_email {
            return Vec::new();
        }

        let mut members: Vec<&Member> = self.active_members().filter(|m| m.sends_email).collect();
        members.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        members
    }

    /// Active members not notified by email, sorted by last then first name
    ///
    /// When the organization does not send email this is every active member.
    pub fn no_email_members(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self
            .active_members()
            .filter(|m| !self.sends_email || !m.sends_email)
            .collect();
        members.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        members
    }
}

impl From<OrganizationRecord> for Organization {
    fn from(record: OrganizationRecord) -> Self {
        Organization {
            id: record.id,
            name: record.name,
            top_up_amount: record.top_up,
            sends_email: record.email_status,
            members: Vec::new(),
            total_previous_top_up: 0,
        }
    }
}

impl Render for Organization {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "\tCompany Id: {}", self.id)?;
        writeln!(out, "\tCompany Name: {}", self.name)?;

        writeln!(out, "\tUsers Emailed:")?;
        for member in self.email_members() {
            member.render(out)?;
        }

        writeln!(out, "\tUsers Not Emailed:")?;
        for member in self.no_email_members() {
            member.render(out)?;
        }

        writeln!(
            out,
            "\t\tTotal amount of top ups for {}: {}",
            self.name, self.total_previous_top_up
        )
    }
}
