//! Member types for the token top-up report
//!
//! A member is an individual account belonging to exactly one organization.
//! It owns its balance and the history of every balance it has held during
//! the run.

use super::organization::OrganizationId;
use super::record::MemberRecord;
use super::ReportError;
use crate::core::traits::Render;
use std::io::{self, Write};

/// Member identifier
///
/// Only unique within the owning organization.
pub type MemberId = i64;

/// A member account
///
/// The balance fields are private so that `balance_history` always ends with
/// the current `balance`. The member refers to its organization by id only;
/// the organization owns the member.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    /// Id of the owning organization
    pub organization_id: OrganizationId,

    /// Whether the member opted in to email notification
    pub sends_email: bool,

    /// Only active members are topped up and reported
    pub is_active: bool,

    balance: i64,

    /// Every balance held during the run, seeded with the starting balance
    balance_history: Vec<i64>,
}

impl Member {
    /// Current balance
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Balances in the order they were held; the last entry is [`Self::balance`]
    pub fn balance_history(&self) -> &[i64] {
        &self.balance_history
    }

    /// Balance held immediately before the most recent top-up
    ///
    /// `None` when the member has never been topped up.
    pub fn previous_balance(&self) -> Option<i64> {
        self.balance_history.iter().rev().nth(1).copied()
    }

    /// Credit `amount` to the balance and record the new balance
    ///
    /// # Returns
    ///
    /// * `Ok(amount)` - the contribution, summed by the owning organization
    /// * `Err(ReportError::BalanceOverflow)` - if the balance would overflow;
    ///   the member is left unchanged
    pub fn top_up(&mut self, amount: i64) -> Result<i64, ReportError> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| ReportError::balance_overflow(self.id, self.organization_id))?;

        self.balance = new_balance;
        self.balance_history.push(new_balance);

        Ok(amount)
    }

    /// Report ordering key: last name, then first name
    pub fn sort_key(&self) -> (&str, &str) {
        (self.last_name.as_str(), self.first_name.as_str())
    }
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        Member {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            organization_id: record.company_id,
            sends_email: record.email_status,
            is_active: record.active_status,
            balance: record.tokens,
            balance_history: vec![record.tokens],
        }
    }
}

impl Render for Member {
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "\t\t{}, {}, {}",
            self.last_name, self.first_name, self.email
        )?;
        // A member that was never topped up has no previous balance; the line stays empty
        let previous = self
            .previous_balance()
            .map(|balance| balance.to_string())
            .unwrap_or_default();
        writeln!(out, "\t\t  Previous Token Balance, {}", previous)?;
        writeln!(out, "\t\t  New Token Balance {}", self.balance)
    }
}
