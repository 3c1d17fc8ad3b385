//! Organization registry
//!
//! This module provides the `OrganizationRegistry`, the run-scoped map from
//! organization id to the organization that owns its members. Members only
//! hold their organization's id; the registry is how they are routed to it.
//!
//! The registry is responsible for:
//! - Rejecting duplicate organization ids
//! - Rejecting members whose organization does not exist
//! - Running the top-up aggregation over every organization
//! - Providing organizations sorted by id for the report

use crate::types::{Admission, Member, Organization, OrganizationId, ReportError};
use std::collections::HashMap;

/// All organizations of one run, keyed by id
#[derive(Debug, Default)]
pub struct OrganizationRegistry {
    organizations: HashMap<OrganizationId, Organization>,
}

impl OrganizationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        OrganizationRegistry {
            organizations: HashMap::new(),
        }
    }

    /// Register an organization
    ///
    /// # Errors
    ///
    /// Returns `DuplicateOrganization` if an organization with the same id is
    /// already registered. The registered organization is left untouched.
    pub fn register(&mut self, organization: Organization) -> Result<(), ReportError> {
        if self.organizations.contains_key(&organization.id) {
            return Err(ReportError::duplicate_organization(organization.id));
        }
        self.organizations.insert(organization.id, organization);
        Ok(())
    }

    /// Whether an organization with this id is registered
    pub fn contains(&self, id: OrganizationId) -> bool {
        self.organizations.contains_key(&id)
    }

    /// Look up an organization by id
    pub fn get(&self, id: OrganizationId) -> Option<&Organization> {
        self.organizations.get(&id)
    }

    /// Hand a member to the organization it references
    ///
    /// # Errors
    ///
    /// Returns `OrphanedMember` if the referenced organization does not exist.
    pub fn admit(&mut self, member: Member) -> Result<Admission, ReportError> {
        let organization = self
            .organizations
            .get_mut(&member.organization_id)
            .ok_or_else(|| ReportError::orphaned_member(member.id, member.organization_id))?;

        Ok(organization.add_member(member))
    }

    /// Top up the active members of every organization
    ///
    /// Organizations are processed in ascending id order, so the first
    /// `BalanceOverflow` reported is the same on every run.
    pub fn top_up_all(&mut self) -> Result<(), ReportError> {
        let mut organizations: Vec<&mut Organization> = self.organizations.values_mut().collect();
        organizations.sort_by_key(|organization| organization.id);

        for organization in organizations {
            organization.top_up_members()?;
        }
        Ok(())
    }

    /// All organizations sorted by ascending id
    ///
    /// Independent of the order organizations were registered in.
    pub fn get_all_organizations(&self) -> Vec<&Organization> {
        let mut organizations: Vec<&Organization> = self.organizations.values().collect();
        organizations.sort_by_key(|organization| organization.id);
        organizations
    }

    /// Number of registered organizations
    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    /// Whether no organization is registered
    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::member::tests::member;
    use crate::types::organization::tests::organization;

    #[test]
    fn test_new_creates_empty_registry() {
        let registry = OrganizationRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.get_all_organizations().len(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = OrganizationRegistry::new();
        registry.register(organization(5, 10, true)).unwrap();

        assert!(registry.contains(5));
        assert!(!registry.contains(6));
        assert_eq!(registry.get(5).map(|o| o.top_up_amount), Some(10));
    }

    #[test]
    fn test_register_duplicate_id_fails_and_keeps_first() {
        let mut registry = OrganizationRegistry::new();
        registry.register(organization(5, 10, true)).unwrap();

        let result = registry.register(organization(5, 99, false));

        assert_eq!(result, Err(ReportError::DuplicateOrganization { id: 5 }));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(5).map(|o| o.top_up_amount), Some(10));
    }

    #[test]
    fn test_admit_routes_member_to_its_organization() {
        let mut registry = OrganizationRegistry::new();
        registry.register(organization(1, 10, true)).unwrap();
        registry.register(organization(2, 10, true)).unwrap();

        let mut m = member(7, "Ada", "Lovelace", 0, true, true);
        m.organization_id = 2;

        assert_eq!(registry.admit(m), Ok(Admission::Unique));
        assert!(registry.get(1).unwrap().members().is_empty());
        assert_eq!(registry.get(2).unwrap().members()[0].id, 7);
    }

    #[test]
    fn test_admit_orphan_fails() {
        let mut registry = OrganizationRegistry::new();
        registry.register(organization(1, 10, true)).unwrap();

        let mut m = member(7, "Ada", "Lovelace", 0, true, true);
        m.organization_id = 42;

        assert_eq!(
            registry.admit(m),
            Err(ReportError::OrphanedMember {
                member: 7,
                organization: 42
            })
        );
    }

    #[test]
    fn test_top_up_all_tops_up_every_organization() {
        let mut registry = OrganizationRegistry::new();
        registry.register(organization(1, 10, true)).unwrap();
        registry.register(organization(2, 5, false)).unwrap();

        registry.admit(member(1, "A", "One", 0, true, true)).unwrap();
        let mut m = member(2, "B", "Two", 0, true, true);
        m.organization_id = 2;
        registry.admit(m).unwrap();

        assert_eq!(registry.top_up_all(), Ok(()));
        assert_eq!(registry.get(1).unwrap().total_previous_top_up(), 10);
        assert_eq!(registry.get(2).unwrap().total_previous_top_up(), 5);
    }

    #[test]
    fn test_get_all_organizations_sorted_by_id() {
        let mut registry = OrganizationRegistry::new();
        registry.register(organization(3, 0, true)).unwrap();
        registry.register(organization(1, 0, true)).unwrap();
        registry.register(organization(2, 0, true)).unwrap();

        let ids: Vec<_> = registry
            .get_all_organizations()
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_top_up_all_reports_lowest_overflowing_organization() {
        let mut registry = OrganizationRegistry::new();
        for id in (1..=8).rev() {
            registry.register(organization(id, 1, true)).unwrap();
            let mut m = member(100 + id, "Rich", "Member", i64::MAX, true, true);
            m.organization_id = id;
            registry.admit(m).unwrap();
        }

        assert_eq!(
            registry.top_up_all(),
            Err(ReportError::BalanceOverflow {
                member: 101,
                organization: 1
            })
        );
    }
}
