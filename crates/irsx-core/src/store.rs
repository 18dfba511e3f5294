//! Persistence boundary for extracted records.
//!
//! Organizations are keyed on name, return periods on (organization, period
//! start, period end). Upserting the same record twice is a no-op apart from
//! refreshing its values.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::models::filing::{OrganizationFields, ReturnFields};

/// Identifier assigned to a stored organization.
pub type OrganizationId = u64;

/// Upsert-by-natural-key storage for extracted records.
pub trait ReturnStore {
    /// Insert or update an organization by name. Returns its id and whether it was created.
    fn upsert_organization(
        &mut self,
        organization: &OrganizationFields,
    ) -> Result<(OrganizationId, bool), StoreError>;

    /// Insert or update a return period. Returns whether it was created.
    fn upsert_return(
        &mut self,
        organization: OrganizationId,
        return_info: &ReturnFields,
    ) -> Result<bool, StoreError>;
}

/// A stored organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredOrganization {
    pub id: OrganizationId,
    pub fields: OrganizationFields,
}

type ReturnKey = (OrganizationId, NaiveDate, NaiveDate);

/// [`ReturnStore`] kept in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    organizations: BTreeMap<String, StoredOrganization>,
    returns: BTreeMap<ReturnKey, ReturnFields>,
    next_id: OrganizationId,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organization(&self, name: &str) -> Option<&StoredOrganization> {
        self.organizations.get(name)
    }

    /// Return periods of one organization, ordered by period start.
    pub fn returns_for(&self, organization: OrganizationId) -> Vec<&ReturnFields> {
        self.returns
            .range((organization, NaiveDate::MIN, NaiveDate::MIN)..=(organization, NaiveDate::MAX, NaiveDate::MAX))
            .map(|(_, fields)| fields)
            .collect()
    }

    pub fn organization_count(&self) -> usize {
        self.organizations.len()
    }

    pub fn return_count(&self) -> usize {
        self.returns.len()
    }
}

impl ReturnStore for InMemoryStore {
    fn upsert_organization(
        &mut self,
        organization: &OrganizationFields,
    ) -> Result<(OrganizationId, bool), StoreError> {
        let name = organization
            .name
            .as_deref()
            .ok_or(StoreError::MissingKey("name"))?;

        if let Some(existing) = self.organizations.get_mut(name) {
            existing.fields = organization.clone();
            return Ok((existing.id, false));
        }

        self.next_id += 1;
        let id = self.next_id;
        self.organizations.insert(
            name.to_string(),
            StoredOrganization {
                id,
                fields: organization.clone(),
            },
        );
        Ok((id, true))
    }

    fn upsert_return(
        &mut self,
        organization: OrganizationId,
        return_info: &ReturnFields,
    ) -> Result<bool, StoreError> {
        let (start, end) = match (return_info.tax_period_start, return_info.tax_period_end) {
            (Some(start), Some(end)) => (start, end),
            (None, _) => return Err(StoreError::MissingKey("tax_period_start")),
            (_, None) => return Err(StoreError::MissingKey("tax_period_end")),
        };

        if !self.organizations.values().any(|o| o.id == organization) {
            return Err(StoreError::UnknownOrganization(organization));
        }

        let previous = self
            .returns
            .insert((organization, start, end), return_info.clone());
        Ok(previous.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn organization(name: &str) -> OrganizationFields {
        OrganizationFields {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn period(start: (i32, u32, u32), end: (i32, u32, u32)) -> ReturnFields {
        ReturnFields {
            tax_period_start: NaiveDate::from_ymd_opt(start.0, start.1, start.2),
            tax_period_end: NaiveDate::from_ymd_opt(end.0, end.1, end.2),
            ..Default::default()
        }
    }

    #[test]
    fn test_organization_upsert_by_name() {
        let mut store = InMemoryStore::new();

        let (id, created) = store.upsert_organization(&organization("ACME")).unwrap();
        assert!(created);

        let mut updated = organization("ACME");
        updated.website_url = Some("https://acme.org".to_string());
        let (same_id, created) = store.upsert_organization(&updated).unwrap();
        assert!(!created);
        assert_eq!(same_id, id);
        assert_eq!(store.organization_count(), 1);
        assert_eq!(
            store.organization("ACME").unwrap().fields.website_url.as_deref(),
            Some("https://acme.org")
        );
    }

    #[test]
    fn test_organization_requires_name() {
        let mut store = InMemoryStore::new();
        assert_eq!(
            store.upsert_organization(&OrganizationFields::default()),
            Err(StoreError::MissingKey("name"))
        );
    }

    #[test]
    fn test_return_upsert_by_period() {
        let mut store = InMemoryStore::new();
        let (id, _) = store.upsert_organization(&organization("ACME")).unwrap();

        let mut fields = period((2022, 1, 1), (2022, 12, 31));
        assert!(store.upsert_return(id, &fields).unwrap());

        fields.total_revenue = Some(Decimal::from(10));
        assert!(!store.upsert_return(id, &fields).unwrap());
        assert!(store.upsert_return(id, &period((2021, 1, 1), (2021, 12, 31))).unwrap());

        let returns = store.returns_for(id);
        assert_eq!(returns.len(), 2);
        assert_eq!(returns[0].tax_period_start, NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(returns[1].total_revenue, Some(Decimal::from(10)));
    }

    #[test]
    fn test_return_requires_period_and_organization() {
        let mut store = InMemoryStore::new();
        assert_eq!(
            store.upsert_return(1, &period((2022, 1, 1), (2022, 12, 31))),
            Err(StoreError::UnknownOrganization(1))
        );

        let (id, _) = store.upsert_organization(&organization("ACME")).unwrap();
        assert_eq!(
            store.upsert_return(id, &ReturnFields::default()),
            Err(StoreError::MissingKey("tax_period_start"))
        );
    }
}
