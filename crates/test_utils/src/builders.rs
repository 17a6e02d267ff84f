//! Test Data Builders
//!
//! Builder for claim records. The default record is complete, clean and
//! under the fast-track threshold, so tests only spell out the fields that
//! matter to them.

use domain_triage::ClaimRecord;
use rust_decimal::Decimal;

use crate::fixtures::ClaimFixtures;

/// Builder for constructing test claim records
#[derive(Debug, Clone)]
pub struct ClaimRecordBuilder {
    record: ClaimRecord,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    /// Creates a builder seeded with a clean fast-track claim
    pub fn new() -> Self {
        Self {
            record: ClaimFixtures::clean_collision(),
        }
    }

    /// Creates a builder seeded with the all-null record
    pub fn empty() -> Self {
        Self {
            record: ClaimRecord::empty(),
        }
    }

    /// Sets the policy number
    pub fn policy_number(mut self, value: impl Into<String>) -> Self {
        self.record.policy_number = Some(value.into());
        self
    }

    /// Sets the policyholder name
    pub fn policy_holder_name(mut self, value: impl Into<String>) -> Self {
        self.record.policy_holder_name = Some(value.into());
        self
    }

    /// Sets the incident date
    pub fn incident_date(mut self, value: impl Into<String>) -> Self {
        self.record.incident_date = Some(value.into());
        self
    }

    /// Sets the incident description
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.record.incident_description = Some(value.into());
        self
    }

    /// Sets the claim type
    pub fn claim_type(mut self, value: impl Into<String>) -> Self {
        self.record.claim_type = Some(value.into());
        self
    }

    /// Sets the damage estimate
    pub fn damage(mut self, value: Decimal) -> Self {
        self.record.estimated_damage = Some(value);
        self
    }

    /// Sets the incident location
    pub fn location(mut self, value: impl Into<String>) -> Self {
        self.record.incident_location = Some(value.into());
        self
    }

    /// Sets the claimant name
    pub fn claimant_name(mut self, value: impl Into<String>) -> Self {
        self.record.claimant_name = Some(value.into());
        self
    }

    /// Sets the asset identifier
    pub fn asset_id(mut self, value: impl Into<String>) -> Self {
        self.record.asset_id = Some(value.into());
        self
    }

    /// Clears the policy number
    pub fn without_policy_number(mut self) -> Self {
        self.record.policy_number = None;
        self
    }

    /// Clears the policyholder name
    pub fn without_policy_holder_name(mut self) -> Self {
        self.record.policy_holder_name = None;
        self
    }

    /// Clears the incident date
    pub fn without_incident_date(mut self) -> Self {
        self.record.incident_date = None;
        self
    }

    /// Clears the incident description
    pub fn without_description(mut self) -> Self {
        self.record.incident_description = None;
        self
    }

    /// Clears the claim type
    pub fn without_claim_type(mut self) -> Self {
        self.record.claim_type = None;
        self
    }

    /// Clears the damage estimate
    pub fn without_damage(mut self) -> Self {
        self.record.estimated_damage = None;
        self
    }

    /// Builds the record
    pub fn build(self) -> ClaimRecord {
        self.record
    }
}
