//! Claim record - the normalized input to triage

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of a claim record
///
/// Serializes as the camelCase field name, which is also the name reported
/// in a decision's missing-field list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClaimField {
    PolicyNumber,
    PolicyHolderName,
    IncidentDate,
    IncidentDescription,
    ClaimType,
    EstimatedDamage,
    IncidentLocation,
    ClaimantName,
    AssetId,
}

impl ClaimField {
    /// All fields in record declaration order
    pub const ALL: [ClaimField; 9] = [
        ClaimField::PolicyNumber,
        ClaimField::PolicyHolderName,
        ClaimField::IncidentDate,
        ClaimField::IncidentDescription,
        ClaimField::ClaimType,
        ClaimField::EstimatedDamage,
        ClaimField::IncidentLocation,
        ClaimField::ClaimantName,
        ClaimField::AssetId,
    ];

    /// Returns the camelCase field name
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimField::PolicyNumber => "policyNumber",
            ClaimField::PolicyHolderName => "policyHolderName",
            ClaimField::IncidentDate => "incidentDate",
            ClaimField::IncidentDescription => "incidentDescription",
            ClaimField::ClaimType => "claimType",
            ClaimField::EstimatedDamage => "estimatedDamage",
            ClaimField::IncidentLocation => "incidentLocation",
            ClaimField::ClaimantName => "claimantName",
            ClaimField::AssetId => "assetId",
        }
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured view of one claim document
///
/// Every field is optional: `None` means "not found in the source document",
/// never an error. Extractors that fail outright produce [`ClaimRecord::empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClaimRecord {
    /// Insurer-assigned policy identifier
    pub policy_number: Option<String>,
    /// Name on the policy
    pub policy_holder_name: Option<String>,
    /// Date of loss, free-form
    pub incident_date: Option<String>,
    /// Free-text narrative of the loss
    pub incident_description: Option<String>,
    /// Category label such as "Collision" or "Bodily Injury"
    pub claim_type: Option<String>,
    /// Monetary estimate with currency symbols and separators already stripped
    ///
    /// Written as an exact JSON number; read from a JSON number or a numeric
    /// string within `Decimal` range.
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub estimated_damage: Option<Decimal>,
    /// Free-text location
    pub incident_location: Option<String>,
    /// Name of the claim filer
    pub claimant_name: Option<String>,
    /// Identifier of the insured asset (VIN, serial, etc.)
    pub asset_id: Option<String>,
}

impl ClaimRecord {
    /// The all-null record
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the raw text value of a string field
    ///
    /// `EstimatedDamage` is numeric and always yields `None` here.
    pub fn text(&self, field: ClaimField) -> Option<&str> {
        let value = match field {
            ClaimField::PolicyNumber => &self.policy_number,
            ClaimField::PolicyHolderName => &self.policy_holder_name,
            ClaimField::IncidentDate => &self.incident_date,
            ClaimField::IncidentDescription => &self.incident_description,
            ClaimField::ClaimType => &self.claim_type,
            ClaimField::IncidentLocation => &self.incident_location,
            ClaimField::ClaimantName => &self.claimant_name,
            ClaimField::AssetId => &self.asset_id,
            ClaimField::EstimatedDamage => return None,
        };
        value.as_deref()
    }

    /// Returns the text of a string field unless it counts as missing
    pub fn present_text(&self, field: ClaimField) -> Option<&str> {
        self.text(field).filter(|value| !is_placeholder(value))
    }

    /// Checks whether a field counts as missing
    ///
    /// Strings are missing when absent, blank, or the literal `"null"`.
    /// The damage estimate is missing when absent or zero.
    pub fn is_missing(&self, field: ClaimField) -> bool {
        match field {
            ClaimField::EstimatedDamage => self.estimated_damage.map_or(true, |d| d.is_zero()),
            _ => self.present_text(field).is_none(),
        }
    }

    /// Damage estimate for threshold comparisons; absent counts as zero
    pub fn damage_or_zero(&self) -> Decimal {
        self.estimated_damage.unwrap_or(Decimal::ZERO)
    }

    /// Checks whether every field is missing
    pub fn is_empty(&self) -> bool {
        ClaimField::ALL.iter().all(|field| self.is_missing(*field))
    }
}

fn is_placeholder(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null")
}
