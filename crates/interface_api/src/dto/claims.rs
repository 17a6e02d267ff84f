//! Claims DTOs

use serde::Serialize;

use domain_intake::IntakeOutcome;
use domain_triage::{ClaimRecord, RoutingDecision};

/// Response for a triaged document upload
///
/// The decision fields are flattened next to the extracted record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimTriageResponse {
    pub intake_id: String,
    pub extracted_fields: ClaimRecord,
    #[serde(flatten)]
    pub decision: RoutingDecision,
}

impl From<IntakeOutcome> for ClaimTriageResponse {
    fn from(outcome: IntakeOutcome) -> Self {
        Self {
            intake_id: outcome.intake_id.to_string(),
            extracted_fields: outcome.extracted_fields,
            decision: outcome.decision,
        }
    }
}
