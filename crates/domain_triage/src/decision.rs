//! Routing decisions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::ClaimField;

/// Processing lane a claim is routed to
///
/// Variants are listed in priority order: when several conditions hold, the
/// earlier route wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Document is not recognisable as a claim
    Rejected,
    /// Narrative carries fraud-indicative language
    InvestigationFlag,
    /// Mandatory information is missing
    ManualReview,
    /// Injury claim needing medical assessment
    SpecialistQueue,
    /// High-value claim at or above the fast-track threshold
    StandardProcessing,
    /// Clean, complete, low-value claim
    FastTrack,
}

impl Route {
    /// All routes in priority order
    pub const ALL: [Route; 6] = [
        Route::Rejected,
        Route::InvestigationFlag,
        Route::ManualReview,
        Route::SpecialistQueue,
        Route::StandardProcessing,
        Route::FastTrack,
    ];

    /// Returns the human-readable lane label
    pub fn label(&self) -> &'static str {
        match self {
            Route::Rejected => "Rejected",
            Route::InvestigationFlag => "Investigation Flag",
            Route::ManualReview => "Manual Review",
            Route::SpecialistQueue => "Specialist Queue",
            Route::StandardProcessing => "Standard Processing",
            Route::FastTrack => "Fast-track",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Verdict produced by the triage engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingDecision {
    /// Lane the claim should go to
    pub recommended_route: Route,
    /// Justification for the chosen route, never empty
    pub reasoning: String,
    /// Mandatory fields absent from the record, in mandatory-list order
    pub missing_fields: Vec<ClaimField>,
}

impl RoutingDecision {
    /// Creates a decision
    pub fn new(
        route: Route,
        reasoning: impl Into<String>,
        missing_fields: Vec<ClaimField>,
    ) -> Self {
        Self {
            recommended_route: route,
            reasoning: reasoning.into(),
            missing_fields,
        }
    }

    /// Returns the missing field names as strings
    pub fn missing_field_names(&self) -> Vec<&'static str> {
        self.missing_fields.iter().map(ClaimField::as_str).collect()
    }
}
