//! Triage decision engine
//!
//! Routing is a first-match cascade over a static table of rules. Each rule
//! pairs a predicate with the route it selects and a builder for the
//! reasoning text. All inputs the predicates need are computed once into an
//! [`Assessment`] before the cascade runs.
//!
//! # Cascade
//!
//! 1. Anchor guard: no policy number, incident date or damage estimate -> `Rejected`
//! 2. Fraud keywords -> `InvestigationFlag`
//! 3. Missing mandatory fields -> `ManualReview`
//! 4. Injury keywords -> `SpecialistQueue`
//! 5. Damage at or above threshold -> `StandardProcessing`
//! 6. Otherwise -> `FastTrack`

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use core_kernel::format_usd;

use crate::decision::{Route, RoutingDecision};
use crate::record::{ClaimField, ClaimRecord};
use crate::rules::TriageRules;

/// Fields that make a document recognisable as a claim at all
pub const ANCHOR_FIELDS: [ClaimField; 3] = [
    ClaimField::PolicyNumber,
    ClaimField::EstimatedDamage,
    ClaimField::IncidentDate,
];

/// Reasoning attached to documents failing the anchor guard
pub const REJECTED_REASONING: &str =
    "Rejected: document does not appear to be a valid insurance claim (no policy number, incident date, or estimated damage found).";

static DEFAULT_ENGINE: Lazy<TriageEngine> = Lazy::new(TriageEngine::default);

/// Evaluates a claim against the canonical rule table
pub fn evaluate(record: &ClaimRecord) -> RoutingDecision {
    DEFAULT_ENGINE.evaluate(record)
}

/// Facts about a claim that the cascade predicates consult
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment<'a> {
    /// Mandatory fields that are missing, in mandatory-list order
    pub missing_fields: Vec<ClaimField>,
    /// Fraud keywords found in the narrative, in table order
    pub fraud_terms: Vec<&'a str>,
    /// Injury keywords found in the narrative, in table order
    pub injury_terms: Vec<&'a str>,
    /// Damage estimate, zero when absent
    pub damage: Decimal,
    /// Fast-track threshold in force
    pub threshold: Decimal,
}

/// One entry of the decision cascade
pub struct TriageRule {
    /// Short identifier used in logs and tests
    pub name: &'static str,
    /// Route selected when the rule applies
    pub route: Route,
    /// Whether the rule applies to the assessed claim
    pub applies: fn(&Assessment<'_>) -> bool,
    /// Builds the justification text
    pub reasoning: fn(&Assessment<'_>) -> String,
}

impl std::fmt::Debug for TriageRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageRule")
            .field("name", &self.name)
            .field("route", &self.route)
            .finish()
    }
}

static CASCADE: [TriageRule; 4] = [
    TriageRule {
        name: "fraud_signal",
        route: Route::InvestigationFlag,
        applies: has_fraud_terms,
        reasoning: fraud_reasoning,
    },
    TriageRule {
        name: "mandatory_completeness",
        route: Route::ManualReview,
        applies: has_missing_fields,
        reasoning: missing_fields_reasoning,
    },
    TriageRule {
        name: "injury_signal",
        route: Route::SpecialistQueue,
        applies: has_injury_terms,
        reasoning: injury_reasoning,
    },
    TriageRule {
        name: "value_threshold",
        route: Route::StandardProcessing,
        applies: meets_threshold,
        reasoning: high_value_reasoning,
    },
];

// Always applies, so the cascade cannot fall through
static FALLBACK: TriageRule = TriageRule {
    name: "fast_track",
    route: Route::FastTrack,
    applies: always,
    reasoning: fast_track_reasoning,
};

/// Returns the cascade in evaluation order, fallback last
pub fn cascade() -> impl Iterator<Item = &'static TriageRule> {
    CASCADE.iter().chain(std::iter::once(&FALLBACK))
}

/// Stateless triage engine over an injectable rule table
///
/// The engine holds no mutable state; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct TriageEngine {
    rules: TriageRules,
}

impl TriageEngine {
    /// Creates an engine with the given rule table
    pub fn new(rules: TriageRules) -> Self {
        Self { rules }
    }

    /// Returns the rule table in force
    pub fn rules(&self) -> &TriageRules {
        &self.rules
    }

    /// Routes a claim
    ///
    /// Total over all records: the all-null record is rejected by the anchor
    /// guard, and the fallback rule catches everything else.
    pub fn evaluate(&self, record: &ClaimRecord) -> RoutingDecision {
        if lacks_anchors(record) {
            return RoutingDecision::new(Route::Rejected, REJECTED_REASONING, Vec::new());
        }

        let assessment = self.assess(record);
        let rule = CASCADE
            .iter()
            .find(|rule| (rule.applies)(&assessment))
            .unwrap_or(&FALLBACK);

        RoutingDecision::new(
            rule.route,
            (rule.reasoning)(&assessment),
            assessment.missing_fields,
        )
    }

    /// Computes the facts the cascade consults
    pub fn assess(&self, record: &ClaimRecord) -> Assessment<'_> {
        let missing_fields = self
            .rules
            .mandatory_fields()
            .iter()
            .copied()
            .filter(|field| record.is_missing(*field))
            .collect();

        let narrative = narrative_text(record);

        Assessment {
            missing_fields,
            fraud_terms: matching_terms(self.rules.fraud_keywords(), &narrative),
            injury_terms: matching_terms(self.rules.injury_keywords(), &narrative),
            damage: record.damage_or_zero(),
            threshold: self.rules.fast_track_threshold(),
        }
    }
}

fn lacks_anchors(record: &ClaimRecord) -> bool {
    ANCHOR_FIELDS.iter().all(|field| record.is_missing(*field))
}

// Description and claim type, lowercased, as one haystack
fn narrative_text(record: &ClaimRecord) -> String {
    let description = record.present_text(ClaimField::IncidentDescription).unwrap_or("");
    let claim_type = record.present_text(ClaimField::ClaimType).unwrap_or("");
    format!("{description} {claim_type}").to_lowercase()
}

fn matching_terms<'a>(keywords: &'a [String], narrative: &str) -> Vec<&'a str> {
    keywords
        .iter()
        .map(String::as_str)
        .filter(|keyword| narrative.contains(keyword))
        .collect()
}

fn has_fraud_terms(assessment: &Assessment<'_>) -> bool {
    !assessment.fraud_terms.is_empty()
}

fn has_missing_fields(assessment: &Assessment<'_>) -> bool {
    !assessment.missing_fields.is_empty()
}

fn has_injury_terms(assessment: &Assessment<'_>) -> bool {
    !assessment.injury_terms.is_empty()
}

fn meets_threshold(assessment: &Assessment<'_>) -> bool {
    assessment.damage >= assessment.threshold
}

fn always(_: &Assessment<'_>) -> bool {
    true
}

fn fraud_reasoning(assessment: &Assessment<'_>) -> String {
    format!(
        "Flagged for potential fraud indicators in claim narrative ({}).",
        assessment.fraud_terms.join(", ")
    )
}

fn missing_fields_reasoning(assessment: &Assessment<'_>) -> String {
    let names: Vec<&str> = assessment.missing_fields.iter().map(ClaimField::as_str).collect();
    format!("Mandatory fields are missing: {}", names.join(", "))
}

fn injury_reasoning(assessment: &Assessment<'_>) -> String {
    format!(
        "Claim involves bodily injury indicators ({}) requiring medical specialist assessment.",
        assessment.injury_terms.join(", ")
    )
}

fn high_value_reasoning(assessment: &Assessment<'_>) -> String {
    format!(
        "High-value claim ({}) meets or exceeds Fast-track threshold ({}).",
        format_usd(assessment.damage),
        format_usd(assessment.threshold)
    )
}

fn fast_track_reasoning(assessment: &Assessment<'_>) -> String {
    format!(
        "Clean claim under {} threshold with no flags.",
        format_usd(assessment.threshold)
    )
}
