//! Triage policy tables
//!
//! The keyword sets, mandatory-field list and fast-track threshold that drive
//! the decision cascade. The canonical tables live in a process-wide static;
//! alternative tables can be built in code or loaded from JSON so that tests
//! and deployments can substitute their own.
//!
//! # JSON Format
//!
//! Every key is optional and falls back to the canonical value:
//!
//! ```json
//! {
//!   "fraudKeywords": ["fraud", "staged"],
//!   "injuryKeywords": ["injury", "whiplash"],
//!   "mandatoryFields": ["policyNumber", "claimType"],
//!   "fastTrackThreshold": 25000
//! }
//! ```

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::error::RulesError;
use crate::record::ClaimField;

/// Terms whose presence in the narrative or claim type flags possible fraud
pub const DEFAULT_FRAUD_KEYWORDS: &[&str] = &[
    "fraud",
    "staged",
    "inconsistent",
    "suspicious",
    "flagged",
    "conflicting",
    "fled",
    "pattern",
    "investigation",
];

/// Terms indicating bodily injury
pub const DEFAULT_INJURY_KEYWORDS: &[&str] = &[
    "bodily",
    "injury",
    "medical",
    "hospital",
    "doctor",
    "pain",
    "whiplash",
    "ambulance",
    "paramedic",
    "treatment",
    "sore",
    "stiffness",
];

/// Fields a claim must carry to avoid manual review, in reporting order
pub const DEFAULT_MANDATORY_FIELDS: &[ClaimField] = &[
    ClaimField::PolicyNumber,
    ClaimField::PolicyHolderName,
    ClaimField::IncidentDate,
    ClaimField::IncidentDescription,
    ClaimField::ClaimType,
    ClaimField::EstimatedDamage,
];

/// Damage at or above this amount leaves the fast-track lane
pub const DEFAULT_FAST_TRACK_THRESHOLD: Decimal = dec!(25000);

static CANONICAL_RULES: Lazy<TriageRules> = Lazy::new(|| TriageRules {
    fraud_keywords: DEFAULT_FRAUD_KEYWORDS.iter().map(|k| k.to_string()).collect(),
    injury_keywords: DEFAULT_INJURY_KEYWORDS.iter().map(|k| k.to_string()).collect(),
    mandatory_fields: DEFAULT_MANDATORY_FIELDS.to_vec(),
    fast_track_threshold: DEFAULT_FAST_TRACK_THRESHOLD,
});

/// Policy table consulted by the triage engine
///
/// Keywords are stored lowercased and trimmed; matching against them is
/// case-insensitive substring containment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriageRules {
    fraud_keywords: Vec<String>,
    injury_keywords: Vec<String>,
    mandatory_fields: Vec<ClaimField>,
    fast_track_threshold: Decimal,
}

impl Default for TriageRules {
    fn default() -> Self {
        CANONICAL_RULES.clone()
    }
}

impl TriageRules {
    /// Builds a rule table from explicit parts
    ///
    /// # Errors
    ///
    /// Returns `RulesError` if a keyword is blank, a mandatory field is
    /// repeated, or the threshold is negative.
    pub fn new<F, I>(
        fraud_keywords: F,
        injury_keywords: I,
        mandatory_fields: Vec<ClaimField>,
        fast_track_threshold: Decimal,
    ) -> Result<Self, RulesError>
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            fraud_keywords: fraud_keywords.into_iter().map(|k| k.as_ref().to_string()).collect(),
            injury_keywords: injury_keywords.into_iter().map(|k| k.as_ref().to_string()).collect(),
            mandatory_fields,
            fast_track_threshold,
        }
        .validated()
    }

    /// Returns the canonical rule table shared by the whole process
    pub fn canonical() -> &'static TriageRules {
        &CANONICAL_RULES
    }

    /// Loads a rule table from a JSON string
    ///
    /// Keys absent from the JSON keep their canonical values.
    pub fn from_json_str(json_str: &str) -> Result<Self, RulesError> {
        let rules: TriageRules = serde_json::from_str(json_str)
            .map_err(|e| RulesError::ParseError(e.to_string()))?;

        rules.validated()
    }

    /// Loads a rule table from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, RulesError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| RulesError::FileNotFound(path.display().to_string()))?;

        Self::from_json_str(&content)
    }

    /// Replaces the fast-track threshold
    pub fn with_fast_track_threshold(mut self, threshold: Decimal) -> Result<Self, RulesError> {
        self.fast_track_threshold = threshold;
        self.validated()
    }

    /// Fraud keywords, lowercased
    pub fn fraud_keywords(&self) -> &[String] {
        &self.fraud_keywords
    }

    /// Injury keywords, lowercased
    pub fn injury_keywords(&self) -> &[String] {
        &self.injury_keywords
    }

    /// Mandatory fields in reporting order
    pub fn mandatory_fields(&self) -> &[ClaimField] {
        &self.mandatory_fields
    }

    /// Fast-track threshold
    pub fn fast_track_threshold(&self) -> Decimal {
        self.fast_track_threshold
    }

    fn validated(mut self) -> Result<Self, RulesError> {
        self.fraud_keywords = normalise_keywords(self.fraud_keywords, "fraud")?;
        self.injury_keywords = normalise_keywords(self.injury_keywords, "injury")?;

        let mut seen = HashSet::new();
        for field in &self.mandatory_fields {
            if !seen.insert(*field) {
                return Err(RulesError::DuplicateMandatoryField(field.to_string()));
            }
        }

        if self.fast_track_threshold.is_sign_negative() && !self.fast_track_threshold.is_zero() {
            return Err(RulesError::InvalidThreshold(self.fast_track_threshold.to_string()));
        }

        Ok(self)
    }
}

fn normalise_keywords(
    keywords: Vec<String>,
    list: &'static str,
) -> Result<Vec<String>, RulesError> {
    keywords
        .into_iter()
        .map(|keyword| {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                Err(RulesError::EmptyKeyword(list))
            } else {
                Ok(keyword)
            }
        })
        .collect()
}
