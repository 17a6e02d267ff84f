//! Field extraction
//!
//! Extractors turn raw document text into a [`ClaimRecord`]. They never
//! fail: anything they cannot find stays `None`, and text they cannot make
//! sense of yields the all-null record, which the triage engine rejects.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

use domain_triage::{ClaimField, ClaimRecord};

/// Turns raw claim text into a structured record
#[async_trait]
pub trait FieldExtractor: Send + Sync {
    /// Extracts claim fields from raw text
    ///
    /// `filename` is a hint only. Implementations must degrade to
    /// [`ClaimRecord::empty`] rather than fail.
    async fn extract(&self, raw_text: &str, filename: &str) -> ClaimRecord;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// Label aliases per field, as they appear on FNOL forms
const FIELD_LABELS: &[(ClaimField, &[&str])] = &[
    (
        ClaimField::PolicyNumber,
        &["policy number", "policy no", "policy #", "policy id"],
    ),
    (
        ClaimField::PolicyHolderName,
        &[
            "policyholder name",
            "policy holder name",
            "policyholder",
            "policy holder",
            "insured name",
            "name of insured",
        ],
    ),
    (
        ClaimField::IncidentDate,
        &["date of loss", "incident date", "loss date", "date of incident"],
    ),
    (
        ClaimField::IncidentDescription,
        &[
            "description of loss",
            "incident description",
            "loss description",
            "description",
        ],
    ),
    (
        ClaimField::ClaimType,
        &["claim type", "type of claim", "loss type", "type of loss"],
    ),
    (
        ClaimField::EstimatedDamage,
        &[
            "estimated damage",
            "damage estimate",
            "estimate amount",
            "estimated amount",
            "estimated loss",
            "estimated cost",
        ],
    ),
    (
        ClaimField::IncidentLocation,
        &["location of loss", "incident location", "loss location", "location"],
    ),
    (ClaimField::ClaimantName, &["claimant name", "claimant"]),
    (
        ClaimField::AssetId,
        &[
            "asset id",
            "vehicle identification number",
            "vin",
            "serial number",
        ],
    ),
];

/// Values forms use to say "nothing here"
const PLACEHOLDERS: &[&str] = &["n/a", "na", "none", "null", "unknown", "-", "--", "tbd"];

static LABEL_TO_FIELD: Lazy<HashMap<String, ClaimField>> = Lazy::new(|| {
    FIELD_LABELS
        .iter()
        .flat_map(|(field, labels)| labels.iter().map(move |label| (label.to_string(), *field)))
        .collect()
});

static LABEL_LINE: Lazy<Regex> = Lazy::new(|| {
    let mut labels: Vec<&str> = FIELD_LABELS
        .iter()
        .flat_map(|(_, labels)| labels.iter().copied())
        .collect();
    // Alternation is leftmost-first, so longer aliases must come first
    labels.sort_by_key(|label| std::cmp::Reverse(label.len()));

    let alternation = labels
        .iter()
        .map(|label| regex::escape(label).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(
        r"(?i)^\s*(?P<label>{alternation})\s*(?::|-|–)\s*(?P<value>.*?)\s*$"
    ))
    .expect("label pattern is valid")
});

static AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("amount pattern is valid"));

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Rule-based extractor for `Label: value` claim forms
///
/// The first occurrence of each label with a usable value wins. A
/// description may continue on the following lines until a blank line or
/// the next label.
#[derive(Debug, Clone, Default)]
pub struct LabelFieldExtractor;

impl LabelFieldExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts a record synchronously
    pub fn extract_record(&self, raw_text: &str) -> ClaimRecord {
        let mut values: HashMap<ClaimField, String> = HashMap::new();
        let mut continuing: Option<ClaimField> = None;

        for line in raw_text.lines() {
            if let Some(captures) = LABEL_LINE.captures(line) {
                continuing = None;
                let label = normalise_label(&captures["label"]);
                let Some(field) = LABEL_TO_FIELD.get(&label).copied() else {
                    continue;
                };
                if values.contains_key(&field) {
                    continue;
                }

                let value = captures["value"].trim();
                if is_placeholder(value) {
                    if field == ClaimField::IncidentDescription && value.is_empty() {
                        // "Description:" with the narrative on the next lines.
                        // The field stays open until a continuation line fills it.
                        continuing = Some(field);
                    }
                    continue;
                }

                values.insert(field, value.to_string());
                if field == ClaimField::IncidentDescription {
                    continuing = Some(field);
                }
            } else if line.trim().is_empty() {
                continuing = None;
            } else if let Some(field) = continuing {
                let text = values.entry(field).or_default();
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(line.trim());
            }
        }

        let mut take = |field: ClaimField| values.remove(&field);

        ClaimRecord {
            policy_number: take(ClaimField::PolicyNumber),
            policy_holder_name: take(ClaimField::PolicyHolderName),
            incident_date: take(ClaimField::IncidentDate),
            incident_description: take(ClaimField::IncidentDescription),
            claim_type: take(ClaimField::ClaimType),
            estimated_damage: take(ClaimField::EstimatedDamage).and_then(|v| parse_amount(&v)),
            incident_location: take(ClaimField::IncidentLocation),
            claimant_name: take(ClaimField::ClaimantName),
            asset_id: take(ClaimField::AssetId),
        }
    }
}

#[async_trait]
impl FieldExtractor for LabelFieldExtractor {
    async fn extract(&self, raw_text: &str, filename: &str) -> ClaimRecord {
        let record = self.extract_record(raw_text);

        let found = ClaimField::ALL
            .iter()
            .filter(|field| !record.is_missing(**field))
            .count();
        tracing::debug!(filename, fields_found = found, "Label extraction complete");

        record
    }

    fn name(&self) -> &'static str {
        "label"
    }
}

fn normalise_label(label: &str) -> String {
    WHITESPACE.replace_all(label.trim(), " ").to_lowercase()
}

fn is_placeholder(value: &str) -> bool {
    value.is_empty() || PLACEHOLDERS.iter().any(|p| value.eq_ignore_ascii_case(p))
}

/// Parses the first number in a free-form amount
///
/// Currency symbols, codes and thousands separators are ignored:
/// `"$12,500.00"`, `"USD 12500"` and `"approx. 12,500 dollars"` all parse
/// to 12500.
pub fn parse_amount(value: &str) -> Option<Decimal> {
    let number = AMOUNT.find(value)?.as_str().replace(',', "");
    Decimal::from_str(&number).ok()
}
