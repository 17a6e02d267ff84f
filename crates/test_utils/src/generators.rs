//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claim records, including the
//! degenerate shapes that extractors produce from junk documents.

use domain_triage::rules::{DEFAULT_FRAUD_KEYWORDS, DEFAULT_INJURY_KEYWORDS};
use domain_triage::ClaimRecord;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for optional free text, including blank and "null" sentinels
pub fn optional_text_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        3 => Just(None),
        1 => Just(Some(String::new())),
        1 => Just(Some("null".to_string())),
        5 => "[A-Za-z0-9 ,.'-]{1,40}".prop_map(Some),
    ]
}

/// Strategy for damage estimates in cents, from zero up to ten million
pub fn damage_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for optional damage estimates
pub fn optional_damage_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        1 => Just(None),
        3 => damage_strategy().prop_map(Some),
    ]
}

/// Strategy for a description that may embed a fraud or injury keyword
pub fn narrative_strategy() -> impl Strategy<Value = Option<String>> {
    let keywords: Vec<&'static str> = DEFAULT_FRAUD_KEYWORDS
        .iter()
        .chain(DEFAULT_INJURY_KEYWORDS.iter())
        .copied()
        .collect();

    prop_oneof![
        optional_text_strategy(),
        (
            "[a-z ]{0,20}",
            proptest::sample::select(keywords),
            "[a-z ]{0,20}",
            any::<bool>(),
        )
            .prop_map(|(before, keyword, after, shout)| {
                let keyword = if shout { keyword.to_uppercase() } else { keyword.to_string() };
                Some(format!("{before}{keyword}{after}"))
            }),
    ]
}

/// Strategy for arbitrary claim records
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        optional_text_strategy(),
        optional_text_strategy(),
        optional_text_strategy(),
        narrative_strategy(),
        narrative_strategy(),
        optional_damage_strategy(),
        optional_text_strategy(),
        optional_text_strategy(),
        optional_text_strategy(),
    )
        .prop_map(
            |(
                policy_number,
                policy_holder_name,
                incident_date,
                incident_description,
                claim_type,
                estimated_damage,
                incident_location,
                claimant_name,
                asset_id,
            )| ClaimRecord {
                policy_number,
                policy_holder_name,
                incident_date,
                incident_description,
                claim_type,
                estimated_damage,
                incident_location,
                claimant_name,
                asset_id,
            },
        )
}

/// Strategy for records lacking every evidentiary anchor
pub fn anchorless_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    claim_record_strategy().prop_map(|record| ClaimRecord {
        policy_number: None,
        incident_date: None,
        estimated_damage: None,
        ..record
    })
}
