//! Comprehensive tests for domain_triage

use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_triage::engine::{cascade, REJECTED_REASONING};
use domain_triage::{
    evaluate, ClaimField, ClaimRecord, Route, RoutingDecision, TriageEngine, TriageRules,
};
use test_utils::{
    anchorless_record_strategy, assert_missing_fields, assert_reasoning_contains, assert_route,
    claim_record_strategy, ClaimFixtures, ClaimRecordBuilder,
};

// ============================================================================
// Anchor Guard Tests
// ============================================================================

mod anchor_guard_tests {
    use super::*;

    #[test]
    fn test_all_null_record_is_rejected() {
        let decision = evaluate(&ClaimRecord::empty());

        assert_route(&decision, Route::Rejected);
        assert_eq!(decision.reasoning, REJECTED_REASONING);
        assert_reasoning_contains(
            &decision,
            "document does not appear to be a valid insurance claim",
        );
        assert!(decision.missing_fields.is_empty());
    }

    #[test]
    fn test_guard_wins_over_fraud_language() {
        let record = ClaimRecordBuilder::empty()
            .description("This was staged fraud, suspicious from the start")
            .claim_type("Bodily Injury")
            .build();

        assert_route(&evaluate(&record), Route::Rejected);
    }

    #[test]
    fn test_populated_record_without_anchors_is_rejected() {
        let decision = evaluate(&ClaimFixtures::anchorless());
        assert_route(&decision, Route::Rejected);
        assert!(decision.missing_fields.is_empty());
    }

    #[test]
    fn test_one_anchor_is_enough_to_pass_the_guard() {
        let policy_only = ClaimRecordBuilder::empty().policy_number("P-1").build();
        let date_only = ClaimRecordBuilder::empty().incident_date("yesterday").build();
        let damage_only = ClaimRecordBuilder::empty().damage(dec!(10)).build();

        for record in [policy_only, date_only, damage_only] {
            assert_route(&evaluate(&record), Route::ManualReview);
        }
    }

    #[test]
    fn test_damage_alone_keeps_a_complete_claim_past_the_guard() {
        let record = ClaimRecordBuilder::new()
            .without_policy_number()
            .without_incident_date()
            .build();

        let decision = evaluate(&record);

        assert_route(&decision, Route::ManualReview);
        assert_missing_fields(&decision, &[ClaimField::PolicyNumber, ClaimField::IncidentDate]);
    }

    #[test]
    fn test_optional_fields_never_affect_routing() {
        let record = ClaimRecordBuilder::new()
            .location("")
            .claimant_name("null")
            .asset_id("   ")
            .build();

        let decision = evaluate(&record);

        assert_route(&decision, Route::FastTrack);
        assert!(decision.missing_fields.is_empty());
    }

    #[test]
    fn test_sentinel_values_count_as_absent_anchors() {
        let record = ClaimRecordBuilder::empty()
            .policy_number("null")
            .incident_date("   ")
            .damage(dec!(0))
            .build();

        assert_route(&evaluate(&record), Route::Rejected);
    }
}

// ============================================================================
// Cascade Precedence Tests
// ============================================================================

mod precedence_tests {
    use super::*;

    #[test]
    fn test_fraud_outranks_missing_fields() {
        let record = ClaimRecordBuilder::empty()
            .policy_number("P-9")
            .description("Damage pattern looks staged")
            .build();

        let decision = evaluate(&record);

        assert_route(&decision, Route::InvestigationFlag);
        assert_reasoning_contains(&decision, "potential fraud indicators");
    }

    #[test]
    fn test_fraud_decision_keeps_missing_fields_as_diagnostic() {
        let record = ClaimRecordBuilder::new()
            .description("Driver fled the scene")
            .without_claim_type()
            .without_damage()
            .build();

        let decision = evaluate(&record);

        assert_route(&decision, Route::InvestigationFlag);
        assert_missing_fields(&decision, &[ClaimField::ClaimType, ClaimField::EstimatedDamage]);
    }

    #[test]
    fn test_fraud_outranks_injury_and_value() {
        let record = ClaimRecordBuilder::new()
            .description("Suspicious hospital bills after whiplash")
            .damage(dec!(90000))
            .build();

        assert_route(&evaluate(&record), Route::InvestigationFlag);
    }

    #[test]
    fn test_missing_fields_outrank_injury() {
        let record = ClaimFixtures::injury_claim();
        let record = ClaimRecord {
            policy_holder_name: None,
            ..record
        };

        let decision = evaluate(&record);

        assert_route(&decision, Route::ManualReview);
        assert_missing_fields(&decision, &[ClaimField::PolicyHolderName]);
    }

    #[test]
    fn test_injury_outranks_value() {
        let record = ClaimRecordBuilder::new()
            .description("Passenger needed paramedic treatment")
            .damage(dec!(75000))
            .build();

        let decision = evaluate(&record);

        assert_route(&decision, Route::SpecialistQueue);
        assert_reasoning_contains(&decision, "paramedic, treatment");
    }

    #[test]
    fn test_cascade_exposes_rules_in_priority_order() {
        let names: Vec<&str> = cascade().map(|rule| rule.name).collect();
        assert_eq!(
            names,
            vec![
                "fraud_signal",
                "mandatory_completeness",
                "injury_signal",
                "value_threshold",
                "fast_track",
            ]
        );

        let routes: Vec<Route> = cascade().map(|rule| rule.route).collect();
        assert_eq!(&routes[..], &Route::ALL[1..]);
    }
}

// ============================================================================
// Mandatory Field Tests
// ============================================================================

mod mandatory_field_tests {
    use super::*;

    #[test]
    fn test_missing_claim_type_goes_to_manual_review() {
        let record = ClaimRecordBuilder::new().without_claim_type().build();

        let decision = evaluate(&record);

        assert_route(&decision, Route::ManualReview);
        assert_missing_fields(&decision, &[ClaimField::ClaimType]);
        assert_eq!(decision.reasoning, "Mandatory fields are missing: claimType");
    }

    #[test]
    fn test_missing_fields_follow_declaration_order() {
        let record = ClaimRecordBuilder::new()
            .without_damage()
            .without_policy_holder_name()
            .without_description()
            .build();

        let decision = evaluate(&record);

        assert_missing_fields(
            &decision,
            &[
                ClaimField::PolicyHolderName,
                ClaimField::IncidentDescription,
                ClaimField::EstimatedDamage,
            ],
        );
        assert_reasoning_contains(
            &decision,
            "policyHolderName, incidentDescription, estimatedDamage",
        );
    }

    #[test]
    fn test_zero_damage_counts_as_missing() {
        let record = ClaimRecordBuilder::new().damage(dec!(0)).build();

        let decision = evaluate(&record);

        assert_route(&decision, Route::ManualReview);
        assert_missing_fields(&decision, &[ClaimField::EstimatedDamage]);
    }

    #[test]
    fn test_blank_and_null_strings_count_as_missing() {
        let record = ClaimRecordBuilder::new()
            .policy_holder_name("")
            .claim_type("NULL")
            .build();

        assert_missing_fields(
            &evaluate(&record),
            &[ClaimField::PolicyHolderName, ClaimField::ClaimType],
        );
    }

    #[test]
    fn test_optional_fields_are_never_reported() {
        let record = ClaimRecord {
            incident_location: None,
            claimant_name: None,
            asset_id: None,
            ..ClaimFixtures::clean_collision()
        };

        let decision = evaluate(&record);

        assert_route(&decision, Route::FastTrack);
        assert!(decision.missing_fields.is_empty());
    }
}

// ============================================================================
// Keyword Matching Tests
// ============================================================================

mod keyword_tests {
    use super::*;

    #[test]
    fn test_fraud_match_is_case_insensitive() {
        let upper = ClaimRecordBuilder::new().description("Vehicle appeared STAGED").build();
        let lower = ClaimRecordBuilder::new().description("Vehicle appeared staged").build();

        let upper_decision = evaluate(&upper);
        let lower_decision = evaluate(&lower);

        assert_route(&upper_decision, Route::InvestigationFlag);
        assert_eq!(upper_decision, lower_decision);
    }

    #[test]
    fn test_match_is_substring_not_word() {
        let record = ClaimRecordBuilder::new()
            .description("Reports stiffnesses in the lower back")
            .build();

        assert_route(&evaluate(&record), Route::SpecialistQueue);
    }

    #[test]
    fn test_claim_type_is_part_of_the_haystack() {
        let record = ClaimRecordBuilder::new()
            .description("Rear-ended on the highway")
            .claim_type("Bodily Injury")
            .build();

        let decision = evaluate(&record);

        assert_route(&decision, Route::SpecialistQueue);
        assert_reasoning_contains(&decision, "bodily, injury");
    }

    #[test]
    fn test_fraud_terms_in_claim_type() {
        let record = ClaimRecordBuilder::new().claim_type("Suspicious").build();
        assert_route(&evaluate(&record), Route::InvestigationFlag);
    }

    #[test]
    fn test_every_fraud_keyword_triggers_investigation() {
        for keyword in TriageRules::canonical().fraud_keywords() {
            let record = ClaimRecordBuilder::new()
                .description(format!("Adjuster note: {keyword}"))
                .build();
            assert_route(&evaluate(&record), Route::InvestigationFlag);
        }
    }

    #[test]
    fn test_every_injury_keyword_triggers_specialist() {
        for keyword in TriageRules::canonical().injury_keywords() {
            let record = ClaimRecordBuilder::new()
                .description(format!("Claimant mentions {keyword}"))
                .build();
            assert_route(&evaluate(&record), Route::SpecialistQueue);
        }
    }
}

// ============================================================================
// Value Threshold Tests
// ============================================================================

mod threshold_tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let record = ClaimRecordBuilder::new().damage(dec!(25000)).build();

        let decision = evaluate(&record);

        assert_route(&decision, Route::StandardProcessing);
        assert_reasoning_contains(&decision, "$25,000");
    }

    #[test]
    fn test_just_below_threshold_is_fast_track() {
        let record = ClaimRecordBuilder::new().damage(dec!(24999.99)).build();
        assert_route(&evaluate(&record), Route::FastTrack);
    }

    #[test]
    fn test_high_value_reasoning_formats_amount_and_threshold() {
        let decision = evaluate(&ClaimFixtures::high_value_collision());

        assert_route(&decision, Route::StandardProcessing);
        assert_eq!(
            decision.reasoning,
            "High-value claim ($42,000) meets or exceeds Fast-track threshold ($25,000)."
        );
    }
}

// ============================================================================
// End-to-End Examples
// ============================================================================

mod example_tests {
    use super::*;

    #[test]
    fn test_clean_collision_fast_tracks() {
        let decision = evaluate(&ClaimFixtures::clean_collision());

        assert_route(&decision, Route::FastTrack);
        assert_reasoning_contains(&decision, "under $25,000 threshold");
        assert!(decision.missing_fields.is_empty());
    }

    #[test]
    fn test_example_from_json_payload() {
        let record: ClaimRecord = serde_json::from_str(
            r#"{
                "policyNumber": "P1",
                "policyHolderName": "Jane Doe",
                "incidentDate": "2024-01-01",
                "incidentDescription": "Minor fender bender at red light.",
                "claimType": "Collision",
                "estimatedDamage": 1200
            }"#,
        )
        .unwrap();

        let decision = evaluate(&record);
        let json = serde_json::to_value(&decision).unwrap();

        assert_eq!(json["recommendedRoute"], "FastTrack");
        assert_eq!(json["missingFields"], serde_json::json!([]));
        assert!(json["reasoning"].as_str().unwrap().contains("under $25,000 threshold"));
    }

    #[test]
    fn test_decision_serializes_missing_fields_as_names() {
        let decision = evaluate(&ClaimRecordBuilder::new().without_claim_type().build());
        let json = serde_json::to_value(&decision).unwrap();

        assert_eq!(json["recommendedRoute"], "ManualReview");
        assert_eq!(json["missingFields"], serde_json::json!(["claimType"]));
        assert_eq!(decision.missing_field_names(), vec!["claimType"]);
    }

    #[test]
    fn test_staged_collision_cites_terms_in_table_order() {
        let decision = evaluate(&ClaimFixtures::staged_collision());

        assert_route(&decision, Route::InvestigationFlag);
        assert_reasoning_contains(&decision, "(staged, inconsistent)");
    }

    #[test]
    fn test_evaluation_does_not_mutate_record() {
        let record = ClaimFixtures::injury_claim();
        let before = record.clone();

        let _ = evaluate(&record);

        assert_eq!(record, before);
    }
}

// ============================================================================
// Wire Format Tests
// ============================================================================

mod wire_format_tests {
    use super::*;

    #[test]
    fn test_damage_near_threshold_serializes_exactly() {
        let record = ClaimRecordBuilder::new()
            .damage(dec!(24999.9999999999999999))
            .build();

        let decision = evaluate(&record);
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ClaimRecord = serde_json::from_str(&json).unwrap();

        assert_route(&decision, Route::FastTrack);
        assert!(json.contains(r#""estimatedDamage":24999.9999999999999999"#), "{json}");
        assert_eq!(parsed, record);
        assert_route(&evaluate(&parsed), Route::FastTrack);
    }

    #[test]
    fn test_large_damage_keeps_every_digit() {
        let record = ClaimRecordBuilder::new()
            .damage(dec!(12345678901234567890.123456789))
            .build();

        let json = serde_json::to_string(&record).unwrap();
        let parsed: ClaimRecord = serde_json::from_str(&json).unwrap();

        assert!(json.contains("12345678901234567890.123456789"), "{json}");
        assert_eq!(parsed.estimated_damage, Some(dec!(12345678901234567890.123456789)));
    }

    #[test]
    fn test_absent_damage_serializes_as_null() {
        let json = serde_json::to_value(ClaimRecord::empty()).unwrap();
        assert!(json["estimatedDamage"].is_null());
    }

    #[test]
    fn test_damage_reads_numbers_strings_and_null() {
        let parse = |json: &str| serde_json::from_str::<ClaimRecord>(json).unwrap();

        let number = parse(r#"{ "estimatedDamage": 1200.50 }"#);
        let string = parse(r#"{ "estimatedDamage": "1200.50" }"#);
        let null = parse(r#"{ "estimatedDamage": null }"#);

        assert_eq!(number.estimated_damage, Some(dec!(1200.50)));
        assert_eq!(string.estimated_damage, Some(dec!(1200.50)));
        assert_eq!(null.estimated_damage, None);
    }

    #[test]
    fn test_damage_outside_decimal_range_is_an_error() {
        let result = serde_json::from_str::<ClaimRecord>(r#"{ "estimatedDamage": 1e30 }"#);
        assert!(result.is_err());
    }
}

// ============================================================================
// Injected Rule Table Tests
// ============================================================================

mod custom_rules_tests {
    use super::*;
    use domain_triage::RulesError;

    #[test]
    fn test_custom_fraud_keyword() {
        let rules = TriageRules::new(
            ["Duplicate Invoice"],
            ["pain"],
            vec![ClaimField::PolicyNumber],
            dec!(1000),
        )
        .unwrap();
        let engine = TriageEngine::new(rules);

        let flagged = ClaimRecordBuilder::new()
            .description("Body shop sent a duplicate invoice")
            .build();
        let staged = ClaimRecordBuilder::new().description("Looks staged").build();

        assert_route(&engine.evaluate(&flagged), Route::InvestigationFlag);
        // "staged" is not in the injected table; 1200 >= 1000
        assert_route(&engine.evaluate(&staged), Route::StandardProcessing);
    }

    #[test]
    fn test_custom_mandatory_fields() {
        let rules = TriageRules::new(
            Vec::<&str>::new(),
            Vec::<&str>::new(),
            vec![ClaimField::AssetId, ClaimField::PolicyNumber],
            dec!(25000),
        )
        .unwrap();
        let engine = TriageEngine::new(rules);

        let record = ClaimRecordBuilder::empty().policy_number("P-2").build();
        let decision = engine.evaluate(&record);

        assert_route(&decision, Route::ManualReview);
        assert_missing_fields(&decision, &[ClaimField::AssetId]);
    }

    #[test]
    fn test_custom_threshold_reasoning() {
        let rules = TriageRules::default().with_fast_track_threshold(dec!(500.5)).unwrap();
        let engine = TriageEngine::new(rules);

        let decision = engine.evaluate(&ClaimFixtures::clean_collision());

        assert_route(&decision, Route::StandardProcessing);
        assert_reasoning_contains(
            &decision,
            "($1,200) meets or exceeds Fast-track threshold ($500.50)",
        );
    }

    #[test]
    fn test_rules_from_json_fall_back_to_canonical() {
        let rules = TriageRules::from_json_str(r#"{ "fastTrackThreshold": 5000 }"#).unwrap();

        assert_eq!(rules.fast_track_threshold(), dec!(5000));
        assert_eq!(rules.fraud_keywords(), TriageRules::canonical().fraud_keywords());
        assert_eq!(rules.mandatory_fields(), TriageRules::canonical().mandatory_fields());
    }

    #[test]
    fn test_rules_from_json_normalise_keywords() {
        let rules =
            TriageRules::from_json_str(r#"{ "injuryKeywords": ["  Concussion "] }"#).unwrap();
        assert_eq!(rules.injury_keywords(), ["concussion".to_string()]);
    }

    #[test]
    fn test_rules_reject_blank_keyword() {
        let result = TriageRules::from_json_str(r#"{ "fraudKeywords": ["fraud", " "] }"#);
        assert!(matches!(result, Err(RulesError::EmptyKeyword("fraud"))));
    }

    #[test]
    fn test_rules_reject_duplicate_mandatory_field() {
        let result = TriageRules::from_json_str(
            r#"{ "mandatoryFields": ["claimType", "policyNumber", "claimType"] }"#,
        );
        assert!(matches!(result, Err(RulesError::DuplicateMandatoryField(_))));
    }

    #[test]
    fn test_rules_reject_negative_threshold() {
        let result = TriageRules::default().with_fast_track_threshold(dec!(-1));
        assert!(matches!(result, Err(RulesError::InvalidThreshold(_))));
    }

    #[test]
    fn test_rules_reject_malformed_json() {
        let result = TriageRules::from_json_str("{ not json");
        assert!(matches!(result, Err(RulesError::ParseError(_))));
    }

    #[test]
    fn test_rules_file_not_found() {
        let result = TriageRules::from_file(std::path::Path::new("/nonexistent/triage-rules.json"));
        assert!(matches!(result, Err(RulesError::FileNotFound(_))));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn routed_consistently(decision: &RoutingDecision) -> bool {
    match decision.recommended_route {
        Route::Rejected | Route::InvestigationFlag => true,
        Route::ManualReview => !decision.missing_fields.is_empty(),
        _ => decision.missing_fields.is_empty(),
    }
}

proptest! {
    #[test]
    fn prop_evaluation_is_total(record in claim_record_strategy()) {
        let decision = evaluate(&record);

        prop_assert!(!decision.reasoning.trim().is_empty());
        prop_assert!(Route::ALL.contains(&decision.recommended_route));
        prop_assert!(routed_consistently(&decision));
    }

    #[test]
    fn prop_anchorless_records_are_rejected(record in anchorless_record_strategy()) {
        let decision = evaluate(&record);

        prop_assert_eq!(decision.recommended_route, Route::Rejected);
        prop_assert!(decision.missing_fields.is_empty());
    }

    #[test]
    fn prop_evaluation_is_deterministic(record in claim_record_strategy()) {
        prop_assert_eq!(evaluate(&record), evaluate(&record));
    }

    #[test]
    fn prop_missing_fields_follow_mandatory_order(record in claim_record_strategy()) {
        let decision = evaluate(&record);
        let order = TriageRules::canonical().mandatory_fields();
        let positions: Vec<usize> = decision
            .missing_fields
            .iter()
            .map(|field| order.iter().position(|f| f == field).unwrap())
            .collect();

        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
