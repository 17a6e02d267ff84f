//! Custom Test Assertions
//!
//! Assertion helpers for routing decisions that print the whole decision on
//! failure instead of just the mismatched field.

use domain_triage::{ClaimField, Route, RoutingDecision};

/// Asserts the decision selected the expected route
///
/// # Panics
///
/// Panics if the route differs or the reasoning is empty
pub fn assert_route(decision: &RoutingDecision, expected: Route) {
    assert_eq!(
        decision.recommended_route, expected,
        "Expected route {:?}, got decision {:?}",
        expected, decision
    );
    assert!(
        !decision.reasoning.trim().is_empty(),
        "Decision has empty reasoning: {:?}",
        decision
    );
}

/// Asserts the reasoning mentions the given fragment, ignoring case
pub fn assert_reasoning_contains(decision: &RoutingDecision, fragment: &str) {
    assert!(
        decision.reasoning.to_lowercase().contains(&fragment.to_lowercase()),
        "Expected reasoning to contain {:?}, got {:?}",
        fragment,
        decision.reasoning
    );
}

/// Asserts the exact missing-field list, order included
pub fn assert_missing_fields(decision: &RoutingDecision, expected: &[ClaimField]) {
    assert_eq!(
        decision.missing_fields, expected,
        "Missing fields mismatch for decision {:?}",
        decision
    );
}
