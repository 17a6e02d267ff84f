//! Claims Triage Domain
//!
//! This crate turns a normalized claim record into a routing decision. The
//! decision engine is a pure function: no I/O, no shared mutable state, and
//! every input (including the all-null record) maps to a valid decision.
//!
//! # Decision Flow
//!
//! ```text
//! ClaimRecord -> anchor guard -> fraud -> completeness -> injury -> value -> fast-track
//!                    |             |           |             |        |
//!                 Rejected   Investigation  Manual      Specialist Standard
//!                               Flag        Review        Queue   Processing
//! ```
//!
//! # Example
//!
//! ```rust
//! use domain_triage::{evaluate, ClaimRecord, Route};
//! use rust_decimal::Decimal;
//!
//! let record = ClaimRecord {
//!     policy_number: Some("P1".into()),
//!     policy_holder_name: Some("Jane Doe".into()),
//!     incident_date: Some("2024-01-01".into()),
//!     incident_description: Some("Minor fender bender at red light.".into()),
//!     claim_type: Some("Collision".into()),
//!     estimated_damage: Some(Decimal::new(1200, 0)),
//!     ..ClaimRecord::empty()
//! };
//!
//! let decision = evaluate(&record);
//! assert_eq!(decision.recommended_route, Route::FastTrack);
//! assert!(decision.missing_fields.is_empty());
//! ```

pub mod record;
pub mod decision;
pub mod rules;
pub mod engine;
pub mod error;

pub use record::{ClaimField, ClaimRecord};
pub use decision::{Route, RoutingDecision};
pub use rules::TriageRules;
pub use engine::{evaluate, Assessment, TriageEngine, TriageRule};
pub use error::RulesError;
