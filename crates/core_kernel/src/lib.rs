//! Core Kernel - Foundational types shared by the claims triage crates
//!
//! This crate provides the small building blocks used across the workspace:
//! - Strongly-typed identifiers for intake requests
//! - Currency amount formatting for human-readable decision text

pub mod amount;
pub mod identifiers;

pub use amount::{format_amount, format_usd};
pub use identifiers::IntakeId;
