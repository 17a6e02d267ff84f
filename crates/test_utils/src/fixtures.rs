//! Pre-built Test Fixtures
//!
//! Ready-to-use claim records and claim documents covering each routing lane.

use domain_triage::ClaimRecord;
use rust_decimal_macros::dec;

/// Fixture for claim records
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Complete, clean, low-value collision claim
    pub fn clean_collision() -> ClaimRecord {
        ClaimRecord {
            policy_number: Some("P1".to_string()),
            policy_holder_name: Some("Jane Doe".to_string()),
            incident_date: Some("2024-01-01".to_string()),
            incident_description: Some("Minor fender bender at red light.".to_string()),
            claim_type: Some("Collision".to_string()),
            estimated_damage: Some(dec!(1200)),
            incident_location: Some("Main St & 5th Ave".to_string()),
            claimant_name: Some("Jane Doe".to_string()),
            asset_id: Some("1HGCM82633A004352".to_string()),
        }
    }

    /// Complete claim above the fast-track threshold
    pub fn high_value_collision() -> ClaimRecord {
        ClaimRecord {
            incident_description: Some(
                "Vehicle totaled after sliding on ice into a barrier.".to_string(),
            ),
            estimated_damage: Some(dec!(42000)),
            ..Self::clean_collision()
        }
    }

    /// Complete claim describing an injury
    pub fn injury_claim() -> ClaimRecord {
        ClaimRecord {
            incident_description: Some(
                "Rear-ended at a stop sign. Driver reported whiplash and was taken by ambulance."
                    .to_string(),
            ),
            claim_type: Some("Bodily Injury".to_string()),
            estimated_damage: Some(dec!(8500)),
            ..Self::clean_collision()
        }
    }

    /// Complete claim with fraud-indicative language
    pub fn staged_collision() -> ClaimRecord {
        ClaimRecord {
            incident_description: Some(
                "Witness statements are inconsistent; the collision appears staged.".to_string(),
            ),
            ..Self::clean_collision()
        }
    }

    /// Record with no evidentiary anchors but otherwise populated
    pub fn anchorless() -> ClaimRecord {
        ClaimRecord {
            policy_number: None,
            incident_date: None,
            estimated_damage: None,
            ..Self::clean_collision()
        }
    }
}

/// Fixture for raw claim documents
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// First-notice-of-loss form for a clean collision
    pub fn clean_fnol_text() -> &'static str {
        "FIRST NOTICE OF LOSS\n\
         Policy Number: P1\n\
         Policyholder Name: Jane Doe\n\
         Date of Loss: 2024-01-01\n\
         Location of Loss: Main St & 5th Ave\n\
         Claim Type: Collision\n\
         Description of Loss: Minor fender bender at red light.\n\
         Estimated Damage: $1,200.00\n\
         Claimant Name: Jane Doe\n\
         VIN: 1HGCM82633A004352\n"
    }

    /// Form for an injury claim whose description spans several lines
    pub fn injury_fnol_text() -> &'static str {
        "Policy No: AUTO-7781\r\n\
         Insured Name: Marcus Lee\r\n\
         Incident Date: 03/14/2024\r\n\
         Type of Claim: Auto\r\n\
         Description: Rear-ended while stopped at a light.\r\n\
         Driver complained of neck pain and visited the hospital.\r\n\
         \r\n\
         Estimate Amount: USD 6,750\r\n"
    }

    /// Form above the fast-track threshold
    pub fn high_value_fnol_text() -> &'static str {
        "Policy Number: HOME-2231\n\
         Policy Holder Name: Ada Byron\n\
         Date of Loss: 2024-02-11\n\
         Claim Type: Property\n\
         Description of Loss: Kitchen fire spread to the dining room.\n\
         Estimated Damage: $38,400\n"
    }

    /// Text that is not a claim at all
    pub fn garbage_text() -> &'static str {
        "fn main() {\n    println!(\"hello world\");\n}\n// TODO: buy milk\n"
    }

    /// Minimal PDF header bytes
    pub fn pdf_bytes() -> &'static [u8] {
        b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\n"
    }

    /// PNG signature followed by junk
    pub fn png_bytes() -> &'static [u8] {
        &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00]
    }
}
