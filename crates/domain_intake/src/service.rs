//! Intake orchestration

use std::sync::Arc;

use tracing::{info, warn};

use core_kernel::IntakeId;
use domain_triage::{ClaimRecord, RoutingDecision, TriageEngine};

use crate::document::{Document, DocumentReader, PlainTextReader};
use crate::error::IntakeError;
use crate::extractor::{FieldExtractor, LabelFieldExtractor};

/// Default size limit for a single document
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Result of one intake pass
#[derive(Debug, Clone)]
pub struct IntakeOutcome {
    /// Identifier for correlating logs and responses
    pub intake_id: IntakeId,
    /// Fields the extractor produced
    pub extracted_fields: ClaimRecord,
    /// Triage verdict on those fields
    pub decision: RoutingDecision,
}

/// Runs documents through reader, extractor and triage engine
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Clone)]
pub struct IntakeService {
    reader: Arc<dyn DocumentReader>,
    extractor: Arc<dyn FieldExtractor>,
    engine: Arc<TriageEngine>,
    max_document_bytes: usize,
}

impl std::fmt::Debug for IntakeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntakeService")
            .field("extractor", &self.extractor.name())
            .field("max_document_bytes", &self.max_document_bytes)
            .finish()
    }
}

impl Default for IntakeService {
    fn default() -> Self {
        Self::new(
            Arc::new(PlainTextReader::default()),
            Arc::new(LabelFieldExtractor::new()),
            Arc::new(TriageEngine::default()),
        )
    }
}

impl IntakeService {
    /// Creates a service from its collaborators
    pub fn new(
        reader: Arc<dyn DocumentReader>,
        extractor: Arc<dyn FieldExtractor>,
        engine: Arc<TriageEngine>,
    ) -> Self {
        Self {
            reader,
            extractor,
            engine,
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }

    /// Sets the document size limit
    pub fn with_max_document_bytes(mut self, max: usize) -> Self {
        self.max_document_bytes = max;
        self
    }

    /// Processes one document end to end
    ///
    /// # Errors
    ///
    /// Returns `IntakeError` if the document is too large, empty, or not
    /// readable as text. Extraction and triage cannot fail.
    pub async fn process(&self, document: Document) -> Result<IntakeOutcome, IntakeError> {
        let intake_id = IntakeId::new();

        info!(
            %intake_id,
            filename = %document.filename(),
            size = document.len(),
            "Processing claim document"
        );

        if document.len() > self.max_document_bytes {
            warn!(%intake_id, size = document.len(), "Document exceeds size limit");
            return Err(IntakeError::DocumentTooLarge {
                size: document.len(),
                max: self.max_document_bytes,
            });
        }

        let raw_text = self.reader.read_text(&document).map_err(|e| {
            warn!(%intake_id, error = %e, "Document could not be read");
            e
        })?;

        let extracted_fields = self.extractor.extract(&raw_text, document.filename()).await;
        let decision = self.engine.evaluate(&extracted_fields);

        info!(
            %intake_id,
            extractor = self.extractor.name(),
            route = %decision.recommended_route,
            missing_fields = decision.missing_fields.len(),
            "Claim triaged"
        );

        Ok(IntakeOutcome {
            intake_id,
            extracted_fields,
            decision,
        })
    }

    /// Triages an already-structured record
    pub fn evaluate(&self, record: &ClaimRecord) -> RoutingDecision {
        let decision = self.engine.evaluate(record);
        info!(route = %decision.recommended_route, "Structured claim triaged");
        decision
    }
}
