use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::domain::ClaimAssessment;
use super::engine::{TriageConfig, TriageEngine};
use super::normalizer::normalize_observations;
use super::summary::damage_summary;

/// Payload handed over by the upstream vision collaborator: unvalidated
/// candidate observations plus an optional free-text narrative used when no
/// observations survive normalization with content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub observations: Vec<Value>,
    #[serde(default)]
    pub narrative: Option<String>,
}

/// Service composing normalization, the triage engine, and the damage summary
/// into one stateless pass per request.
pub struct ClaimTriageService {
    engine: TriageEngine,
}

impl ClaimTriageService {
    pub fn new(config: TriageConfig) -> Self {
        Self {
            engine: TriageEngine::new(config),
        }
    }

    pub fn engine(&self) -> &TriageEngine {
        &self.engine
    }

    /// Run the full pipeline. Cannot fail: malformed observations degrade to
    /// defaults inside the normalizer.
    pub fn assess(&self, request: &AssessmentRequest) -> ClaimAssessment {
        let records = normalize_observations(&request.observations);
        let outcome = self.engine.triage(&records);
        let damage_summary = damage_summary(&records, request.narrative.as_deref());

        info!(
            findings = records.len(),
            decision = outcome.decision.label(),
            cost_low = outcome.estimate.cost_low,
            cost_high = outcome.estimate.cost_high,
            "claim triage complete"
        );

        ClaimAssessment {
            records,
            estimate: outcome.estimate,
            decision: outcome.decision,
            aggregate_confidence: outcome.aggregate_confidence,
            max_severity: outcome.max_severity,
            damage_summary,
        }
    }
}
