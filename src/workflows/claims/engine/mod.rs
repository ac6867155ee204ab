mod config;
mod confidence;
mod decision;
mod estimate;

pub use config::TriageConfig;

pub(crate) use confidence::{aggregate_confidence, NEUTRAL_CONFIDENCE};
pub(crate) use decision::route_claim;
pub(crate) use estimate::{estimate_repair, PART_ALLOWANCE};

use serde::Serialize;

use crate::workflows::claims::domain::{DamageRecord, RepairEstimate, RoutingDecision};

/// Stateless engine applying pricing and routing configuration to a
/// normalized record set. Safe to share across requests; every call is a pure
/// function of its inputs.
pub struct TriageEngine {
    config: TriageConfig,
}

impl TriageEngine {
    pub fn new(config: TriageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    pub fn estimate(&self, records: &[DamageRecord]) -> RepairEstimate {
        estimate_repair(records, &self.config)
    }

    pub fn aggregate_confidence(&self, records: &[DamageRecord]) -> f64 {
        aggregate_confidence(records)
    }

    /// One full pass: estimate, aggregate confidence, then route.
    pub fn triage(&self, records: &[DamageRecord]) -> TriageOutcome {
        let estimate = estimate_repair(records, &self.config);
        let aggregate_confidence = aggregate_confidence(records);
        let max_severity = records
            .iter()
            .map(|record| record.severity)
            .max()
            .unwrap_or(0);
        let decision = route_claim(
            max_severity,
            aggregate_confidence,
            estimate.cost_high,
            &self.config,
        );

        TriageOutcome {
            estimate,
            decision,
            aggregate_confidence,
            max_severity,
        }
    }
}

/// Output of one triage pass over a normalized record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriageOutcome {
    pub estimate: RepairEstimate,
    pub decision: RoutingDecision,
    pub aggregate_confidence: f64,
    pub max_severity: u8,
}
