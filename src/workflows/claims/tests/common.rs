use serde_json::{json, Value};

use crate::workflows::claims::domain::{BodyZone, DamageRecord, DamageType, VehiclePart};
use crate::workflows::claims::engine::{TriageConfig, TriageEngine};
use crate::workflows::claims::service::{AssessmentRequest, ClaimTriageService};

pub(super) fn triage_config() -> TriageConfig {
    TriageConfig::default()
}

pub(super) fn engine() -> TriageEngine {
    TriageEngine::new(triage_config())
}

pub(super) fn service() -> ClaimTriageService {
    ClaimTriageService::new(triage_config())
}

pub(super) fn record(zone: BodyZone, severity: u8, confidence: f64) -> DamageRecord {
    DamageRecord {
        zone,
        part: VehiclePart::Bumper,
        damage_type: DamageType::Dent,
        severity,
        confidence,
        est_labor_hours: 1.0,
        needs_paint: false,
        likely_parts: Vec::new(),
        geometry: None,
    }
}

pub(super) fn paintable_record(zone: BodyZone, est_labor_hours: f64) -> DamageRecord {
    DamageRecord {
        est_labor_hours,
        needs_paint: true,
        ..record(zone, 3, 0.8)
    }
}

pub(super) fn dent_observation(zone: &str, severity: u8, confidence: f64) -> Value {
    json!({
        "zone": zone,
        "part": "bumper",
        "damage_type": "dent",
        "severity": severity,
        "confidence": confidence,
    })
}

pub(super) fn request(observations: Vec<Value>) -> AssessmentRequest {
    AssessmentRequest {
        observations,
        narrative: None,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
