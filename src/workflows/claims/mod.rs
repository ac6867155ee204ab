//! Vehicle damage claim triage: normalization of untrusted vision-model
//! observations, heuristic cost estimation, confidence aggregation, and
//! three-way routing.
//!
//! The normalizer is the only place raw external data is inspected; every
//! downstream stage consumes canonical [`domain::DamageRecord`]s and never
//! re-validates.

pub mod domain;
pub(crate) mod engine;
pub mod intake;
pub(crate) mod normalizer;
pub mod router;
pub mod service;
pub(crate) mod summary;

#[cfg(test)]
mod tests;

pub use domain::{
    BodyZone, ClaimAssessment, DamageRecord, DamageType, Geometry, RepairEstimate,
    RoutingDecision, VehiclePart,
};
pub use engine::{TriageConfig, TriageEngine, TriageOutcome};
pub use intake::{VisionExportError, VisionExportImporter};
pub use normalizer::normalize_observations;
pub use router::claims_router;
pub use service::{AssessmentRequest, ClaimTriageService};
