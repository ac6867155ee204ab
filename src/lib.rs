//! Claim triage service turning vision-model damage observations into repair
//! estimates, routing decisions, and adjuster-facing summaries.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
