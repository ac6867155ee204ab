use serde::{Deserialize, Serialize};

/// Pricing inputs and routing thresholds applied by the triage engine.
///
/// Read once at startup and never mutated; the engine itself does not check
/// band consistency (startup validation does), it only applies the documented
/// precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    pub labor_rate: f64,
    pub paint_cost: f64,
    pub auto_max_severity: u8,
    pub auto_max_cost: u32,
    pub auto_min_confidence: f64,
    pub specialist_min_severity: u8,
    pub specialist_min_cost: u32,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            labor_rate: 95.0,
            paint_cost: 180.0,
            auto_max_severity: 2,
            auto_max_cost: 1500,
            auto_min_confidence: 0.75,
            specialist_min_severity: 4,
            specialist_min_cost: 5000,
        }
    }
}
