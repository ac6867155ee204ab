use std::collections::BTreeSet;

use super::config::TriageConfig;
use crate::workflows::claims::domain::{BodyZone, DamageRecord, RepairEstimate};

/// Flat allowance per likely replacement part (one unit minimum for severe items).
pub(crate) const PART_ALLOWANCE: u32 = 250;

const BASE_VARIANCE: f64 = 0.15;
const SEVERE_VARIANCE: f64 = 0.25;
const SEVERE_THRESHOLD: u8 = 4;

/// Deterministic cost rollup: labor by the hour, one paint pass per affected
/// zone, a flat parts allowance, and a variance band around the subtotal.
pub(crate) fn estimate_repair(records: &[DamageRecord], config: &TriageConfig) -> RepairEstimate {
    let mut labor_total = 0.0;
    let mut paint_total = 0.0;
    let mut parts_total: u32 = 0;
    let mut painted_zones: BTreeSet<BodyZone> = BTreeSet::new();

    for record in records {
        labor_total += record.est_labor_hours * config.labor_rate;

        if record.needs_paint && painted_zones.insert(record.zone) {
            paint_total += config.paint_cost;
        }

        if record.severity >= SEVERE_THRESHOLD || !record.likely_parts.is_empty() {
            parts_total += PART_ALLOWANCE * record.likely_parts.len().max(1) as u32;
        }
    }

    let subtotal = labor_total + paint_total + f64::from(parts_total);
    let variance = if records
        .iter()
        .any(|record| record.severity >= SEVERE_THRESHOLD)
    {
        SEVERE_VARIANCE
    } else {
        BASE_VARIANCE
    };

    RepairEstimate {
        currency: "USD".to_string(),
        cost_low: (subtotal * (1.0 - variance)).round() as u32,
        cost_high: (subtotal * (1.0 + variance)).round() as u32,
        assumptions: assumptions(config),
    }
}

fn assumptions(config: &TriageConfig) -> Vec<String> {
    vec![
        format!("Labor billed at ${:.0}/hour", config.labor_rate),
        format!(
            "Paint and materials billed at ${:.0} per affected body zone",
            config.paint_cost
        ),
        format!("Parts allowance of ${PART_ALLOWANCE} per likely replacement part"),
        "Visual estimate only; final cost subject to teardown inspection".to_string(),
    ]
}
