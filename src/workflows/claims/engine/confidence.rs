use crate::workflows::claims::domain::DamageRecord;

/// Returned for an empty record set so the decision engine never divides by zero.
pub(crate) const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Severity-weighted mean of per-record confidences: severity 1 carries
/// weight 1.0, severity 5 carries 1.8, so severe findings count more.
pub(crate) fn aggregate_confidence(records: &[DamageRecord]) -> f64 {
    if records.is_empty() {
        return NEUTRAL_CONFIDENCE;
    }

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for record in records {
        let weight = 1.0 + 0.2 * f64::from(record.severity - 1);
        weighted_sum += record.confidence * weight;
        weight_total += weight;
    }

    weighted_sum / weight_total
}
