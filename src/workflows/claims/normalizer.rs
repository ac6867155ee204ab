use serde_json::Value;

use super::domain::{BodyZone, DamageRecord, DamageType, Geometry, VehiclePart};

const DEFAULT_SEVERITY: u8 = 2;
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Convert raw candidate observations into canonical damage records.
///
/// Total over arbitrary input: every malformed field degrades to a
/// deterministic default, and the output has exactly one record per input
/// element in the same order.
pub fn normalize_observations(observations: &[Value]) -> Vec<DamageRecord> {
    observations.iter().map(normalize_observation).collect()
}

pub(crate) fn normalize_observation(raw: &Value) -> DamageRecord {
    let zone = enum_field(raw, "zone", BodyZone::from_label).unwrap_or(BodyZone::Unknown);
    let part = enum_field(raw, "part", VehiclePart::from_label).unwrap_or(VehiclePart::Unknown);
    let damage_type =
        enum_field(raw, "damage_type", DamageType::from_label).unwrap_or(DamageType::Unknown);

    let severity = raw
        .get("severity")
        .and_then(Value::as_f64)
        .filter(|value| (1.0..=5.0).contains(value))
        .map(|value| value.round() as u8)
        .unwrap_or(DEFAULT_SEVERITY);

    let confidence = raw
        .get("confidence")
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_CONFIDENCE)
        .clamp(0.0, 1.0);

    let est_labor_hours = match raw.get("est_labor_hours").and_then(Value::as_f64) {
        Some(hours) if hours >= 0.0 => hours,
        _ => fallback_labor_hours(part, severity),
    };

    let needs_paint = match raw.get("needs_paint").and_then(Value::as_bool) {
        Some(flag) => flag,
        None => fallback_needs_paint(damage_type, severity, part),
    };

    let likely_parts = raw
        .get("likely_parts")
        .and_then(Value::as_array)
        .map(|values| values.iter().map(coerce_string).collect())
        .unwrap_or_default();

    let geometry = parse_polygon(raw.get("polygon_rel")).or_else(|| parse_box(raw.get("bbox_rel")));

    DamageRecord {
        zone,
        part,
        damage_type,
        severity,
        confidence,
        est_labor_hours,
        needs_paint,
        likely_parts,
        geometry,
    }
}

fn enum_field<T>(raw: &Value, key: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    raw.get(key)
        .and_then(Value::as_str)
        .and_then(|value| parse(&canonical_token(value)))
}

/// Collapse labeler spelling variants ("Front Left", "quarter_panel") onto the
/// canonical kebab-case labels before enum lookup.
pub(crate) fn canonical_token(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase()
        .replace('_', "-")
}

/// Base-hours table keyed by part, scaled by severity, rounded to 2 decimals.
pub(crate) fn fallback_labor_hours(part: VehiclePart, severity: u8) -> f64 {
    let base: f64 = match part {
        VehiclePart::Bumper | VehiclePart::Fender | VehiclePart::Windshield => 1.2,
        VehiclePart::Door => 1.5,
        VehiclePart::Hood | VehiclePart::Trunk => 1.4,
        VehiclePart::QuarterPanel => 2.0,
        VehiclePart::Headlight | VehiclePart::Taillight => 0.6,
        VehiclePart::Grille => 0.8,
        VehiclePart::Mirror => 0.5,
        VehiclePart::Wheel => 0.7,
        VehiclePart::Roof | VehiclePart::Unknown => 1.0,
    };
    let multiplier = match severity {
        1 => 0.5,
        2 => 0.8,
        3 => 1.0,
        4 => 1.4,
        _ => 1.8,
    };
    (base * multiplier * 100.0).round() / 100.0
}

/// Glass, lights, and mirrors never take paint; scratch/paint damage always
/// does; everything else paints from severity 2 up.
pub(crate) fn fallback_needs_paint(
    damage_type: DamageType,
    severity: u8,
    part: VehiclePart,
) -> bool {
    if matches!(
        part,
        VehiclePart::Windshield | VehiclePart::Headlight | VehiclePart::Taillight | VehiclePart::Mirror
    ) {
        return false;
    }

    let label = damage_type.label();
    if label.contains("scratch") || label.contains("paint") {
        return true;
    }

    severity >= 2
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn parse_box(value: Option<&Value>) -> Option<Geometry> {
    let values = value?.as_array()?;
    if values.len() != 4 {
        return None;
    }

    let mut coords = [0.0f64; 4];
    for (slot, value) in coords.iter_mut().zip(values) {
        *slot = unit_interval(value)?;
    }

    Some(Geometry::Box {
        x: coords[0],
        y: coords[1],
        w: coords[2],
        h: coords[3],
    })
}

fn parse_polygon(value: Option<&Value>) -> Option<Geometry> {
    let vertices = value?.as_array()?;
    if !(3..=12).contains(&vertices.len()) {
        return None;
    }

    let mut points = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        let pair = vertex.as_array()?;
        if pair.len() != 2 {
            return None;
        }
        points.push([unit_interval(&pair[0])?, unit_interval(&pair[1])?]);
    }

    Some(Geometry::Polygon { points })
}

fn unit_interval(value: &Value) -> Option<f64> {
    value.as_f64().filter(|number| (0.0..=1.0).contains(number))
}
