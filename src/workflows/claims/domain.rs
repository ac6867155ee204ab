use serde::{Deserialize, Serialize};

/// Coarse body-relative location of an observed damage instance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BodyZone {
    FrontLeft,
    Front,
    FrontRight,
    Left,
    Right,
    RearLeft,
    Rear,
    RearRight,
    Roof,
    Unknown,
}

impl BodyZone {
    pub const fn label(self) -> &'static str {
        match self {
            BodyZone::FrontLeft => "front-left",
            BodyZone::Front => "front",
            BodyZone::FrontRight => "front-right",
            BodyZone::Left => "left",
            BodyZone::Right => "right",
            BodyZone::RearLeft => "rear-left",
            BodyZone::Rear => "rear",
            BodyZone::RearRight => "rear-right",
            BodyZone::Roof => "roof",
            BodyZone::Unknown => "unknown",
        }
    }

    pub(crate) fn from_label(value: &str) -> Option<Self> {
        Some(match value {
            "front-left" => Self::FrontLeft,
            "front" => Self::Front,
            "front-right" => Self::FrontRight,
            "left" => Self::Left,
            "right" => Self::Right,
            "rear-left" => Self::RearLeft,
            "rear" => Self::Rear,
            "rear-right" => Self::RearRight,
            "roof" => Self::Roof,
            "unknown" => Self::Unknown,
            _ => return None,
        })
    }
}

/// Vehicle part named by the upstream detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehiclePart {
    Bumper,
    Door,
    Fender,
    Hood,
    QuarterPanel,
    Headlight,
    Taillight,
    Grille,
    Mirror,
    Windshield,
    Wheel,
    Trunk,
    Roof,
    Unknown,
}

impl VehiclePart {
    pub const fn label(self) -> &'static str {
        match self {
            VehiclePart::Bumper => "bumper",
            VehiclePart::Door => "door",
            VehiclePart::Fender => "fender",
            VehiclePart::Hood => "hood",
            VehiclePart::QuarterPanel => "quarter-panel",
            VehiclePart::Headlight => "headlight",
            VehiclePart::Taillight => "taillight",
            VehiclePart::Grille => "grille",
            VehiclePart::Mirror => "mirror",
            VehiclePart::Windshield => "windshield",
            VehiclePart::Wheel => "wheel",
            VehiclePart::Trunk => "trunk",
            VehiclePart::Roof => "roof",
            VehiclePart::Unknown => "unknown",
        }
    }

    pub(crate) fn from_label(value: &str) -> Option<Self> {
        Some(match value {
            "bumper" => Self::Bumper,
            "door" => Self::Door,
            "fender" => Self::Fender,
            "hood" => Self::Hood,
            "quarter-panel" => Self::QuarterPanel,
            "headlight" => Self::Headlight,
            "taillight" => Self::Taillight,
            "grille" => Self::Grille,
            "mirror" => Self::Mirror,
            "windshield" => Self::Windshield,
            "wheel" => Self::Wheel,
            "trunk" => Self::Trunk,
            "roof" => Self::Roof,
            "unknown" => Self::Unknown,
            _ => return None,
        })
    }
}

/// Category of visible damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DamageType {
    Dent,
    Scratch,
    Crack,
    PaintChips,
    Broken,
    Bent,
    Missing,
    GlassCrack,
    Unknown,
}

impl DamageType {
    pub const fn label(self) -> &'static str {
        match self {
            DamageType::Dent => "dent",
            DamageType::Scratch => "scratch",
            DamageType::Crack => "crack",
            DamageType::PaintChips => "paint-chips",
            DamageType::Broken => "broken",
            DamageType::Bent => "bent",
            DamageType::Missing => "missing",
            DamageType::GlassCrack => "glass-crack",
            DamageType::Unknown => "unknown",
        }
    }

    pub(crate) fn from_label(value: &str) -> Option<Self> {
        Some(match value {
            "dent" => Self::Dent,
            "scratch" => Self::Scratch,
            "crack" => Self::Crack,
            "paint-chips" => Self::PaintChips,
            "broken" => Self::Broken,
            "bent" => Self::Bent,
            "missing" => Self::Missing,
            "glass-crack" => Self::GlassCrack,
            "unknown" => Self::Unknown,
            _ => return None,
        })
    }
}

/// Normalized image-space geometry for a damage record, relative to the unit
/// square. A record carries at most one representation; the polygon form wins
/// when the source offers both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Box { x: f64, y: f64, w: f64, h: f64 },
    Polygon { points: Vec<[f64; 2]> },
}

/// One canonical, fully validated damage observation.
///
/// Constructed exactly once by the normalizer; every field is guaranteed in
/// range, so downstream stages never re-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageRecord {
    pub zone: BodyZone,
    pub part: VehiclePart,
    pub damage_type: DamageType,
    pub severity: u8,
    pub confidence: f64,
    pub est_labor_hours: f64,
    pub needs_paint: bool,
    pub likely_parts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

impl DamageRecord {
    /// One-line description used by the damage summary.
    pub fn summary(&self) -> String {
        format!(
            "{} {} — {}, sev {}",
            self.zone.label(),
            self.part.label(),
            self.damage_type.label(),
            self.severity
        )
    }
}

/// Heuristic cost band produced by the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairEstimate {
    pub currency: String,
    pub cost_low: u32,
    pub cost_high: u32,
    pub assumptions: Vec<String>,
}

/// Three-way routing outcome, each label carrying its own justification list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "label", rename_all = "SCREAMING-KEBAB-CASE")]
pub enum RoutingDecision {
    AutoApprove { reasons: Vec<String> },
    Investigate { reasons: Vec<String> },
    Specialist { reasons: Vec<String> },
}

impl RoutingDecision {
    pub const fn label(&self) -> &'static str {
        match self {
            RoutingDecision::AutoApprove { .. } => "AUTO-APPROVE",
            RoutingDecision::Investigate { .. } => "INVESTIGATE",
            RoutingDecision::Specialist { .. } => "SPECIALIST",
        }
    }

    pub fn reasons(&self) -> &[String] {
        match self {
            RoutingDecision::AutoApprove { reasons }
            | RoutingDecision::Investigate { reasons }
            | RoutingDecision::Specialist { reasons } => reasons,
        }
    }
}

/// Full triage output for one claim photo, consumed by the HTTP and CLI shells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimAssessment {
    pub records: Vec<DamageRecord>,
    pub estimate: RepairEstimate,
    pub decision: RoutingDecision,
    pub aggregate_confidence: f64,
    pub max_severity: u8,
    pub damage_summary: String,
}
