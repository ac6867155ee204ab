use super::config::TriageConfig;
use crate::workflows::claims::domain::RoutingDecision;

/// Route a claim from its triage signals.
///
/// Precedence: auto-approve (all three bounds must hold) is checked first,
/// then specialist (either trigger suffices), then the investigate fallback.
pub(crate) fn route_claim(
    max_severity: u8,
    confidence: f64,
    cost_high: u32,
    config: &TriageConfig,
) -> RoutingDecision {
    if max_severity <= config.auto_max_severity
        && cost_high <= config.auto_max_cost
        && confidence >= config.auto_min_confidence
    {
        return RoutingDecision::AutoApprove {
            reasons: vec![
                format!(
                    "max severity {max_severity} within auto-approve limit {}",
                    config.auto_max_severity
                ),
                format!(
                    "high estimate ${cost_high} within auto-approve limit ${}",
                    config.auto_max_cost
                ),
                format!(
                    "aggregate confidence {:.0}% meets minimum {:.0}%",
                    confidence * 100.0,
                    config.auto_min_confidence * 100.0
                ),
            ],
        };
    }

    let severe = max_severity >= config.specialist_min_severity;
    let costly = cost_high >= config.specialist_min_cost;
    if severe || costly {
        let mut reasons = Vec::new();
        if severe {
            reasons.push(format!(
                "max severity {max_severity} at or above specialist threshold {}",
                config.specialist_min_severity
            ));
        }
        if costly {
            reasons.push(format!(
                "high estimate ${cost_high} at or above specialist threshold ${}",
                config.specialist_min_cost
            ));
        }
        return RoutingDecision::Specialist { reasons };
    }

    RoutingDecision::Investigate {
        reasons: vec![
            format!("aggregate confidence {:.0}%", confidence * 100.0),
            format!("max severity {max_severity}"),
            format!("high estimate ${cost_high}"),
        ],
    }
}
