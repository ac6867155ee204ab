//! Integration scenarios for the damage triage pipeline.
//!
//! Everything here goes through the public facade (normalizer, engine,
//! service, router) so the normalization, estimation, and routing contracts
//! are validated without reaching into private modules.

mod common {
    use serde_json::{json, Value};
    use std::sync::Arc;

    use adjuster_ai::workflows::claims::{
        claims_router, AssessmentRequest, ClaimTriageService, TriageConfig,
    };

    pub(super) fn triage_config() -> TriageConfig {
        TriageConfig::default()
    }

    pub(super) fn service() -> ClaimTriageService {
        ClaimTriageService::new(triage_config())
    }

    pub(super) fn router() -> axum::Router {
        claims_router(Arc::new(service()))
    }

    pub(super) fn observation(zone: &str, part: &str, severity: u8, confidence: f64) -> Value {
        json!({
            "zone": zone,
            "part": part,
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
}

mod normalization {
    use super::common::*;
    use adjuster_ai::workflows::claims::{normalize_observations, BodyZone, Geometry};
    use serde_json::json;

    #[test]
    fn adversarial_input_yields_one_valid_record_per_element() {
        let observations = vec![
            json!("garbage"),
            json!({"zone": "front-left", "severity": 2.0, "confidence": 0.9}),
            json!({"severity": -3, "confidence": 4.2, "likely_parts": [7]}),
        ];

        let records = normalize_observations(&observations);
        assert_eq!(records.len(), 3);

        for record in &records {
            assert!((1..=5).contains(&record.severity));
            assert!((0.0..=1.0).contains(&record.confidence));
            assert!(record.est_labor_hours >= 0.0);
        }

        assert_eq!(records[1].zone, BodyZone::FrontLeft);
        assert_eq!(records[2].severity, 2);
        assert_eq!(records[2].likely_parts, vec!["7"]);
    }

    #[test]
    fn geometry_survives_only_when_valid() {
        let records = normalize_observations(&[
            json!({"bbox_rel": [0.1, 0.2, 0.3, 1.5]}),
            json!({
                "bbox_rel": [0.1, 0.2, 0.3, 0.4],
                "polygon_rel": [[0.1, 0.1], [0.9, 0.1], [0.5, 0.8]],
            }),
        ]);

        assert!(records[0].geometry.is_none());
        assert!(matches!(
            records[1].geometry,
            Some(Geometry::Polygon { .. })
        ));
    }
}

mod estimation {
    use super::common::*;
    use adjuster_ai::workflows::claims::{normalize_observations, TriageEngine};
    use serde_json::json;

    #[test]
    fn door_labor_fallback_flows_into_the_estimate() {
        let records = normalize_observations(&[json!({
            "zone": "left",
            "part": "door",
            "damage_type": "dent",
            "severity": 4,
            "confidence": 0.8,
        })]);
        assert!((records[0].est_labor_hours - 2.1).abs() < 1e-9);

        let engine = TriageEngine::new(triage_config());
        let estimate = engine.estimate(&records);
        assert!(estimate.cost_low <= estimate.cost_high);
        assert!(estimate.cost_high > 0);
    }

    #[test]
    fn shared_zone_paint_is_charged_once() {
        let engine = TriageEngine::new(triage_config());

        let single = normalize_observations(&[observation("front-left", "bumper", 2, 0.8)]);
        let doubled = normalize_observations(&[
            observation("front-left", "bumper", 2, 0.8),
            observation("front-left", "fender", 2, 0.8),
        ]);

        // both findings paint the same zone, so only labor should grow
        let single_estimate = engine.estimate(&single);
        let doubled_estimate = engine.estimate(&doubled);
        let labor = (doubled[0].est_labor_hours + doubled[1].est_labor_hours)
            * engine.config().labor_rate;
        let expected_high = ((labor + engine.config().paint_cost) * 1.15).round() as u32;

        assert_eq!(doubled_estimate.cost_high, expected_high);
        assert!(doubled_estimate.cost_high > single_estimate.cost_high);
    }
}

mod triage {
    use super::common::*;
    use adjuster_ai::workflows::claims::RoutingDecision;
    use serde_json::json;

    #[test]
    fn clean_low_cost_claims_auto_approve() {
        let assessment = service().assess(&request(vec![observation(
            "front-left",
            "bumper",
            1,
            0.95,
        )]));

        assert_eq!(assessment.decision.label(), "AUTO-APPROVE");
        assert_eq!(assessment.decision.reasons().len(), 3);
    }

    #[test]
    fn structural_damage_escalates_to_specialist() {
        let assessment = service().assess(&request(vec![json!({
            "zone": "rear-right",
            "part": "quarter-panel",
            "damage_type": "broken",
            "severity": 5,
            "confidence": 0.85,
        })]));

        match assessment.decision {
            RoutingDecision::Specialist { ref reasons } => {
                assert_eq!(reasons.len(), 1);
                assert!(reasons[0].contains("severity 5"));
            }
            ref other => panic!("expected specialist, got {other:?}"),
        }
    }

    #[test]
    fn empty_findings_investigate_under_defaults() {
        let assessment = service().assess(&request(Vec::new()));

        assert_eq!(assessment.max_severity, 0);
        assert_eq!(assessment.estimate.cost_high, 0);
        assert_eq!(assessment.decision.label(), "INVESTIGATE");
        assert_eq!(assessment.decision.reasons().len(), 3);
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let request = request(vec![
            observation("front", "hood", 3, 0.7),
            observation("roof", "roof", 2, 0.6),
        ]);

        let service = service();
        let first = serde_json::to_value(service.assess(&request)).expect("serializes");
        let second = serde_json::to_value(service.assess(&request)).expect("serializes");
        assert_eq!(first, second);
    }
}

mod http {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[tokio::test]
    async fn post_assessments_returns_decision_and_estimate() {
        let body = json!({
            "observations": [
                {"zone": "front", "part": "hood", "damage_type": "dent", "severity": 2, "confidence": 0.9},
            ],
            "narrative": "minor hood dent",
        });

        let response = router()
            .oneshot(
                Request::post("/api/v1/claims/assessments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(serde_json::to_vec(&body).expect("serialize")))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&bytes).expect("json");

        assert!(payload.pointer("/decision/label").is_some());
        assert!(payload.pointer("/estimate/cost_high").is_some());
        assert_eq!(
            payload
                .get("damage_summary")
                .and_then(Value::as_str),
            Some("front hood — dent, sev 2")
        );
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let response = router()
            .oneshot(
                Request::post("/api/v1/claims/assessments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"observations\": ["))
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert!(response.status().is_client_error());
    }
}

mod intake {
    use adjuster_ai::workflows::claims::{VisionExportError, VisionExportImporter};
    use serde_json::json;

    #[test]
    fn export_objects_carry_narrative_into_requests() {
        let request = VisionExportImporter::from_value(json!({
            "observations": [{"zone": "rear"}],
            "narrative": "rear-end collision",
        }))
        .expect("import succeeds");

        assert_eq!(request.observations.len(), 1);
        assert_eq!(request.narrative.as_deref(), Some("rear-end collision"));
    }

    #[test]
    fn non_sequence_exports_are_structural_errors() {
        let error = VisionExportImporter::from_value(json!(12)).expect_err("shape error");
        assert!(matches!(error, VisionExportError::Shape(_)));
    }
}
