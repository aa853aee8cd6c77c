//! ---
//! aqs_section: "02-impact-engine"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Optional REST surface over the impact calculator."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
use serde::{Deserialize, Serialize};

use crate::{model::BaselineReading, selection::SelectionSet};

#[cfg(feature = "rest-api")]
pub use rest::router;

#[cfg(feature = "rest-api")]
mod rest {
    use axum::{
        http::StatusCode,
        routing::{get, post},
        Json, Router,
    };

    use crate::{
        calculator::ImpactCalculator, catalog::Intervention, catalog::InterventionCatalog,
        errors::ValidationError, result::SimulationResult,
    };

    use super::SimulationRequest;

    pub fn router() -> Router {
        Router::new()
            .route("/api/simulate", post(simulate))
            .route("/api/interventions", get(interventions))
    }

    async fn simulate(
        Json(payload): Json<SimulationRequest>,
    ) -> Result<Json<SimulationResult>, (StatusCode, String)> {
        ImpactCalculator::default()
            .compute_checked(&payload.baseline, &payload.selections)
            .map(Json)
            .map_err(map_err)
    }

    async fn interventions() -> Json<Vec<Intervention>> {
        Json(InterventionCatalog::standard().entries().cloned().collect())
    }

    fn map_err(err: ValidationError) -> (StatusCode, String) {
        (StatusCode::BAD_REQUEST, err.to_string())
    }
}

/// Body of a simulation request: a baseline plus the interventions to apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub baseline: BaselineReading,
    #[serde(default)]
    pub selections: SelectionSet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InterventionKey;

    #[test]
    fn request_defaults_to_empty_selection() {
        let request: SimulationRequest = serde_json::from_str(
            r#"{"baseline":{"zoneId":"abids-road","aqi":280,"populationExposed":50000}}"#,
        )
        .unwrap();
        assert!(request.selections.is_empty());

        let request: SimulationRequest = serde_json::from_str(
            r#"{"baseline":{"zoneId":"abids-road","aqi":280},"selections":{"banOpenBurning":true}}"#,
        )
        .unwrap();
        assert!(request.selections.is_selected(InterventionKey::BanOpenBurning));
    }
}

#[cfg(all(test, feature = "rest-api"))]
mod router_tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::router;

    async fn call(request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn simulate_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/simulate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn simulate_returns_projection() {
        let (status, body) = call(simulate_request(json!({
            "baseline": {"zoneId": "abids-road", "aqi": 280, "populationExposed": 50000},
            "selections": {"banOpenBurning": true}
        })))
        .await;
        assert_eq!(status, StatusCode::OK);

        let result: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(result["zoneId"], "abids-road");
        assert!((result["baseline"]["newAqi"].as_f64().unwrap() - 224.0).abs() < 1e-9);
        assert!((result["results"]["aqiReduction"].as_f64().unwrap() - 20.0).abs() < 1e-9);
        assert_eq!(result["results"]["populationBenefited"], 10_000);
    }

    #[tokio::test]
    async fn simulate_rejects_negative_aqi() {
        let (status, body) = call(simulate_request(json!({
            "baseline": {"zoneId": "abids-road", "aqi": -5}
        })))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8(body).unwrap().contains("abids-road"));
    }

    #[tokio::test]
    async fn interventions_lists_catalog() {
        let request = Request::builder()
            .uri("/api/interventions")
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::OK);

        let entries: Vec<Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(entries.len(), 18);
        assert_eq!(entries[0]["key"], "dedicatedBusLanes");
        assert_eq!(entries[0]["reductionFraction"], 0.12);
        assert_eq!(entries[0]["impact"]["minPercent"], 10);
    }
}
