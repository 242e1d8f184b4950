//! Consultation API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Cross-origin requests are allowed from anywhere — the API carries no
//! credentials and serves browser front-ends on other origins.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::service::SessionService;

/// Build the consultation API router.
pub fn consultation_api_router(service: Arc<SessionService>) -> Router {
    let ctx = ApiContext::new(service);

    Router::new()
        .route("/", get(endpoints::root))
        .route("/specializations", get(endpoints::specializations))
        .route("/symptoms/:specialization", get(endpoints::symptoms))
        .route("/register", post(endpoints::register))
        .route("/consult", post(endpoints::consult))
        .route("/patient/:id/history", get(endpoints::history))
        .route("/patient/:id/export", get(endpoints::export))
        .route("/patient/:id/clear-history", delete(endpoints::clear_history))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::providers::ProviderChain;
    use crate::store::ConsultationStore;

    fn test_router() -> Router {
        let service = Arc::new(SessionService::new(
            Arc::new(ConsultationStore::new()),
            ProviderChain::template_only(),
        ));
        consultation_api_router(service)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn register_body() -> serde_json::Value {
        serde_json::json!({
            "name": "Jane Doe",
            "age": 30,
            "gender": "Female",
            "phone": "555-0100"
        })
    }

    /// Register Jane Doe on the given router and return her patient id.
    async fn register_jane(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/register", register_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        json["patient_id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn root_reports_active() {
        let app = test_router();
        let response = app.oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "active");
    }

    #[tokio::test]
    async fn specializations_lists_catalog_in_order() {
        let app = test_router();
        let response = app.oneshot(get_request("/specializations")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let labels: Vec<_> = json["specializations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Dermatologist",
                "Gynecologist",
                "Cardiologist",
                "Neurologist",
                "Orthopedist",
            ],
        );
    }

    #[tokio::test]
    async fn symptoms_returns_list_for_known_specialization() {
        let app = test_router();
        let response = app.oneshot(get_request("/symptoms/Cardiologist")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        let symptoms = json["symptoms"].as_array().unwrap();
        assert!(!symptoms.is_empty());
        assert!(symptoms.iter().any(|s| s == "Chest pain"));
    }

    #[tokio::test]
    async fn symptoms_unknown_specialization_returns_404() {
        let app = test_router();
        let response = app.oneshot(get_request("/symptoms/Podiatrist")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert!(json["error"]["message"].as_str().unwrap().contains("Podiatrist"));
    }

    #[tokio::test]
    async fn register_returns_patient_id_and_welcome() {
        let app = test_router();
        let response = app
            .oneshot(json_request("POST", "/register", register_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["status"], "success");
        assert!(!json["patient_id"].as_str().unwrap().is_empty());
        assert!(json["message"].as_str().unwrap().contains("Welcome, Jane Doe!"));
    }

    #[tokio::test]
    async fn register_invalid_age_returns_400() {
        for age in [0, -5, 151] {
            let app = test_router();
            let mut body = register_body();
            body["age"] = serde_json::json!(age);

            let response = app
                .oneshot(json_request("POST", "/register", body))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "age {age}");

            let json = response_json(response).await;
            assert_eq!(json["error"]["code"], "VALIDATION");
            assert!(json["error"]["message"].as_str().unwrap().contains("between 1 and 150"));
        }
    }

    #[tokio::test]
    async fn register_whitespace_name_returns_400() {
        let app = test_router();
        let mut body = register_body();
        body["name"] = serde_json::json!("   ");

        let response = app
            .oneshot(json_request("POST", "/register", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn consult_uses_template_fallback_when_unconfigured() {
        let app = test_router();
        let patient_id = register_jane(&app).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/consult",
                serde_json::json!({
                    "patient_id": patient_id,
                    "specialization": "Cardiologist",
                    "selected_symptoms": ["Chest pain"],
                    "message": "I have chest pain"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["provider_used"], "template-fallback");
        let text = json["doctor_response"].as_str().unwrap();
        assert!(text.contains("seek immediate medical attention"));
        assert!(text.contains("does not replace an in-person examination"));
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn consult_unknown_patient_returns_404() {
        let app = test_router();
        let response = app
            .oneshot(json_request(
                "POST",
                "/consult",
                serde_json::json!({
                    "patient_id": uuid::Uuid::new_v4(),
                    "specialization": "Cardiologist",
                    "selected_symptoms": [],
                    "message": "hello"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn consult_blank_message_returns_400() {
        let app = test_router();
        let patient_id = register_jane(&app).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/consult",
                serde_json::json!({
                    "patient_id": patient_id,
                    "specialization": "Cardiologist",
                    "selected_symptoms": [],
                    "message": "   "
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION");
    }

    #[tokio::test]
    async fn history_unknown_patient_returns_404() {
        let app = test_router();
        let uri = format!("/patient/{}/history", uuid::Uuid::new_v4());
        let response = app.oneshot(get_request(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn export_empty_log_returns_sentinel() {
        let app = test_router();
        let patient_id = register_jane(&app).await;

        let response = app
            .oneshot(get_request(&format!("/patient/{patient_id}/export")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["report"], "No consultation data to export");
    }

    #[tokio::test]
    async fn full_consultation_flow_over_the_router() {
        let app = test_router();
        let patient_id = register_jane(&app).await;

        // Two turns
        for message in ["I have chest pain", "It happens when I climb stairs"] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/consult",
                    serde_json::json!({
                        "patient_id": patient_id,
                        "specialization": "Cardiologist",
                        "selected_symptoms": ["Chest pain"],
                        "message": message
                    }),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        // History holds both turns in order
        let response = app
            .clone()
            .oneshot(get_request(&format!("/patient/{patient_id}/history")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["patient"]["name"], "Jane Doe");
        let consultations = json["consultations"].as_array().unwrap();
        assert_eq!(consultations.len(), 2);
        assert_eq!(consultations[0]["patient_message"], "I have chest pain");
        assert_eq!(consultations[1]["patient_message"], "It happens when I climb stairs");

        // Export renders both turns
        let response = app
            .clone()
            .oneshot(get_request(&format!("/patient/{patient_id}/export")))
            .await
            .unwrap();
        let json = response_json(response).await;
        let report = json["report"].as_str().unwrap();
        assert!(report.contains("CONSULTATION #2"));
        assert!(report.contains("Total Consultations:    2"));

        // Clear, twice — both succeed
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("DELETE")
                        .uri(format!("/patient/{patient_id}/clear-history"))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        // History is empty but the patient still exists
        let response = app
            .oneshot(get_request(&format!("/patient/{patient_id}/history")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert!(json["consultations"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_history_unknown_patient_returns_404() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/patient/{}/clear-history", uuid::Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = test_router();
        let response = app.oneshot(get_request("/nonexistent")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
