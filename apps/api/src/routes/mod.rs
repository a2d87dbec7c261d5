pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::employment::handlers as employment;
use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route("/api/v1/resumes/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/resumes/upload",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Employment API
        .route(
            "/api/v1/candidates/:id/status",
            put(employment::handle_status_update),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::ResumeAnalyzer;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::notifications::{LogNotifier, LogPayrollNotifier, PayrollNotifier, ReferralPayout};

    const BOUNDARY: &str = "resume-test-boundary";
    const CANDIDATE_ID: &str = "7d1f0a52-3c4e-4b8a-9f2d-1e6b5c9a0d34";

    struct UnreachablePayroll;

    #[async_trait]
    impl PayrollNotifier for UnreachablePayroll {
        async fn notify_referral(&self, _payout: &ReferralPayout) -> Result<(), AppError> {
            Err(AppError::Notification("payroll mailbox unreachable".to_string()))
        }
    }

    fn app_with(config: Config) -> Router {
        build_router(AppState {
            config,
            analyzer: ResumeAnalyzer::default(),
            notifier: Arc::new(LogNotifier),
            payroll: Arc::new(LogPayrollNotifier),
        })
    }

    fn app() -> Router {
        app_with(Config::default())
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn multipart_request(field: &str, content_type: &str, payload: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"cv.pdf\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {payload}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn status_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("PUT")
            .uri(format!("/api/v1/candidates/{CANDIDATE_ID}/status"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn referred_candidate(referral_paid: bool) -> Value {
        json!({
            "full_name": "Jane Doe",
            "email": "jane@example.com",
            "status": "probation",
            "referred_by": "sam@example.com",
            "referral_paid": referral_paid
        })
    }

    fn analyze_request(text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "text": text }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_analyze_empty_text_scores_zero() {
        let response = app().oneshot(analyze_request("")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["score"], 0);
        assert_eq!(body["skills"], json!([]));
        assert_eq!(body["shortlisted"], false);
        assert_eq!(body["threshold"], 70);
    }

    #[tokio::test]
    async fn test_analyze_reports_breakdown_and_shortlist() {
        let text = "Project\n\
                    React, Python, Docker, Kubernetes, Redis, GraphQL, Jenkins, Agile\n\
                    10 years of experience\n\
                    PhD\n";
        let response = app_with(Config {
            resume_score_threshold: 50,
            ..Config::default()
        })
        .oneshot(analyze_request(text))
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["breakdown"]["experience"], 20);
        assert_eq!(body["breakdown"]["education"], 20);
        assert_eq!(body["breakdown"]["education_level"], "doctorate");
        assert_eq!(body["shortlisted"], true);
        assert_eq!(body["score"], body["breakdown"]["total"]);
    }

    #[tokio::test]
    async fn test_upload_without_resume_field_is_rejected() {
        let response = app()
            .oneshot(multipart_request("avatar", "application/pdf", "%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let response = app()
            .oneshot(multipart_request("resume", "text/plain", "hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["message"], "Only PDF files are allowed");
    }

    #[tokio::test]
    async fn test_upload_unparseable_pdf_is_rejected() {
        let response = app()
            .oneshot(multipart_request("resume", "application/pdf", "not really a pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "PDF_ERROR");
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_rejected() {
        let config = Config {
            max_upload_bytes: 64,
            ..Config::default()
        };
        let payload = "x".repeat(4096);
        let response = app_with(config)
            .oneshot(multipart_request("resume", "application/pdf", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_upload_empty_resume_fails_pdf_parsing() {
        let response = app()
            .oneshot(multipart_request("resume", "application/pdf", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "PDF_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Failed to parse PDF file. Please ensure it is a valid PDF."
        );
    }

    #[tokio::test]
    async fn test_status_update_to_probation_sets_end_date() {
        let request = status_request(json!({
            "candidate": { "full_name": "Jane Doe", "email": "jane@example.com" },
            "status": "probation",
            "joining_date": "2024-02-15"
        }));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Employee status updated successfully");
        assert_eq!(body["candidate_id"], CANDIDATE_ID);
        assert_eq!(body["candidate"]["status"], "probation");
        assert_eq!(body["candidate"]["joining_date"], "2024-02-15");
        assert_eq!(body["candidate"]["probation_end_date"], "2024-05-15");
        assert_eq!(body["referral_notified"], false);
    }

    #[tokio::test]
    async fn test_status_update_to_permanent_pays_referral() {
        let request = status_request(json!({
            "candidate": referred_candidate(false),
            "status": "permanent",
            "referrer_name": "Sam Lee"
        }));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["candidate"]["status"], "permanent");
        assert_eq!(body["candidate"]["referral_paid"], true);
        assert_eq!(body["referral_notified"], true);
    }

    #[tokio::test]
    async fn test_status_update_skips_paid_referral() {
        let request = status_request(json!({
            "candidate": referred_candidate(true),
            "status": "permanent",
            "referrer_name": "Sam Lee"
        }));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["referral_notified"], false);
    }

    #[tokio::test]
    async fn test_status_update_fails_when_payroll_unreachable() {
        let app = build_router(AppState {
            config: Config::default(),
            analyzer: ResumeAnalyzer::default(),
            notifier: Arc::new(LogNotifier),
            payroll: Arc::new(UnreachablePayroll),
        });
        let request = status_request(json!({
            "candidate": referred_candidate(false),
            "status": "permanent",
            "referrer_name": "Sam Lee"
        }));
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_json(response).await["error"]["code"], "NOTIFICATION_ERROR");
    }
}
