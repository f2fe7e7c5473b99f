//! REST API endpoints for the self-assessment

use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::model::answers::{BusinessContext, QuestionnaireAnswers};
use crate::model::catalog::Question;
use crate::model::report::Report;
use crate::service::AssessmentService;

/// One questionnaire submission
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssessmentRequest {
    pub business_context: BusinessContext,
    pub answers: QuestionnaireAnswers,
}

/// Generate a risk report for one completed questionnaire
///
/// The caller is expected to keep at most one submission in flight per
/// session; on failure the same answers can be resubmitted as-is.
#[utoipa::path(
    post,
    path = "/v1/assessments",
    request_body = AssessmentRequest,
    responses(
        (status = 200, description = "Report generated and validated", body = Report),
        (status = 400, description = "Blank context fields or malformed body"),
        (status = 502, description = "Narrative generation failed, retry is appropriate"),
        (status = 500, description = "Service misconfiguration")
    ),
    tag = "assessments"
)]
#[post("/v1/assessments")]
pub async fn create_assessment(
    service: web::Data<AssessmentService>,
    request: web::Json<AssessmentRequest>,
) -> Result<HttpResponse, ApiError> {
    request.business_context.validate()?;

    let report = service
        .generate_report(&request.business_context, &request.answers)
        .await?;

    Ok(HttpResponse::Ok().json(report))
}

/// List the question catalog
///
/// Serves the same table the scoring engine reads, so the questionnaire a
/// client renders can never diverge from the weights used for scoring.
#[utoipa::path(
    get,
    path = "/v1/questions",
    responses(
        (status = 200, description = "The ten control questions in display order", body = [Question])
    ),
    tag = "assessments"
)]
#[get("/v1/questions")]
pub async fn list_questions() -> impl Responder {
    HttpResponse::Ok().json(Question::catalog())
}

/// OpenAPI documentation for the assessment API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_assessment,
        list_questions,
        crate::api::health::liveness,
        crate::api::health::readiness
    ),
    components(schemas(AssessmentRequest, Report, Question)),
    tags(
        (name = "assessments", description = "Cybersecurity self-assessment"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

/// Configure assessment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_assessment).service(list_questions);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::{App, test};
    use async_trait::async_trait;
    use serde_json::json;

    use crate::service::assessment::contract::sample_report;
    use crate::service::assessment::{GenerationError, NarrativeGenerator};

    struct StubGenerator {
        response: String,
    }

    #[async_trait]
    impl NarrativeGenerator for StubGenerator {
        async fn generate(&self, _payload: &str) -> Result<String, GenerationError> {
            Ok(self.response.clone())
        }
    }

    fn stub_service(response: String) -> web::Data<AssessmentService> {
        web::Data::new(AssessmentService::new(
            Arc::new(StubGenerator { response }),
            Duration::from_secs(5),
        ))
    }

    fn request_body(company_name: &str) -> serde_json::Value {
        let mut answers = json!({});
        for q in Question::catalog() {
            answers[serde_json::to_value(q.id).unwrap().as_str().unwrap()] = json!("yes");
        }
        answers["mfa_email_admin"] = json!("no");
        answers["backups_data"] = json!("no");

        json!({
            "business_context": {
                "company_name": company_name,
                "industry": "Retail",
                "employee_count": "1-10",
                "primary_workstyle": "hybrid"
            },
            "answers": answers
        })
    }

    #[actix_web::test]
    async fn post_assessment_returns_validated_report() {
        let app = test::init_service(
            App::new()
                .app_data(stub_service(sample_report(30, "medium").to_string()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/assessments")
            .set_json(request_body("Acme Bakery"))
            .to_request();
        let report: Report = test::call_and_read_body_json(&app, req).await;

        assert_eq!(report.score.risk_score, 30);
        assert_eq!(report.top_actions.len(), 3);
    }

    #[actix_web::test]
    async fn blank_company_name_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(stub_service(sample_report(30, "medium").to_string()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/assessments")
            .set_json(request_body("  "))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_generator_output_is_bad_gateway() {
        let app = test::init_service(
            App::new()
                .app_data(stub_service("not json at all".to_string()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/v1/assessments")
            .set_json(request_body("Acme Bakery"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn questions_endpoint_lists_the_catalog() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/v1/questions").to_request();
        let questions: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let items = questions.as_array().unwrap();
        assert_eq!(items.len(), 10);
        assert_eq!(items[0]["id"], "mfa_email_admin");
        assert_eq!(items[0]["weight"], 15);
    }
}
