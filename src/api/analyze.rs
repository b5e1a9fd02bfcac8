//! REST API endpoint for harassment analysis

use actix_web::{HttpResponse, post, web};
use utoipa::OpenApi;

use crate::api::error::ApiError;
use crate::model::{
    AnalyzeRequest, ClassificationResult, LawSection, PunishmentRange, Severity,
};
use crate::service::AnalysisService;

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        AnalyzeRequest,
        ClassificationResult,
        Severity,
        PunishmentRange,
        LawSection,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus,
        crate::api::health::DependencyHealth,
    )),
    tags(
        (name = "analysis", description = "Harassment analysis"),
        (name = "health", description = "Health probes")
    )
)]
pub struct ApiDoc;

/// Analyze free text for harassment under NSW law
///
/// Always returns a well-formed classification: provider failures degrade
/// to the deterministic keyword fallback inside the service.
#[utoipa::path(
    post,
    path = "/v1/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Analysis completed", body = ClassificationResult),
        (status = 400, description = "Missing or empty text input")
    ),
    tag = "analysis"
)]
#[post("/v1/analyze")]
pub async fn analyze(
    service: web::Data<AnalysisService>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    if body.text.is_empty() {
        return Err(ApiError::BadRequest("Text input is required".to_string()));
    }

    let result = service.analyze(&body.text).await;

    Ok(HttpResponse::Ok().json(result))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze);
}
