//! Health check endpoints for Kubernetes liveness and readiness probes

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::provider::CompletionProvider;

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessStatus {
    pub status: String,
    pub version: String,
    pub dependencies: DependencyHealth,
}

#[derive(Serialize, ToSchema)]
pub struct DependencyHealth {
    pub provider: String,
}

/// Liveness probe endpoint
///
/// Always returns 200 OK if the service is running.
/// Used by Kubernetes to determine if the pod should be restarted.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health/live")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe endpoint
///
/// Always reports ready: the completion provider is a non-critical
/// dependency because the keyword fallback keeps analysis available. Its
/// state is reported informationally.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessStatus)
    ),
    tag = "health"
)]
#[get("/health/ready")]
pub async fn readiness(provider: web::Data<Arc<dyn CompletionProvider>>) -> impl Responder {
    let provider_status = match provider.ping().await {
        Ok(()) => {
            tracing::debug!("Provider health check passed");
            "healthy"
        }
        Err(e) => {
            tracing::warn!(error = %e, "Provider health check failed, fallback remains available");
            "unavailable"
        }
    };

    HttpResponse::Ok().json(ReadinessStatus {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dependencies: DependencyHealth {
            provider: provider_status.to_string(),
        },
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(liveness).service(readiness);
}

#[cfg(test)]
mod tests {
    use super::*;

    use actix_web::{App, test};
    use async_trait::async_trait;

    use crate::provider::ProviderError;

    struct DownProvider;

    #[async_trait]
    impl CompletionProvider for DownProvider {
        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            Err(ProviderError::MissingCompletion)
        }

        async fn ping(&self) -> Result<(), ProviderError> {
            Err(ProviderError::MissingCompletion)
        }

        fn model(&self) -> &str {
            "down"
        }
    }

    #[actix_web::test]
    async fn readiness_stays_ready_when_provider_is_down() {
        let provider: Arc<dyn CompletionProvider> = Arc::new(DownProvider);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(provider))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/ready").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ready");
        assert_eq!(body["dependencies"]["provider"], "unavailable");
    }

    #[actix_web::test]
    async fn liveness_reports_ok() {
        let provider: Arc<dyn CompletionProvider> = Arc::new(DownProvider);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(provider))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health/live").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
    }
}
