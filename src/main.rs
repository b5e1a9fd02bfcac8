use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod model;
mod provider;
mod service;

use model::Config;
use provider::{CompletionProvider, OllamaClient};
use service::AnalysisService;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    tracing::info!(
        base_url = %config.provider.base_url,
        model = %config.provider.model,
        "Using completion provider"
    );

    let provider: Arc<dyn CompletionProvider> = Arc::new(OllamaClient::new(&config.provider));

    let analysis_service = web::Data::new(AnalysisService::new(Arc::clone(&provider)));
    let provider_data = web::Data::new(provider);

    tracing::info!("Starting harassment-intel server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(analysis_service.clone())
            .app_data(provider_data.clone())
            .configure(api::analyze::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
