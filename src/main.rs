use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod model;
mod service;

use model::Config;
use service::assessment::GeminiNarrativeGenerator;
use service::{AssessmentService, LlmClient};

const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";

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

    // The credential is fatal when missing and must never be logged
    let api_key = std::env::var(ENV_GEMINI_API_KEY).map_err(|_| {
        std::io::Error::other(format!(
            "{ENV_GEMINI_API_KEY} environment variable is not set"
        ))
    })?;

    let llm_client = LlmClient::new(&api_key).map_err(std::io::Error::other)?;

    tracing::info!(
        model = %config.generation.model,
        timeout_secs = config.generation.timeout_secs,
        "Narrative generator initialized"
    );

    let generator = Arc::new(GeminiNarrativeGenerator::new(
        llm_client,
        config.generation.model.clone(),
    ));
    let assessment_service = web::Data::new(AssessmentService::new(
        generator,
        Duration::from_secs(config.generation.timeout_secs),
    ));
    let generation_config = web::Data::new(config.generation.clone());

    tracing::info!("Starting ShieldCheck assessment server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(assessment_service.clone())
            .app_data(generation_config.clone())
            .configure(api::assessment::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
