use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docsift::application::services::ParseService;
use docsift::infrastructure::Capabilities;
use docsift::infrastructure::observability::{TracingConfig, init_tracing};
use docsift::infrastructure::storage::TempStaging;
use docsift::infrastructure::text_processing::ExtractorFactory;
use docsift::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let capabilities = Capabilities::detect(&settings.extraction);
    let registry = Arc::new(ExtractorFactory::create(
        &settings.extraction,
        &capabilities,
    ));
    let staging = TempStaging::new(settings.upload.staging_dir())?;
    tracing::info!(dir = %staging.dir().display(), "Upload staging ready");

    let state = AppState {
        parse_service: Arc::new(ParseService::new(registry, staging)),
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
