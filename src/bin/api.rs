use techgadget_support::{api::start_server, config::Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables
    let settings = Settings::from_env()?;

    info!("🚀 TechGadget Support - API Server");
    info!("📍 Port: {}", settings.port);

    start_server(&settings).await?;

    Ok(())
}
