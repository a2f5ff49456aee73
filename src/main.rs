use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use study_coach::api::app;
use study_coach::config::AppConfig;
use study_coach::gemini::GeminiHttpClient;
use study_coach::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "study_coach=debug,tower_http=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; model calls will fail until it is configured");
    } else {
        info!("using Gemini model {}", config.gemini.model);
    }

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let gateway = Arc::new(GeminiHttpClient::new(&config.gemini)?);
    let state = AppState {
        gateway,
        upload_dir: config.upload_dir.clone(),
    };

    let router = app(state, &config);

    let addr = SocketAddr::new(config.host, config.port);
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
