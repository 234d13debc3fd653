use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tutor_llm::ChatClient;
use tutor_server::{router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    if config.groq_api_key.is_none() {
        warn!("GROQ_API_KEY is not set; step annotations will use the fallback text");
    }

    let state = Arc::new(AppState {
        client: ChatClient::new(config.groq_api_key.clone()),
    });

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, "tutorboard backend listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
