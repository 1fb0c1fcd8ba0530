// src/main.rs

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use adgenius::api::create_router;
use adgenius::config::{AdConfig, CONFIG};
use adgenius::state::AppState;

#[derive(Parser)]
#[command(name = "adgenius")]
#[command(about = "Agentic ad-creative backend", version)]
struct Args {
    /// Bind host (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(long, short = 'p')]
    port: Option<u16>,

    /// Force demo mode: canned copy and stock images
    #[arg(long, conflicts_with = "live")]
    demo: bool,

    /// Use the generative provider (needs OPENAI_API_KEY)
    #[arg(long)]
    live: bool,
}

impl Args {
    fn apply(self, mut config: AdConfig) -> AdConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.demo {
            config.demo_mode = true;
        } else if self.live {
            config.demo_mode = false;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // RUST_LOG wins; LOG_LEVEL is the friendlier knob
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&CONFIG.log_level));
    fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = args.apply(CONFIG.clone());

    info!("Starting AdGenius backend on http://{}", config.bind_address());
    info!("Mode: {}", config.mode_label());
    info!(
        "OpenAI key: {}",
        if config.openai_api_key.is_empty() { "NOT SET (using demo mode)" } else { "SET" }
    );

    let bind_address = config.bind_address();
    let state = AppState::from_config(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
