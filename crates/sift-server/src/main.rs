//! Sift HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use sift::batch::BatchOrchestrator;
use sift::cache::ScoreCache;
use sift::comments::CommentFetcher;
use sift::config::Config;
use sift::scoring::HttpScorer;
use sift_server::gateway::{HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
███████╗██╗███████╗████████╗
██╔════╝██║██╔════╝╚══██╔══╝
███████╗██║█████╗     ██║
╚════██║██║██╔══╝     ██║
███████║██║██║        ██║
╚══════╝╚═╝╚═╝        ╚═╝

     SCORE ONCE. SERVE MANY.
                    AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        cache_capacity = config.cache_capacity,
        threshold = config.threshold,
        "Sift starting"
    );

    let cache = Arc::new(ScoreCache::new(config.cache_capacity)?);
    let scorer = HttpScorer::new(
        config.scorer_url.clone(),
        Duration::from_secs(config.scorer_timeout_secs),
    )?;
    let orchestrator = Arc::new(BatchOrchestrator::new(cache, scorer, config.threshold));

    let fetcher = match &config.youtube_api_key {
        Some(key) => Some(Arc::new(CommentFetcher::with_api_url(
            key.clone(),
            config.youtube_api_url.clone(),
        ))),
        None => {
            tracing::warn!("No SIFT_YOUTUBE_API_KEY configured, comment endpoints disabled");
            None
        }
    };

    let state = HandlerState::new(orchestrator, fetcher, config.youtube_max_comments);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Sift shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("SIFT_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
