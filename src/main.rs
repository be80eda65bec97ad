use anyhow::Context;
use ghost_token::http::{router, AppState};
use ghost_token::key_source::{EnvKeySource, KeySource, ADMIN_KEY_ENV};
use ghost_token::{logging, shutdown, Config};
use std::future::IntoFuture;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_format).context("Failed to initialize logging")?;

    info!("Starting Ghost Token Service v{}", env!("CARGO_PKG_VERSION"));

    let key_source = EnvKeySource::new();
    if key_source.admin_key().is_none() {
        warn!("{ADMIN_KEY_ENV} is not set; token requests will be rejected until it is");
    }

    let app = router(AppState::new(key_source));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Ghost Token Service listening on http://{}", addr);

    let shutdown_timeout = config.shutdown_timeout;
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown::wait_for_signal());

    // Drain deadline counts from the signal, not from startup
    tokio::select! {
        result = server.into_future() => result.context("Server error")?,
        _ = async {
            shutdown::wait_for_signal().await;
            tokio::time::sleep(shutdown_timeout).await;
        } => {
            warn!("Shutdown timeout reached, dropping remaining connections");
        }
    }

    info!("Ghost Token Service stopped");

    Ok(())
}
