use dotenvy::dotenv;
use geostamp::server::{AppState, ServerConfig, router};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let config = ServerConfig::from_env()?;
    let stamper = config.stamper()?;
    info!(
        offset = ?config.offset,
        jitter = config.apply_jitter,
        radius_m = config.jitter_radius_m,
        "stamper configured"
    );

    let app = router(AppState::new(stamper), config.body_limit_bytes);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
