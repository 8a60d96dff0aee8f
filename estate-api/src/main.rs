use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = estate_api::config::load();
    let ax = estate_api::build(config).await?;
    let addr = ax.address();

    tracing::info!("[estate-api] listening on http://{addr}");

    ax.listen(addr).await?;

    Ok(())
}
