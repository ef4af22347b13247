use posts_gateway::{remote_client, AppState, GatewayConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = GatewayConfig::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let log = tracing::dispatcher::get_default(|dispatch| dispatch.clone());
    let state = AppState::new(remote_client(&config, log));

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!(
        address = %config.bind_address,
        remote = %config.posts_base_url,
        "posts gateway listening"
    );
    posts_gateway::run(listener, state).await?;
    Ok(())
}
