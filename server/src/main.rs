use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use todo_server::{Database, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ServerConfig::from_env()?;
    let db = Database::connect(&config.database).await?;

    let listener = TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, database = %config.database, cors = config.cors, "Listening");

    todo_server::run(listener, db, config.cors).await?;
    Ok(())
}
