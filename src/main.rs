use tokio::net::TcpListener;

use simple_search::api::create_router;
use simple_search::config::CONFIG;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let app = create_router();

    let listener = TcpListener::bind(CONFIG.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
