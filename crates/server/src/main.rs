//! Catalog Server - HTTP REST API over the in-memory product catalog
//!
//! Reads `PORT` and `API_KEY` (and the other settings in [`ServerConfig`])
//! from the environment or a `.env` file.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
