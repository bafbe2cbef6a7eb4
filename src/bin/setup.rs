//! One-time setup: copies the D2 manual into the server's local cache file.

use d2_docs_server::config::ServerConfig;
use d2_docs_server::ingestion::loader::copy_source;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env_and_args()?;

    tracing::info!("Setting up D2 Diagram Assistant MCP server...");

    let bytes = copy_source(&config.source_path, &config.cache_path).await?;
    tracing::info!(
        "Documentation file successfully copied to: {} ({} bytes)",
        config.cache_path.display(),
        bytes
    );

    tracing::info!("Setup complete! You can now start the server with: d2-docs-server");
    tracing::info!("For stdio mode, use: d2-docs-server --stdio");

    Ok(())
}
