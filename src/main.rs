use d2_docs_server::config::ServerConfig;
use d2_docs_server::ingestion::loader::load_documentation;
use d2_docs_server::mcp::handlers::build_router;
use d2_docs_server::mcp::stdio::serve_stdio;
use d2_docs_server::search::store::DocumentStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays reserved for the stdio protocol.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env_and_args()?;

    // 1. Documentation index, built before any transport accepts requests:
    let store = Arc::new(DocumentStore::new());
    match load_documentation(&config.source_path, &config.cache_path).await {
        Some(loaded) => {
            tracing::debug!("Documentation origin: {:?}", loaded.origin);
            store.load_document(loaded.text);
        }
        None => tracing::warn!("Serving without documentation; queries will report it unavailable"),
    }

    // 2. Stdio transport:
    if config.stdio {
        tracing::info!("Starting in stdio mode for MCP protocol");
        serve_stdio(&store).await?;
        return Ok(());
    }

    // 3. HTTP transport:
    let app = build_router(store);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("D2 Diagram Documentation MCP server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
