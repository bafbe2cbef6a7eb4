use super::types::{DocumentOrigin, LoadedDocumentation};
use anyhow::{Context, Result, bail};
use std::io::ErrorKind;
use std::path::Path;

/// Finds the documentation text to serve.
///
/// The cache copy wins when it exists and is non-empty. Otherwise the source
/// file is read and copied into the cache for the next start; a failed copy
/// is only logged. Returns `None` when neither file yields any text.
pub async fn load_documentation(source: &Path, cache: &Path) -> Option<LoadedDocumentation> {
    match read_non_empty(cache).await {
        Ok(Some(text)) => {
            tracing::info!("Documentation loaded from {}", cache.display());
            return Some(LoadedDocumentation {
                text,
                origin: DocumentOrigin::Cache(cache.to_path_buf()),
            });
        }
        Ok(None) => {
            tracing::info!("No cached documentation at {}", cache.display());
        }
        Err(e) => {
            tracing::warn!("Failed to load documentation file: {:#}", e);
        }
    }

    let text = match read_non_empty(source).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            tracing::error!(
                "Could not find source documentation file at {}",
                source.display()
            );
            return None;
        }
        Err(e) => {
            tracing::error!("Error initializing documentation: {:#}", e);
            return None;
        }
    };

    match tokio::fs::write(cache, &text).await {
        Ok(()) => tracing::info!("Documentation loaded from source file and saved locally"),
        Err(e) => tracing::warn!(
            "Documentation loaded from source file but not saved to {}: {}",
            cache.display(),
            e
        ),
    }

    Some(LoadedDocumentation {
        text,
        origin: DocumentOrigin::Source(source.to_path_buf()),
    })
}

/// Copies the source documentation into the cache path, returning the number
/// of bytes copied.
pub async fn copy_source(source: &Path, cache: &Path) -> Result<u64> {
    if !tokio::fs::try_exists(source).await.unwrap_or(false) {
        bail!("Source file not found at: {}", source.display());
    }

    tokio::fs::copy(source, cache)
        .await
        .with_context(|| format!("copying {} to {}", source.display(), cache.display()))
}

/// Reads a file, treating a missing or empty file as "no text".
async fn read_non_empty(path: &Path) -> Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) if text.is_empty() => Ok(None),
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
    }
}
