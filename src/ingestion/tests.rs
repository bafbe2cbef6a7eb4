//! Ingestion Module Tests
//!
//! Runs the cache/source resolution against temporary directories.

#[cfg(test)]
mod tests {
    use crate::ingestion::loader::{copy_source, load_documentation};
    use crate::ingestion::types::DocumentOrigin;
    use crate::search::store::DocumentStore;
    use tempfile::TempDir;

    const MANUAL: &str = "# Shapes\nx: {shape: oval}\n";

    #[tokio::test]
    async fn test_cache_is_preferred() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let cache = dir.path().join("documentation.txt");
        std::fs::write(&source, "# Source\nfrom source\n").unwrap();
        std::fs::write(&cache, MANUAL).unwrap();

        let loaded = load_documentation(&source, &cache).await.unwrap();

        assert_eq!(loaded.text, MANUAL);
        assert_eq!(loaded.origin, DocumentOrigin::Cache(cache));
    }

    #[tokio::test]
    async fn test_source_is_copied_into_cache() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let cache = dir.path().join("documentation.txt");
        std::fs::write(&source, MANUAL).unwrap();

        let loaded = load_documentation(&source, &cache).await.unwrap();

        assert_eq!(loaded.text, MANUAL);
        assert_eq!(loaded.origin, DocumentOrigin::Source(source));
        assert_eq!(std::fs::read_to_string(&cache).unwrap(), MANUAL);
    }

    #[tokio::test]
    async fn test_empty_cache_falls_back_to_source() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let cache = dir.path().join("documentation.txt");
        std::fs::write(&source, MANUAL).unwrap();
        std::fs::write(&cache, "").unwrap();

        let loaded = load_documentation(&source, &cache).await.unwrap();

        assert!(matches!(loaded.origin, DocumentOrigin::Source(_)));
    }

    #[tokio::test]
    async fn test_unwritable_cache_still_loads_source() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let cache = dir.path().join("missing-dir").join("documentation.txt");
        std::fs::write(&source, MANUAL).unwrap();

        let loaded = load_documentation(&source, &cache).await.unwrap();

        assert_eq!(loaded.text, MANUAL);
        assert!(!cache.exists());
    }

    #[tokio::test]
    async fn test_missing_files_leave_store_unavailable() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("nope.txt");
        let cache = dir.path().join("documentation.txt");

        let loaded = load_documentation(&source, &cache).await;
        assert!(loaded.is_none());

        let store = DocumentStore::new();
        if let Some(loaded) = loaded {
            store.load_document(loaded.text);
        }
        assert!(!store.is_available());
    }

    // ============================================================
    // SETUP COPY
    // ============================================================

    #[tokio::test]
    async fn test_copy_source() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("source.txt");
        let cache = dir.path().join("documentation.txt");
        std::fs::write(&source, MANUAL).unwrap();

        let copied = copy_source(&source, &cache).await.unwrap();

        assert_eq!(copied, MANUAL.len() as u64);
        assert_eq!(std::fs::read_to_string(&cache).unwrap(), MANUAL);
    }

    #[tokio::test]
    async fn test_copy_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("nope.txt");
        let cache = dir.path().join("documentation.txt");

        let err = copy_source(&source, &cache).await.unwrap_err();

        assert!(err.to_string().contains("Source file not found"));
        assert!(!cache.exists());
    }
}
