//! Factory function for creating session storage backends

use std::sync::Arc;

use crate::config::SessionConfig;

use super::backend::SessionStorage;
use super::file::FileSessionStorage;
use super::memory::MemorySessionStorage;

/// Create a session storage backend based on configuration.
///
/// Unknown backend names, and a file backend whose directory cannot be
/// created, fall back to memory storage.
pub fn create_session_storage(config: &SessionConfig) -> Arc<dyn SessionStorage> {
    match config.backend.as_str() {
        "memory" => {
            tracing::info!("Using in-memory session storage");
            Arc::new(MemorySessionStorage::new())
        }
        "file" => match FileSessionStorage::new(&config.file_dir) {
            Ok(storage) => {
                tracing::info!(
                    dir = %config.file_dir.display(),
                    "Using file session storage"
                );
                Arc::new(storage)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    dir = %config.file_dir.display(),
                    "File session storage unavailable, falling back to memory"
                );
                Arc::new(MemorySessionStorage::new())
            }
        },
        other => {
            tracing::warn!(
                backend = %other,
                "Unknown session storage backend, falling back to memory"
            );
            Arc::new(MemorySessionStorage::new())
        }
    }
}
