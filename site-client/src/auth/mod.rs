//! # Token Storage
//!
//! The one piece of client state that outlives a request: the bearer token.
//!
//! Storage is an injected trait rather than ambient global state so the
//! transport can be tested with an in-memory fake. The transport reads the
//! store before every request and clears it whenever the server answers
//! HTTP 401; both operations are idempotent.
//!
//! Exactly one location is persisted — a single JSON file for
//! [`FileTokenStore`] — and nothing else about the client survives a
//! process restart.

use std::path::PathBuf;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Bearer token storage injected into the transport.
///
/// Implementations must be safe to share across tasks; the transport calls
/// these from concurrent requests.
pub trait TokenStore: Send + Sync {
    /// Read the current token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a token, replacing any previous one.
    fn store(&self, token: &str);

    /// Remove the token. A no-op when none is stored.
    fn clear(&self);
}

/// In-memory store for tests and short-lived tools.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a token, handy in tests.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn store(&self, token: &str) {
        *self.token.write() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write() = None;
    }
}

/// On-disk shape; the token lives under the single fixed key
/// `site_auth_token`.
#[derive(Serialize, Deserialize, Default)]
struct TokenFile {
    #[serde(rename = "site_auth_token")]
    token: Option<String>,
}

/// File-backed store persisting the token across process restarts.
///
/// IO failures are logged and treated as "no token" — a missing or
/// unreadable token file must never take the client down, it only forces a
/// fresh login.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store persisting to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_file(&self) -> Option<TokenFile> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(file) => Some(file),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed token file, ignoring");
                None
            }
        }
    }

    fn write_file(&self, file: &TokenFile) {
        let payload = match serde_json::to_string_pretty(file) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Failed to serialize token file");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    warn!(path = %parent.display(), error = %e, "Failed to create token directory");
                    return;
                }
            }
        }
        if let Err(e) = std::fs::write(&self.path, payload) {
            warn!(path = %self.path.display(), error = %e, "Failed to write token file");
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        self.read_file().and_then(|f| f.token)
    }

    fn store(&self, token: &str) {
        self.write_file(&TokenFile {
            token: Some(token.to_string()),
        });
    }

    fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), error = %e, "Failed to remove token file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().is_none());

        store.store("abc123");
        assert_eq!(store.load().as_deref(), Some("abc123"));

        store.clear();
        assert!(store.load().is_none());
        // Clearing twice is a no-op
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "site-client-token-test-{}.json",
            std::process::id()
        ));
        let store = FileTokenStore::new(&path);
        store.clear();

        assert!(store.load().is_none());
        store.store("persisted-token");
        assert_eq!(store.load().as_deref(), Some("persisted-token"));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(
            raw.contains("site_auth_token"),
            "token persists under the fixed key"
        );

        store.clear();
        assert!(store.load().is_none());
        assert!(!path.exists());
    }
}
