//! The persisted login token.
//!
//! Holding a token is the only thing that makes the client "logged in". It is
//! never inspected for expiry; an expired token only shows up when a later API
//! call fails.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ClientError, ClientResult};

/// Backing storage for the token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> ClientResult<Option<String>>;
    fn store(&self, token: &str) -> ClientResult<()>;
    fn remove(&self) -> ClientResult<()>;
}

#[derive(Serialize, Deserialize, Default)]
struct SessionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// Token kept in a TOML file, surviving restarts.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileTokenStore { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let data: SessionData = toml::from_str(&contents).map_err(|e| {
            ClientError::Storage(format!("Failed to parse {}: {e}", self.path.display()))
        })?;

        Ok(data.token)
    }

    fn store(&self, token: &str) -> ClientResult<()> {
        let data = SessionData {
            token: Some(token.to_string()),
        };
        let contents = toml::to_string_pretty(&data)
            .map_err(|e| ClientError::Storage(format!("Failed to serialize session: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, contents)?;

        // Owner-only (0600), the file holds a bearer token:
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    fn remove(&self) -> ClientResult<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Token kept in process memory only.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> ClientError {
    ClientError::Storage("Session lock poisoned".into())
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.token.read().map_err(poisoned)?.clone())
    }

    fn store(&self, token: &str) -> ClientResult<()> {
        *self.token.write().map_err(poisoned)? = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> ClientResult<()> {
        *self.token.write().map_err(poisoned)? = None;
        Ok(())
    }
}

/// Handle to the session shared by the services and the route guard.
///
/// Clones share the same underlying store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Session {
            store: Arc::new(store),
        }
    }

    pub fn persistent(path: impl Into<PathBuf>) -> Self {
        Self::new(FileTokenStore::new(path))
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }

    pub fn set(&self, token: &str) -> ClientResult<()> {
        self.store.store(token)
    }

    /// The current token. Unreadable storage counts as logged out.
    pub fn get(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "could not read session token");
                None
            }
        }
    }

    pub fn clear(&self) -> ClientResult<()> {
        self.store.remove()
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}
