//! Persisted auth token
//!
//! The only local state the portal keeps: the bearer token issued at
//! login, stored in a single file and read back when the payment page
//! authenticates against the backend.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ClientError;

pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored token. Missing or empty storage is an error; the
    /// payment submission must not go out unauthenticated.
    pub fn load(&self) -> Result<String, ClientError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|_| ClientError::TokenMissing(self.path.display().to_string()))?;
        let token = raw.trim();
        if token.is_empty() {
            return Err(ClientError::TokenMissing(self.path.display().to_string()));
        }
        Ok(token.to_string())
    }

    pub fn save(&self, token: &str) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("auth_token"));
        store.save("tok-123").unwrap();
        assert_eq!(store.load().unwrap(), "tok-123");
    }

    #[test]
    fn trims_whitespace_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("auth_token"));
        store.save("  tok-123\n").unwrap();
        assert_eq!(store.load().unwrap(), "tok-123");
    }

    #[test]
    fn missing_or_empty_token_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("auth_token"));
        assert!(matches!(
            store.load().unwrap_err(),
            ClientError::TokenMissing(_)
        ));

        store.save("   ").unwrap();
        assert!(matches!(
            store.load().unwrap_err(),
            ClientError::TokenMissing(_)
        ));
    }
}
