//! Persisted session state.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use ledger_core::{AccessToken, KeyValueStore, RefreshToken, UserProfile};

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";
const USER_KEY: &str = "user";

/// Tokens and the cached profile, kept in an injected [`KeyValueStore`].
///
/// Nothing here returns an error. A backend failure is logged and reads as
/// "absent", which sends the caller down the same path as a fresh install.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn access_token(&self) -> Option<AccessToken> {
        self.read(ACCESS_TOKEN_KEY).map(AccessToken::new)
    }

    pub fn refresh_token(&self) -> Option<RefreshToken> {
        self.read(REFRESH_TOKEN_KEY).map(RefreshToken::new)
    }

    /// Store both tokens. The writes are sequential, not atomic.
    pub fn set_tokens(&self, access: &AccessToken, refresh: &RefreshToken) {
        self.write(ACCESS_TOKEN_KEY, access.as_str());
        self.write(REFRESH_TOKEN_KEY, refresh.as_str());
    }

    /// Replace the access token only; the refresh token is left alone.
    pub fn set_access_token(&self, access: &AccessToken) {
        self.write(ACCESS_TOKEN_KEY, access.as_str());
    }

    pub fn clear_tokens(&self) {
        self.erase(ACCESS_TOKEN_KEY);
        self.erase(REFRESH_TOKEN_KEY);
    }

    /// The cached profile. Malformed data reads as absent.
    pub fn stored_user(&self) -> Option<UserProfile> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                debug!(error = %e, "Ignoring malformed cached profile");
                None
            }
        }
    }

    pub fn set_stored_user(&self, user: Option<&UserProfile>) {
        let Some(user) = user else {
            self.erase(USER_KEY);
            return;
        };
        match serde_json::to_string(user) {
            Ok(raw) => self.write(USER_KEY, &raw),
            Err(e) => warn!(error = %e, "Could not encode profile for caching"),
        }
    }

    /// Forget the tokens and the cached profile.
    pub fn clear(&self) {
        self.clear_tokens();
        self.erase(USER_KEY);
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                warn!(key, error = %e, "Session storage read failed");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            warn!(key, error = %e, "Session storage write failed");
        }
    }

    fn erase(&self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            warn!(key, error = %e, "Session storage remove failed");
        }
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::error::StorageError;
    use ledger_core::{MemoryStore, Result};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(StorageError::Unavailable {
                message: "disk on fire".to_string(),
            }
            .into())
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(StorageError::Unavailable {
                message: "disk on fire".to_string(),
            }
            .into())
        }

        fn remove(&self, _key: &str) -> Result<()> {
            Err(StorageError::Unavailable {
                message: "disk on fire".to_string(),
            }
            .into())
        }
    }

    fn profile() -> UserProfile {
        serde_json::from_value(serde_json::json!({
            "id": 7, "username": "alice", "email": "alice@example.com",
            "first_name": "Alice", "last_name": "Rao", "role": "DIRECTOR",
            "phone": "", "is_staff": false, "is_superuser": false
        }))
        .unwrap()
    }

    #[test]
    fn tokens_round_trip_through_storage() {
        let memory = MemoryStore::new();
        let session = SessionStore::new(Arc::new(memory.clone()));

        session.set_tokens(&AccessToken::new("A1"), &RefreshToken::new("R1"));

        assert_eq!(session.access_token(), Some(AccessToken::new("A1")));
        assert_eq!(session.refresh_token(), Some(RefreshToken::new("R1")));
        assert_eq!(memory.get("access_token").unwrap().as_deref(), Some("A1"));
    }

    #[test]
    fn access_update_keeps_refresh_token() {
        let session = SessionStore::new(Arc::new(MemoryStore::new()));
        session.set_tokens(&AccessToken::new("A1"), &RefreshToken::new("R1"));

        session.set_access_token(&AccessToken::new("A2"));

        assert_eq!(session.access_token(), Some(AccessToken::new("A2")));
        assert_eq!(session.refresh_token(), Some(RefreshToken::new("R1")));
    }

    #[test]
    fn clear_tokens_keeps_profile_and_clear_drops_both() {
        let session = SessionStore::new(Arc::new(MemoryStore::new()));
        session.set_tokens(&AccessToken::new("A1"), &RefreshToken::new("R1"));
        session.set_stored_user(Some(&profile()));

        session.clear_tokens();
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
        assert_eq!(session.stored_user().map(|u| u.id), Some(7));

        session.clear();
        assert!(session.stored_user().is_none());
    }

    #[test]
    fn malformed_profile_reads_as_absent() {
        let memory = MemoryStore::with_entries([("user", "{not json")]);
        let session = SessionStore::new(Arc::new(memory));
        assert!(session.stored_user().is_none());
    }

    #[test]
    fn empty_token_reads_as_absent() {
        let memory = MemoryStore::with_entries([("access_token", "")]);
        let session = SessionStore::new(Arc::new(memory));
        assert!(session.access_token().is_none());
    }

    #[test]
    fn storage_failure_reads_as_absent() {
        let session = SessionStore::new(Arc::new(BrokenStore));
        session.set_tokens(&AccessToken::new("A1"), &RefreshToken::new("R1"));
        session.clear();
        assert!(session.access_token().is_none());
        assert!(session.stored_user().is_none());
    }

    #[test]
    fn debug_hides_tokens() {
        let memory = MemoryStore::with_entries([("access_token", "secret-A1")]);
        let session = SessionStore::new(Arc::new(memory));
        assert!(!format!("{:?}", session).contains("secret-A1"));
    }
}
