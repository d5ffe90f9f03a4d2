use std::sync::{Arc, Mutex};

use tracing::info;

use super::session::{SessionRecord, SessionStorage, SessionStorageError};

/// Demo credential pair; the only accepted login.
pub const DEMO_USERNAME: &str = "Testing";
pub const DEMO_PASSWORD: &str = "Testing";

/// Single-session auth stub: one optional username held in memory and
/// mirrored into the configured session storage.
pub struct AuthService {
    current: Mutex<Option<SessionRecord>>,
    storage: Arc<dyn SessionStorage>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            current: Mutex::new(None),
            storage,
        }
    }

    /// Validate the literal credential pair; on success the session is
    /// overwritten in memory and storage.
    pub fn login(&self, username: &str, password: &str) -> Result<SessionRecord, AuthError> {
        if username != DEMO_USERNAME || password != DEMO_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        let record = SessionRecord {
            username: username.to_string(),
        };
        self.storage.save(&record)?;
        *self.current.lock().expect("session mutex poisoned") = Some(record.clone());
        info!(username = %record.username, "session opened");
        Ok(record)
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.clear()?;
        *self.current.lock().expect("session mutex poisoned") = None;
        Ok(())
    }

    /// The active session, refreshed from storage the way the original
    /// client re-reads local storage on every check.
    pub fn current_user(&self) -> Option<SessionRecord> {
        let mut guard = self.current.lock().expect("session mutex poisoned");
        if let Ok(Some(stored)) = self.storage.load() {
            *guard = Some(stored);
        }
        guard.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

/// Error raised by the auth stub.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] SessionStorageError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::InMemorySessionStorage;

    fn service() -> AuthService {
        AuthService::new(Arc::new(InMemorySessionStorage::default()))
    }

    #[test]
    fn exact_demo_credentials_log_in() {
        let auth = service();
        let record = auth.login("Testing", "Testing").expect("valid login");
        assert_eq!(record.username, "Testing");
        assert!(auth.is_authenticated());
    }

    #[test]
    fn any_other_input_is_rejected() {
        let auth = service();
        for (username, password) in [
            ("Testing", "testing"),
            ("testing", "Testing"),
            ("Testing", ""),
            ("", "Testing"),
            ("", ""),
            ("admin", "admin"),
        ] {
            let err = auth.login(username, password).expect_err("rejected");
            assert!(matches!(err, AuthError::InvalidCredentials));
            assert!(!auth.is_authenticated());
        }
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let storage = Arc::new(InMemorySessionStorage::default());
        let auth = AuthService::new(storage.clone());
        auth.login("Testing", "Testing").expect("valid login");
        auth.logout().expect("logout succeeds");
        assert!(!auth.is_authenticated());
        assert!(storage.load().expect("loads").is_none());
    }

    #[test]
    fn session_survives_a_fresh_service_over_shared_storage() {
        let storage = Arc::new(InMemorySessionStorage::default());
        AuthService::new(storage.clone())
            .login("Testing", "Testing")
            .expect("valid login");

        let fresh = AuthService::new(storage);
        let record = fresh.current_user().expect("session restored");
        assert_eq!(record.username, "Testing");
    }
}
