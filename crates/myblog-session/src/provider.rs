use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Mutex, PoisonError};

use myblog_types::User;
use tracing::{info, warn};

use crate::error::Result;
use crate::store::TokenStore;

/// Authentication state as an explicit machine instead of a boolean flag.
///
/// The original UI kept a logged-in boolean per view and let a failed
/// profile fetch desynchronize the stored token from the displayed state.
/// Here every dependent observes the same machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Startup, before the token slot was inspected.
    Unknown,
    /// A stored token exists and its profile fetch is in flight.
    Checking,
    Authenticated(User),
    Unauthenticated,
}

impl AuthState {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Process-wide owner of session state with a subscribe/notify contract.
///
/// The navigation header and the feed both subscribe here rather than each
/// reading the token store independently, so a logout or a failed check is
/// observed consistently everywhere.
pub struct SessionProvider {
    store: TokenStore,
    state: Mutex<AuthState>,
    subscribers: Mutex<Vec<Sender<AuthState>>>,
}

impl SessionProvider {
    pub fn new(store: TokenStore) -> Self {
        Self {
            store,
            state: Mutex::new(AuthState::Unknown),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> AuthState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The stored token, if any. Request paths read it through here so the
    /// store stays a single-writer concern of this provider.
    pub fn token(&self) -> Option<String> {
        self.store.load().ok().flatten()
    }

    /// Register an observer. The current state is delivered immediately so
    /// late subscribers do not miss the standing state.
    pub fn subscribe(&self) -> Receiver<AuthState> {
        let (tx, rx) = channel();
        let _ = tx.send(self.state());
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Startup transition: inspect the token slot. Returns the token to
    /// verify when one exists (state moves to `Checking`); otherwise the
    /// state settles on `Unauthenticated`.
    pub fn begin_check(&self) -> Option<String> {
        match self.token() {
            Some(token) => {
                self.transition(AuthState::Checking);
                Some(token)
            }
            None => {
                self.transition(AuthState::Unauthenticated);
                None
            }
        }
    }

    /// Profile fetch succeeded.
    pub fn authenticated(&self, user: User) {
        info!(username = %user.username, "session authenticated");
        self.transition(AuthState::Authenticated(user));
    }

    /// Profile fetch failed. `rejected` means the API refused the token
    /// (known-bad credential, so the slot is cleared); a transport failure
    /// keeps the token for a later retry but displays as logged out.
    pub fn check_failed(&self, rejected: bool) -> Result<()> {
        if rejected {
            warn!("stored token rejected by the API, clearing it");
            self.store.clear()?;
        } else {
            warn!("profile fetch failed, keeping stored token");
        }
        self.transition(AuthState::Unauthenticated);
        Ok(())
    }

    /// A fresh token from a successful login. State moves to `Checking`
    /// until the follow-up profile fetch resolves it.
    pub fn login(&self, token: &str) -> Result<()> {
        self.store.save(token)?;
        self.transition(AuthState::Checking);
        Ok(())
    }

    /// Clear the slot and display state. The server is not invoked.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        self.transition(AuthState::Unauthenticated);
        Ok(())
    }

    fn transition(&self, next: AuthState) {
        {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            *state = next.clone();
        }

        // Notify subscribers, dropping any whose receiver is gone.
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.retain(|tx| tx.send(next.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn provider(temp_dir: &TempDir) -> SessionProvider {
        SessionProvider::new(TokenStore::new(temp_dir.path()))
    }

    fn user() -> User {
        User {
            id: "u1".to_string(),
            username: "alice".to_string(),
        }
    }

    #[test]
    fn test_begin_check_without_token_settles_unauthenticated() {
        let temp_dir = TempDir::new().unwrap();
        let provider = provider(&temp_dir);

        assert_eq!(provider.begin_check(), None);
        assert_eq!(provider.state(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_begin_check_with_token_moves_to_checking() {
        let temp_dir = TempDir::new().unwrap();
        let provider = provider(&temp_dir);
        provider.login("tok-1").unwrap();

        assert_eq!(provider.begin_check().as_deref(), Some("tok-1"));
        assert_eq!(provider.state(), AuthState::Checking);
    }

    #[test]
    fn test_subscribers_observe_transitions_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let provider = provider(&temp_dir);
        let rx = provider.subscribe();

        provider.login("tok-1").unwrap();
        provider.authenticated(user());
        provider.logout().unwrap();

        // Initial snapshot, then one event per transition.
        assert_eq!(rx.recv().unwrap(), AuthState::Unknown);
        assert_eq!(rx.recv().unwrap(), AuthState::Checking);
        assert_eq!(rx.recv().unwrap(), AuthState::Authenticated(user()));
        assert_eq!(rx.recv().unwrap(), AuthState::Unauthenticated);
    }

    #[test]
    fn test_rejected_check_clears_the_stored_token() {
        let temp_dir = TempDir::new().unwrap();
        let provider = provider(&temp_dir);
        provider.login("tok-bad").unwrap();

        provider.check_failed(true).unwrap();

        assert_eq!(provider.state(), AuthState::Unauthenticated);
        assert_eq!(provider.token(), None);
    }

    #[test]
    fn test_transport_failure_keeps_the_stored_token() {
        let temp_dir = TempDir::new().unwrap();
        let provider = provider(&temp_dir);
        provider.login("tok-1").unwrap();

        provider.check_failed(false).unwrap();

        // Displayed as logged out, but the credential survives for a retry.
        assert_eq!(provider.state(), AuthState::Unauthenticated);
        assert_eq!(provider.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_logout_clears_token_for_subsequent_session_checks() {
        let temp_dir = TempDir::new().unwrap();
        let provider = provider(&temp_dir);
        provider.login("tok-1").unwrap();
        provider.authenticated(user());

        provider.logout().unwrap();

        assert_eq!(provider.token(), None);
        assert_eq!(provider.begin_check(), None);
        assert_eq!(provider.state(), AuthState::Unauthenticated);
    }
}
