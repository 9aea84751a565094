//! Authentication token lifecycle.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::api::SignupApi;
use crate::models::ApiError;

/// Error text for a login the server rejected without a reason.
pub const LOGIN_REJECTED: &str = "Login failed";

/// Error text for a login that never reached the server.
pub const LOGIN_UNREACHABLE: &str = "Login failed. Please try again.";

/// Where the raw session token survives across page reloads.
///
/// The browser frontend backs this with `localStorage`; tests use
/// [`MemoryTokenStore`]. Absence of a token means unauthenticated on load.
pub trait TokenStore {
    /// The persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist a freshly issued token.
    fn save(&self, token: &str);
    /// Drop the persisted token.
    fn clear(&self);
}

/// In-process [`TokenStore`], used by tests and headless callers.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    /// A store already holding `token`, as if a prior visit persisted it.
    #[must_use]
    pub fn holding(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// The two authentication states of the client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum SessionState {
    /// No valid token; mutations are locally blocked.
    #[default]
    Unauthenticated,
    /// A token the server has vouched for, plus the teacher it belongs to.
    Authenticated {
        token: String,
        display_name: String,
    },
}

/// Owns the session singleton: restore, login, logout, and the
/// authorization signal the rest of the client gates on.
///
/// State is replaced wholesale on every transition and only through these
/// methods, so a partially updated session is never observable.
pub struct SessionManager {
    api: Rc<dyn SignupApi>,
    store: Rc<dyn TokenStore>,
    state: RefCell<SessionState>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("authorized", &self.is_authorized())
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// A manager starting unauthenticated. Call [`restore`](Self::restore)
    /// to pick up a persisted session.
    pub fn new(api: Rc<dyn SignupApi>, store: Rc<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            state: RefCell::new(SessionState::Unauthenticated),
        }
    }

    /// Validate a persisted token with the server, if one exists.
    ///
    /// Every failure path degrades to unauthenticated and drops the stale
    /// token from the store, so a token the server no longer accepts is
    /// retried at most once across reloads. Never fails outward.
    pub async fn restore(&self) {
        let Some(token) = self.store.load() else {
            self.state.replace(SessionState::Unauthenticated);
            return;
        };

        match self.api.me(&token).await {
            Ok(me) => {
                self.state.replace(SessionState::Authenticated {
                    token,
                    display_name: me.name,
                });
            }
            Err(err) => {
                tracing::info!(error = %err, "persisted session rejected, clearing token");
                self.store.clear();
                self.state.replace(SessionState::Unauthenticated);
            }
        }
    }

    /// Exchange credentials for a session token.
    ///
    /// On success the token is persisted and held in memory and the
    /// teacher's display name is returned for the UI. On failure the
    /// session state is left untouched and the error text is the server's
    /// `detail`, or a fixed fallback when there is none to quote.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, String> {
        match self.api.login(username, password).await {
            Ok(response) => {
                self.store.save(&response.access_token);
                self.state.replace(SessionState::Authenticated {
                    token: response.access_token,
                    display_name: response.teacher_name.clone(),
                });
                Ok(response.teacher_name)
            }
            Err(ApiError::Rejected { detail, .. }) => {
                Err(detail.unwrap_or_else(|| LOGIN_REJECTED.to_string()))
            }
            Err(err) => {
                tracing::warn!(error = %err, "login request failed");
                Err(LOGIN_UNREACHABLE.to_string())
            }
        }
    }

    /// Drop the session, both in memory and in the store.
    ///
    /// Purely a client-state transition; the token stays valid server-side
    /// until it expires, which is the server's policy to own.
    pub fn logout(&self) {
        self.store.clear();
        self.state.replace(SessionState::Unauthenticated);
    }

    /// Whether mutating actions may currently be attempted.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        matches!(&*self.state.borrow(), SessionState::Authenticated { .. })
    }

    /// The current bearer credential, or `None` when unauthenticated.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match &*self.state.borrow() {
            SessionState::Authenticated { token, .. } => Some(token.clone()),
            SessionState::Unauthenticated => None,
        }
    }

    /// Display name of the signed-in teacher, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match &*self.state.borrow() {
            SessionState::Authenticated { display_name, .. } => Some(display_name.clone()),
            SessionState::Unauthenticated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedApi;
    use crate::models::{LoginResponse, MeResponse};

    fn manager(api: ScriptedApi, store: MemoryTokenStore) -> (SessionManager, Rc<ScriptedApi>, Rc<MemoryTokenStore>) {
        let api = Rc::new(api);
        let store = Rc::new(store);
        let manager = SessionManager::new(api.clone(), store.clone());
        (manager, api, store)
    }

    #[tokio::test]
    async fn restore_without_token_stays_unauthenticated() {
        let (manager, api, _store) = manager(ScriptedApi::default(), MemoryTokenStore::default());

        manager.restore().await;

        assert!(!manager.is_authorized());
        assert_eq!(manager.token(), None);
        // No identity check was issued.
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn restore_with_valid_token_authenticates() {
        let api = ScriptedApi::default();
        api.script_me(Ok(MeResponse {
            name: "Ms. Rodriguez".to_string(),
        }));
        let (manager, api, _store) = manager(api, MemoryTokenStore::holding("tok-1"));

        manager.restore().await;

        assert!(manager.is_authorized());
        assert_eq!(manager.display_name().as_deref(), Some("Ms. Rodriguez"));
        assert_eq!(api.calls(), vec!["me tok-1".to_string()]);
    }

    #[tokio::test]
    async fn restore_with_rejected_token_clears_store() {
        let api = ScriptedApi::default();
        api.script_me(Err(ApiError::Rejected {
            status: 401,
            detail: None,
        }));
        let (manager, api, store) = manager(api, MemoryTokenStore::holding("stale"));

        manager.restore().await;
        assert!(!manager.is_authorized());
        assert_eq!(store.load(), None);

        // Idempotent: the second restore finds no token and makes no call.
        manager.restore().await;
        assert!(!manager.is_authorized());
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn restore_network_failure_degrades_to_unauthenticated() {
        let api = ScriptedApi::default();
        api.script_me(Err(ApiError::Network("offline".to_string())));
        let (manager, _api, store) = manager(api, MemoryTokenStore::holding("tok"));

        manager.restore().await;

        assert!(!manager.is_authorized());
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn login_success_persists_token() {
        let api = ScriptedApi::default();
        api.script_login(Ok(LoginResponse {
            access_token: "tok-9".to_string(),
            teacher_name: "Mr. Chen".to_string(),
        }));
        let (manager, _api, store) = manager(api, MemoryTokenStore::default());

        let name = manager.login("mchen", "secret").await.unwrap();

        assert_eq!(name, "Mr. Chen");
        assert!(manager.is_authorized());
        assert_eq!(manager.token().as_deref(), Some("tok-9"));
        assert_eq!(store.load().as_deref(), Some("tok-9"));
    }

    #[tokio::test]
    async fn login_rejection_surfaces_detail_and_keeps_state() {
        let api = ScriptedApi::default();
        api.script_login(Err(ApiError::Rejected {
            status: 401,
            detail: Some("Invalid username or password".to_string()),
        }));
        let (manager, _api, store) = manager(api, MemoryTokenStore::default());

        let err = manager.login("mchen", "wrong").await.unwrap_err();

        assert_eq!(err, "Invalid username or password");
        assert!(!manager.is_authorized());
        assert_eq!(store.load(), None);
    }

    #[tokio::test]
    async fn login_rejection_without_detail_uses_fallback() {
        let api = ScriptedApi::default();
        api.script_login(Err(ApiError::Rejected {
            status: 500,
            detail: None,
        }));
        let (manager, _api, _store) = manager(api, MemoryTokenStore::default());

        assert_eq!(manager.login("a", "b").await.unwrap_err(), LOGIN_REJECTED);
    }

    #[tokio::test]
    async fn login_network_failure_uses_retry_text() {
        let api = ScriptedApi::default();
        api.script_login(Err(ApiError::Network("offline".to_string())));
        let (manager, _api, _store) = manager(api, MemoryTokenStore::default());

        assert_eq!(manager.login("a", "b").await.unwrap_err(), LOGIN_UNREACHABLE);
    }

    #[tokio::test]
    async fn logout_clears_token_without_network_call() {
        let api = ScriptedApi::default();
        api.script_login(Ok(LoginResponse {
            access_token: "tok".to_string(),
            teacher_name: "Ms. R".to_string(),
        }));
        let (manager, api, store) = manager(api, MemoryTokenStore::default());
        manager.login("r", "pw").await.unwrap();
        let calls_before = api.calls().len();

        manager.logout();

        assert!(!manager.is_authorized());
        assert_eq!(manager.token(), None);
        assert_eq!(store.load(), None);
        assert_eq!(api.calls().len(), calls_before);
    }
}
