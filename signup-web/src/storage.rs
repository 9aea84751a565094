use gloo_storage::{LocalStorage, Storage};
use shared::session::TokenStore;

/// Storage key the original client used; kept so existing sessions
/// survive an upgrade.
const TOKEN_KEY: &str = "authToken";

/// [`TokenStore`] backed by the browser's `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    fn save(&self, token: &str) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
            log::error!("failed to persist session token: {err}");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}
