use contracts::system::session::{Session, SessionStore, SESSION_STORAGE_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Сессия в `localStorage` под ключом `auth-storage` (JSON)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = get_local_storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
        Session::from_json(&raw).filter(Session::is_authenticated)
    }

    fn save(&self, session: &Session) {
        let Some(storage) = get_local_storage() else {
            return;
        };
        match session.to_json() {
            Ok(raw) => {
                if storage.set_item(SESSION_STORAGE_KEY, &raw).is_err() {
                    log::warn!("localStorage is not writable");
                }
            }
            Err(e) => log::error!("session serialization failed: {}", e),
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}
