//! Сессия пользователя как явный объект.
//!
//! Сессия передаётся через контекст, а не живёт в глобальном хранилище;
//! загрузка и сохранение идут через [`SessionStore`].

use super::auth::{LoginResponse, UserInfo};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Ключ записи сессии в `localStorage`
pub const SESSION_STORAGE_KEY: &str = "auth-storage";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_login(response: LoginResponse) -> Self {
        Self {
            token: Some(response.token),
            user: Some(response.user),
        }
    }

    /// Аутентифицирован, если есть непустой токен
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.nome.as_str())
    }

    pub fn sign_in(&mut self, token: String, user: UserInfo) {
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Повреждённая запись трактуется как отсутствие сессии
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Хуки постоянного хранения сессии
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// Хранилище в памяти: для тестов и окружений без `localStorage`
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    raw: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.raw
            .borrow()
            .as_deref()
            .and_then(Session::from_json)
            .filter(Session::is_authenticated)
    }

    fn save(&self, session: &Session) {
        if let Ok(raw) = session.to_json() {
            *self.raw.borrow_mut() = Some(raw);
        }
    }

    fn clear(&self) {
        *self.raw.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "u1".into(),
            nome: "Joana".into(),
            email: "joana@otica.com".into(),
        }
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut session = Session::anonymous();
        assert!(!session.is_authenticated());

        session.sign_in("tok".into(), user());
        assert!(session.is_authenticated());
        assert_eq!(session.bearer_token(), Some("tok"));
        assert_eq!(session.user_name(), Some("Joana"));

        session.sign_out();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_blank_token_is_not_authenticated() {
        let session = Session {
            token: Some("  ".into()),
            user: Some(user()),
        };
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer_token(), None);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load(), None);

        let mut session = Session::anonymous();
        session.sign_in("tok".into(), user());
        store.save(&session);
        assert_eq!(store.load(), Some(session));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupted_record_is_ignored() {
        assert_eq!(Session::from_json("{not json"), None);
    }

    #[test]
    fn test_login_response_accepts_mongo_id() {
        let raw = r#"{"token":"abc","user":{"_id":"64b7","nome":"Joana","email":"j@o.com"}}"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        let session = Session::from_login(response);
        assert!(session.is_authenticated());
        assert_eq!(session.user.unwrap().id, "64b7");
    }
}
