//! # Session Store
//!
//! Owns the bearer token and the identity decoded from it.
//!
//! The token and the identity live in one `Option<ActiveSession>`, so one
//! can never exist without the other. Every mutation goes through the
//! durable [`TokenStorage`] first and only then touches memory.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use lib_auth::{decode_claims, TokenError};
use parking_lot::RwLock;
use shared::{AuthUser, LoginResponse, User};
use tokio::sync::watch;

use super::storage::{TokenStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use crate::core::error::Result;

/// Session context shared by the router and the API client.
pub type SharedSession = Arc<RwLock<SessionStore>>;

/// Identity of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub role: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
    /// Raw `exp` claim (Unix timestamp)
    pub exp: i64,
}

impl Identity {
    pub fn display_name(&self) -> String {
        shared::display_name(&self.first_name, &self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    /// Token expiry. The session does not act on it; the backend rejects
    /// stale tokens with 401 and the caller decides what to do before that.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

#[derive(Debug, Clone)]
struct ActiveSession {
    access: String,
    refresh: Option<String>,
    identity: Identity,
}

/// Client-side session state.
pub struct SessionStore {
    storage: Box<dyn TokenStorage>,
    active: Option<ActiveSession>,
    login_prompt: watch::Sender<bool>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.active.is_some())
            .field("identity", &self.identity())
            .field("login_prompt", &*self.login_prompt.borrow())
            .finish()
    }
}

impl SessionStore {
    /// Empty session over `storage`. Nothing is read from it.
    pub fn new(storage: impl TokenStorage + 'static) -> Self {
        Self::from_boxed(Box::new(storage))
    }

    fn from_boxed(storage: Box<dyn TokenStorage>) -> Self {
        let (login_prompt, _) = watch::channel(false);
        Self {
            storage,
            active: None,
            login_prompt,
        }
    }

    /// Rebuild the session persisted in `storage` (application bootstrap).
    ///
    /// Only the token is persisted, so the identity holds what its claims
    /// carry. Names stay empty, and so do `email` and `role` for email-login
    /// tokens (they carry only `user_id`), which makes
    /// [`Identity::is_admin`] false until [`SessionStore::update_profile`]
    /// runs. A token that no longer decodes is purged from storage and the
    /// session starts signed out.
    pub fn restore(storage: impl TokenStorage + 'static) -> Self {
        let mut store = Self::new(storage);

        let access = match store.storage.get(ACCESS_TOKEN_KEY) {
            Ok(Some(access)) => access,
            Ok(None) => return store,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read persisted session");
                return store;
            }
        };

        match decode_claims(&access) {
            Ok(claims) => {
                let refresh = store.storage.get(REFRESH_TOKEN_KEY).ok().flatten();
                let identity = Identity {
                    id: claims.user_id,
                    email: claims.email.unwrap_or_default(),
                    role: claims.role.unwrap_or_default(),
                    first_name: String::new(),
                    last_name: String::new(),
                    avatar_url: None,
                    exp: claims.exp,
                };
                tracing::info!(user_id = %identity.id, "Restored persisted session");
                store.active = Some(ActiveSession {
                    access,
                    refresh,
                    identity,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Purging unreadable persisted token");
                if let Err(e) = store.purge_storage() {
                    tracing::warn!(error = %e, "Could not purge persisted token");
                }
            }
        }

        store
    }

    /// Wrap into the shared handle injected into the router and API client.
    pub fn shared(self) -> SharedSession {
        Arc::new(RwLock::new(self))
    }

    /// Replace the session with `access`.
    ///
    /// `user_id` and `exp` come from the token. `email` and `role` come from
    /// the token when it carries them, otherwise from `profile`; if neither
    /// has them the token is rejected. Names and avatar come from `profile`.
    ///
    /// The tokens are persisted before memory is touched; on any error the
    /// previous session is left as it was.
    pub fn set_session(
        &mut self,
        access: &str,
        refresh: Option<&str>,
        profile: &AuthUser,
    ) -> Result<Identity> {
        let claims = decode_claims(access)?;

        if let Some(profile_id) = profile.id.as_deref() {
            if profile_id != claims.user_id {
                tracing::warn!(
                    token_user = %claims.user_id,
                    profile_user = %profile_id,
                    "Login profile id differs from token subject, using token"
                );
            }
        }

        let email = claims
            .email
            .or_else(|| profile.email.clone())
            .ok_or_else(|| TokenError::MissingClaim("email".to_string()))?;
        let role = claims
            .role
            .or_else(|| profile.role.clone())
            .ok_or_else(|| TokenError::MissingClaim("role".to_string()))?;

        let identity = Identity {
            id: claims.user_id,
            email,
            role,
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            avatar_url: profile.img_url.clone().filter(|url| !url.is_empty()),
            exp: claims.exp,
        };

        // A login without a refresh token must not leave the previous one paired
        self.storage
            .apply(&[(ACCESS_TOKEN_KEY, Some(access)), (REFRESH_TOKEN_KEY, refresh)])?;

        self.active = Some(ActiveSession {
            access: access.to_string(),
            refresh: refresh.map(str::to_string),
            identity: identity.clone(),
        });
        self.login_prompt.send_replace(false);

        tracing::info!(user_id = %identity.id, role = %identity.role, "Session established");
        Ok(identity)
    }

    /// [`SessionStore::set_session`] from a login response.
    pub fn set_from_login(&mut self, response: &LoginResponse) -> Result<Identity> {
        self.set_session(&response.access, response.refresh.as_deref(), &response.user)
    }

    /// Drop the session and both durable entries. Idempotent.
    ///
    /// Memory is cleared even when storage fails; the storage error is
    /// still returned.
    pub fn clear_session(&mut self) -> Result<()> {
        if let Some(previous) = self.active.take() {
            tracing::info!(user_id = %previous.identity.id, "Session cleared");
        }
        self.purge_storage()
    }

    fn purge_storage(&self) -> Result<()> {
        self.storage
            .apply(&[(ACCESS_TOKEN_KEY, None), (REFRESH_TOKEN_KEY, None)])
    }

    /// Token presence. Expiry is not checked.
    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    /// Ask the UI to present a login prompt. Session state is untouched.
    pub fn require_login(&self) {
        self.login_prompt.send_replace(true);
    }

    /// Called by the UI once the prompt is closed without logging in.
    pub fn dismiss_login_prompt(&self) {
        self.login_prompt.send_replace(false);
    }

    pub fn login_prompt_pending(&self) -> bool {
        *self.login_prompt.borrow()
    }

    /// Observe the login-required signal.
    pub fn subscribe_login_prompt(&self) -> watch::Receiver<bool> {
        self.login_prompt.subscribe()
    }

    pub fn bearer_token(&self) -> Option<&str> {
        self.active.as_ref().map(|s| s.access.as_str())
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.active.as_ref().and_then(|s| s.refresh.as_deref())
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.active.as_ref().map(|s| &s.identity)
    }

    /// Refresh display fields from a fetched user record.
    ///
    /// Names and avatar are replaced when the record has them. `email` and
    /// `role` are only filled when the token did not carry them; the id is
    /// never touched. Records for another user and calls without a session
    /// are ignored.
    pub fn update_profile(&mut self, user: &User) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let identity = &mut active.identity;
        if identity.id != user.id {
            tracing::warn!(user_id = %user.id, "Ignoring profile of another user");
            return;
        }

        if let Some(first_name) = &user.first_name {
            identity.first_name = first_name.clone();
        }
        if let Some(last_name) = &user.last_name {
            identity.last_name = last_name.clone();
        }
        if let Some(img_url) = &user.img_url {
            identity.avatar_url = Some(img_url.clone()).filter(|url| !url.is_empty());
        }
        if identity.email.is_empty() {
            identity.email = user.email.clone().unwrap_or_default();
        }
        if identity.role.is_empty() {
            identity.role = user.role.clone().unwrap_or_default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::session::storage::{Change, MemoryStorage};
    use chrono::Duration;
    use lib_auth::{encode_claims, Claims};

    fn token(user_id: &str, email: Option<&str>, role: Option<&str>) -> String {
        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.map(str::to_string),
            role: role.map(str::to_string),
            exp: (Utc::now() + Duration::days(10)).timestamp(),
            iat: None,
            token_type: Some("access".to_string()),
            jti: None,
        };
        encode_claims(&claims, "test-secret").unwrap()
    }

    fn names(first: &str, last: &str) -> AuthUser {
        AuthUser {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_set_session_decodes_identity() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let access = token("u1", Some("a@b.com"), Some("author"));

        let identity = store.set_session(&access, None, &names("Ana", "Lopez")).unwrap();

        assert_eq!(identity.id, "u1");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, "author");
        assert_eq!(identity.first_name, "Ana");
        assert_eq!(identity.last_name, "Lopez");
        assert_eq!(identity.avatar_url, None);
        assert_eq!(identity.display_name(), "Ana Lopez");
        assert!(!identity.is_expired_at(Utc::now()));
        assert!(store.is_authenticated());
        assert_eq!(store.bearer_token(), Some(access.as_str()));
    }

    #[test]
    fn test_new_session_replaces_previous_identity() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let mut first = names("Ana", "Lopez");
        first.img_url = Some("https://img/ana.png".to_string());
        store
            .set_session(&token("u1", Some("a@b.com"), Some("author")), Some("r1"), &first)
            .unwrap();

        let second = token("u2", Some("c@d.com"), Some("admin"));
        store.set_session(&second, None, &names("Bea", "")).unwrap();

        let identity = store.identity().unwrap();
        assert_eq!(identity.id, "u2");
        assert_eq!(identity.email, "c@d.com");
        assert_eq!(identity.role, "admin");
        assert_eq!(identity.first_name, "Bea");
        assert_eq!(identity.avatar_url, None);
        assert_eq!(store.refresh_token(), None);
    }

    #[test]
    fn test_claims_win_over_profile() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let mut profile = names("Ana", "Lopez");
        profile.email = Some("stale@b.com".to_string());
        profile.role = Some("admin".to_string());

        let identity = store
            .set_session(&token("u1", Some("a@b.com"), Some("author")), None, &profile)
            .unwrap();

        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, "author");
    }

    #[test]
    fn test_profile_fills_claims_missing_from_token() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let mut profile = names("Ana", "Lopez");
        profile.email = Some("a@b.com".to_string());
        profile.role = Some("author".to_string());

        let identity = store.set_session(&token("u1", None, None), None, &profile).unwrap();

        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, "author");
    }

    #[test]
    fn test_missing_claims_are_rejected_without_side_effects() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store
            .set_session(&token("u1", Some("a@b.com"), Some("author")), None, &names("Ana", "Lopez"))
            .unwrap();

        let err = store
            .set_session(&token("u2", None, None), None, &names("Bea", "Diaz"))
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedToken(ref m) if m.contains("email")));

        let err = store.set_session("garbage", None, &names("Bea", "Diaz")).unwrap_err();
        assert!(matches!(err, AppError::MalformedToken(_)));

        assert_eq!(store.identity().unwrap().id, "u1");
        assert_eq!(
            storage.get(ACCESS_TOKEN_KEY).unwrap().as_deref(),
            store.bearer_token()
        );
    }

    #[test]
    fn test_storage_and_memory_stay_in_sync() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        let access = token("u1", Some("a@b.com"), Some("author"));

        store.set_session(&access, Some("r1"), &names("Ana", "Lopez")).unwrap();
        assert_eq!(storage.get(ACCESS_TOKEN_KEY).unwrap(), Some(access.clone()));
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).unwrap().as_deref(), Some("r1"));

        store.set_session(&access, None, &names("Ana", "Lopez")).unwrap();
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).unwrap(), None);

        store.clear_session().unwrap();
        assert!(storage.is_empty());
        assert!(!store.is_authenticated());
        assert_eq!(store.identity(), None);
        assert_eq!(store.bearer_token(), None);
    }

    #[test]
    fn test_clear_session_is_idempotent() {
        let storage = MemoryStorage::new();
        let mut store = SessionStore::new(storage.clone());
        store
            .set_session(&token("u1", Some("a@b.com"), Some("author")), Some("r"), &names("Ana", "Lopez"))
            .unwrap();

        store.clear_session().unwrap();
        store.clear_session().unwrap();

        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    struct FailingStorage;

    impl TokenStorage for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn apply(&self, _changes: &[Change<'_>]) -> Result<()> {
            Err(AppError::Storage("disk full".to_string()))
        }
    }

    #[test]
    fn test_storage_failure_keeps_memory_unchanged() {
        let mut store = SessionStore::new(FailingStorage);
        let err = store
            .set_session(&token("u1", Some("a@b.com"), Some("author")), None, &names("Ana", "Lopez"))
            .unwrap_err();

        assert!(matches!(err, AppError::Storage(_)));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_prompt_signal() {
        let mut store = SessionStore::new(MemoryStorage::new());
        let mut rx = store.subscribe_login_prompt();
        assert!(!*rx.borrow_and_update());

        store.require_login();
        assert!(rx.has_changed().unwrap());
        assert!(*rx.borrow_and_update());
        assert!(store.login_prompt_pending());
        assert!(!store.is_authenticated());

        store
            .set_session(&token("u1", Some("a@b.com"), Some("author")), None, &names("Ana", "Lopez"))
            .unwrap();
        assert!(!store.login_prompt_pending());
        assert!(!*rx.borrow_and_update());
    }

    #[test]
    fn test_restore_rebuilds_identity_from_token() {
        let storage = MemoryStorage::new();
        let access = token("u1", Some("a@b.com"), Some("author"));
        storage
            .apply(&[(ACCESS_TOKEN_KEY, Some(access.as_str())), (REFRESH_TOKEN_KEY, Some("r1"))])
            .unwrap();

        let store = SessionStore::restore(storage);

        assert!(store.is_authenticated());
        let identity = store.identity().unwrap();
        assert_eq!(identity.id, "u1");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.first_name, "");
        assert_eq!(store.refresh_token(), Some("r1"));
    }

    #[test]
    fn test_restore_purges_unreadable_token() {
        let storage = MemoryStorage::new();
        storage
            .apply(&[(ACCESS_TOKEN_KEY, Some("garbage")), (REFRESH_TOKEN_KEY, Some("r1"))])
            .unwrap();

        let store = SessionStore::restore(storage.clone());

        assert!(!store.is_authenticated());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_update_profile_fills_display_fields() {
        let mut store = SessionStore::restore({
            let storage = MemoryStorage::new();
            storage.set(ACCESS_TOKEN_KEY, &token("u1", None, None)).unwrap();
            storage
        });

        store.update_profile(&User {
            id: "u1".to_string(),
            first_name: Some("Ana".to_string()),
            last_name: Some("Lopez".to_string()),
            email: Some("a@b.com".to_string()),
            role: Some("author".to_string()),
            img_url: Some("https://img/ana.png".to_string()),
        });

        let identity = store.identity().unwrap();
        assert_eq!(identity.display_name(), "Ana Lopez");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, "author");
        assert_eq!(identity.avatar_url.as_deref(), Some("https://img/ana.png"));

        store.update_profile(&User {
            id: "u2".to_string(),
            first_name: Some("Mallory".to_string()),
            ..Default::default()
        });
        assert_eq!(store.identity().unwrap().first_name, "Ana");
    }

    #[test]
    fn test_update_profile_keeps_token_claims() {
        let mut store = SessionStore::new(MemoryStorage::new());
        store
            .set_session(&token("u1", Some("a@b.com"), Some("author")), None, &names("Ana", "Lopez"))
            .unwrap();

        store.update_profile(&User {
            id: "u1".to_string(),
            email: Some("other@b.com".to_string()),
            role: Some("admin".to_string()),
            ..Default::default()
        });

        let identity = store.identity().unwrap();
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, "author");
        assert_eq!(identity.first_name, "Ana");
    }
}
