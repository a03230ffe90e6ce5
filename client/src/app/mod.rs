//! # Application Orchestrator
//!
//! The [`App`] struct wires the session, the API client and the router
//! around one [`SharedSession`] and exposes the flows a UI calls.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (orchestrator)                                         │
//! │  - login() / login_with_google() / logout()                 │
//! │  - navigate() - guarded navigation                          │
//! │  - refresh_profile() - names and avatar after a restore     │
//! └──────┬───────────────────────┬──────────────────────┬───────┘
//!        │                       │                      │
//! ┌──────▼───────┐       ┌───────▼────────┐     ┌───────▼───────┐
//! │ ApiService   │       │ SharedSession  │     │ Router        │
//! │ (ApiClient)  │──────►│ Arc<RwLock<..>>│◄────│ guard + table │
//! │ bearer header│ reads │ token+identity │reads│               │
//! └──────────────┘       └────────────────┘     └───────────────┘
//! ```
//!
//! The session lock is taken only for synchronous steps, never across an
//! `.await`.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use blog_client::app::App;
//! use blog_client::config::ClientConfig;
//! use blog_client::router::Navigation;
//!
//! # async fn run() -> blog_client::core::error::Result<()> {
//! let config = ClientConfig::from_env();
//! let _guard = blog_client::logging::init(&config.log);
//!
//! let mut app = App::bootstrap(&config)?;
//! app.refresh_profile().await?;
//! if let Navigation::Blocked { .. } = app.navigate("/dashboard") {
//!     let identity = app.login("ana@example.com", "secret123").await?;
//!     println!("Welcome {}", identity.display_name());
//!     app.navigate("/dashboard");
//! }
//! app.logout()?;
//! # Ok(())
//! # }
//! ```

pub mod handlers;

use tokio::sync::watch;

use crate::config::ClientConfig;
use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::router::{routes::default_routes, Navigation, Router};
use crate::services::api::ApiClient;
use crate::session::{FileStorage, Identity, SessionStore, SharedSession};

/// Client application: session, backend and router.
pub struct App<A: ApiService = ApiClient> {
    session: SharedSession,
    api: A,
    router: Router,
}

impl App<ApiClient> {
    /// Restore the persisted session and build the client and router
    /// around it.
    ///
    /// No request is sent here. A restored identity lacks names, and for
    /// email logins also `email` and `role`; call
    /// [`App::refresh_profile`] once the runtime is up to fill them.
    pub fn bootstrap(config: &ClientConfig) -> Result<Self> {
        let storage = FileStorage::new(&config.session_file);
        let session = SessionStore::restore(storage).shared();
        let api = ApiClient::from_config(config, session.clone());
        let router = Router::new(default_routes(), session.clone(), config.guard_policy)?;

        tracing::info!(
            api_base_url = %config.api_base_url,
            guard_policy = %config.guard_policy,
            authenticated = session.read().is_authenticated(),
            "Client bootstrapped"
        );
        Ok(Self::with_parts(session, api, router))
    }
}

impl<A: ApiService> App<A> {
    /// `api` and `router` must have been built around `session`.
    pub fn with_parts(session: SharedSession, api: A, router: Router) -> Self {
        Self {
            session,
            api,
            router,
        }
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.read().identity().cloned()
    }

    /// Observe the login-required signal raised by blocked navigations.
    pub fn subscribe_login_prompt(&self) -> watch::Receiver<bool> {
        self.session.read().subscribe_login_prompt()
    }

    /// Email/password login. Input is validated before any request.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        handlers::auth::handle_login(&self.session, &self.api, email, password).await
    }

    pub async fn login_with_google(&self, id_token: &str) -> Result<Identity> {
        handlers::auth::handle_google_login(&self.session, &self.api, id_token).await
    }

    /// Clear the session and navigate home.
    pub fn logout(&mut self) -> Result<Navigation> {
        handlers::auth::handle_logout(&self.session, &mut self.router)
    }

    pub fn navigate(&mut self, path: &str) -> Navigation {
        self.router.navigate(path)
    }

    /// Fetch the signed-in user and refresh names and avatar. `Ok(None)`
    /// without a session.
    pub async fn refresh_profile(&self) -> Result<Option<Identity>> {
        handlers::auth::handle_refresh_profile(&self.session, &self.api).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::core::error::AppError;
    use crate::router::{GuardPolicy, View};
    use crate::session::{MemoryStorage, TokenStorage, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
    use lib_auth::{encode_claims, Claims};
    use shared::{AuthUser, LoginResponse, User};

    fn token(user_id: &str, email: Option<&str>, role: Option<&str>) -> String {
        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.map(str::to_string),
            role: role.map(str::to_string),
            exp: 4_102_444_800,
            iat: None,
            token_type: Some("access".to_string()),
            jti: None,
        };
        encode_claims(&claims, "test-secret").unwrap()
    }

    #[derive(Default)]
    struct MockApi {
        login: Option<Result<LoginResponse>>,
        user: Option<User>,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ApiService for MockApi {
        async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.login
                .clone()
                .unwrap_or_else(|| Err(AppError::Network("no mock".to_string())))
        }

        async fn login_with_google(&self, _id_token: &str) -> Result<LoginResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.login
                .clone()
                .unwrap_or_else(|| Err(AppError::Network("no mock".to_string())))
        }

        async fn get_user_by_id(&self, id: &str) -> Result<User> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.user
                .clone()
                .filter(|user| user.id == id)
                .ok_or(AppError::Api {
                    status: 404,
                    message: "Not found.".to_string(),
                })
        }
    }

    fn app(api: MockApi, storage: MemoryStorage) -> App<MockApi> {
        let session = SessionStore::restore(storage).shared();
        let router =
            Router::new(default_routes(), session.clone(), GuardPolicy::BlockAndSignal).unwrap();
        App::with_parts(session, api, router)
    }

    fn email_login(access: String) -> LoginResponse {
        LoginResponse {
            access,
            refresh: Some("refresh-1".to_string()),
            user: AuthUser {
                id: Some("u1".to_string()),
                email: Some("a@b.com".to_string()),
                first_name: "Ana".to_string(),
                last_name: "Lopez".to_string(),
                role: Some("author".to_string()),
                img_url: None,
            },
        }
    }

    #[tokio::test]
    async fn test_login_establishes_session() {
        let storage = MemoryStorage::new();
        let api = MockApi {
            login: Some(Ok(email_login(token("u1", None, None)))),
            ..Default::default()
        };
        let mut app = app(api, storage.clone());

        let identity = app.login("a@b.com", "secret123").await.unwrap();

        assert_eq!(identity.id, "u1");
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, "author");
        assert_eq!(identity.display_name(), "Ana Lopez");
        assert!(app.is_authenticated());
        assert_eq!(storage.get(REFRESH_TOKEN_KEY).unwrap().as_deref(), Some("refresh-1"));
        assert!(app.navigate("/profile").is_allowed());
    }

    #[tokio::test]
    async fn test_login_validation_sends_no_request() {
        let app = app(MockApi::default(), MemoryStorage::new());

        assert!(matches!(
            app.login("not-an-email", "secret123").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            app.login("a@b.com", "").await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            app.login_with_google("  ").await,
            Err(AppError::Validation(_))
        ));
        assert_eq!(app.api().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_login_keeps_signed_out() {
        let api = MockApi {
            login: Some(Err(AppError::Api {
                status: 401,
                message: "Invalid credentials".to_string(),
            })),
            ..Default::default()
        };
        let app = app(api, MemoryStorage::new());

        let err = app.login("a@b.com", "wrong-pass1").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert!(!app.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_with_malformed_token_is_rejected() {
        let api = MockApi {
            login: Some(Ok(email_login("not.a.jwt".to_string()))),
            ..Default::default()
        };
        let storage = MemoryStorage::new();
        let app = app(api, storage.clone());

        assert!(matches!(
            app.login("a@b.com", "secret123").await,
            Err(AppError::MalformedToken(_))
        ));
        assert!(!app.is_authenticated());
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn test_google_login_takes_email_and_role_from_token() {
        let response = LoginResponse {
            access: token("u7", Some("g@mail.com"), Some("reader")),
            refresh: None,
            user: AuthUser {
                first_name: "Gil".to_string(),
                last_name: "Ortega".to_string(),
                img_url: Some("https://lh3/avatar.png".to_string()),
                ..Default::default()
            },
        };
        let api = MockApi {
            login: Some(Ok(response)),
            ..Default::default()
        };
        let app = app(api, MemoryStorage::new());

        let identity = app.login_with_google("google-id-token").await.unwrap();
        assert_eq!(identity.email, "g@mail.com");
        assert_eq!(identity.role, "reader");
        assert_eq!(identity.avatar_url.as_deref(), Some("https://lh3/avatar.png"));
    }

    #[tokio::test]
    async fn test_logout_clears_and_goes_home() {
        let storage = MemoryStorage::new();
        let api = MockApi {
            login: Some(Ok(email_login(token("u1", None, None)))),
            ..Default::default()
        };
        let mut app = app(api, storage.clone());
        app.login("a@b.com", "secret123").await.unwrap();
        app.navigate("/dashboard");

        let navigation = app.logout().unwrap();

        assert!(matches!(navigation, Navigation::Allowed(ref home) if home.view() == View::Home));
        assert!(!app.is_authenticated());
        assert!(storage.is_empty());
        assert!(!app.navigate("/dashboard").is_allowed());
        assert!(app.logout().is_ok());
    }

    #[tokio::test]
    async fn test_refresh_profile_after_restore() {
        let storage = MemoryStorage::new();
        storage
            .set(ACCESS_TOKEN_KEY, &token("u1", Some("a@b.com"), Some("author")))
            .unwrap();
        let api = MockApi {
            user: Some(User {
                id: "u1".to_string(),
                first_name: Some("Ana".to_string()),
                last_name: Some("Lopez".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let app = app(api, storage);

        assert_eq!(app.identity().unwrap().display_name(), "");
        let identity = app.refresh_profile().await.unwrap().unwrap();
        assert_eq!(identity.display_name(), "Ana Lopez");
        assert_eq!(identity.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_restored_email_login_needs_refresh_for_role() {
        let storage = MemoryStorage::new();
        storage.set(ACCESS_TOKEN_KEY, &token("u1", None, None)).unwrap();
        let api = MockApi {
            user: Some(User {
                id: "u1".to_string(),
                email: Some("admin@b.com".to_string()),
                role: Some("admin".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let app = app(api, storage);

        let restored = app.identity().unwrap();
        assert_eq!(restored.email, "");
        assert!(!restored.is_admin());

        let identity = app.refresh_profile().await.unwrap().unwrap();
        assert_eq!(identity.email, "admin@b.com");
        assert!(identity.is_admin());
        assert!(app.identity().unwrap().is_admin());
    }

    #[tokio::test]
    async fn test_refresh_profile_without_session() {
        let app = app(MockApi::default(), MemoryStorage::new());
        assert_eq!(app.refresh_profile().await.unwrap(), None);
        assert_eq!(app.api().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_blocked_navigation_raises_prompt() {
        let mut app = app(MockApi::default(), MemoryStorage::new());
        let prompt = app.subscribe_login_prompt();

        assert!(matches!(app.navigate("/posts/new"), Navigation::Blocked { .. }));
        assert!(*prompt.borrow());
        assert_eq!(app.router().current().view(), View::Home);
    }

    #[test]
    fn test_bootstrap_restores_file_session() {
        let dir = tempfile::tempdir().unwrap();
        let session_file = dir.path().join("session.json");
        FileStorage::new(&session_file)
            .set(ACCESS_TOKEN_KEY, &token("u3", Some("c@d.com"), Some("admin")))
            .unwrap();

        let config = ClientConfig {
            session_file,
            ..ClientConfig::from_lookup(|_| None)
        };
        let app = App::bootstrap(&config).unwrap();

        assert!(app.is_authenticated());
        assert!(app.identity().unwrap().is_admin());
        assert_eq!(app.api().base_url(), "http://127.0.0.1:8000");
    }
}
