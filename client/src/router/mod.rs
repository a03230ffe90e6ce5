//! # Router
//!
//! Path-based navigation with an authentication gate.
//!
//! Every [`Router::navigate`] call resolves the path against the route table
//! and runs the guard against the injected session. The check never touches
//! the network.
//!
//! ```rust
//! use blog_client::router::{routes::default_routes, GuardPolicy, Navigation, Router};
//! use blog_client::session::{MemoryStorage, SessionStore};
//!
//! let session = SessionStore::new(MemoryStorage::new()).shared();
//! let mut router = Router::new(default_routes(), session.clone(), GuardPolicy::default()).unwrap();
//!
//! assert!(matches!(router.navigate("/dashboard"), Navigation::Blocked { .. }));
//! assert!(session.read().login_prompt_pending());
//! assert_eq!(router.current().path, "/");
//! ```

pub mod guard;
pub mod routes;

pub use guard::{GuardDecision, GuardPolicy};
pub use routes::{Route, RouteMatch, View};

use crate::core::error::{AppError, Result};
use crate::session::SharedSession;

/// Result of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The target is now the current route.
    Allowed(RouteMatch),
    /// Protected target without a session; the current route is unchanged
    /// and the login prompt was raised.
    Blocked { attempted: RouteMatch },
    /// Protected target without a session; moved to the home route instead.
    Redirected(RouteMatch),
    /// No route matches the path; the current route is unchanged.
    NotFound { path: String },
}

impl Navigation {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Navigation::Allowed(_))
    }
}

/// Route table plus the last allowed route.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    session: SharedSession,
    policy: GuardPolicy,
    current: RouteMatch,
}

impl Router {
    /// The table must contain a public `/` route: it is the starting point
    /// and the redirect target.
    pub fn new(routes: Vec<Route>, session: SharedSession, policy: GuardPolicy) -> Result<Self> {
        let home = routes::resolve(&routes, "/")
            .filter(|m| m.route.is_home() && !m.route.requires_auth)
            .ok_or_else(|| {
                AppError::Validation("route table needs a public home route '/'".to_string())
            })?;

        Ok(Self {
            routes,
            session,
            policy,
            current: home,
        })
    }

    pub fn current(&self) -> &RouteMatch {
        &self.current
    }

    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn navigate(&mut self, path: &str) -> Navigation {
        let Some(target) = routes::resolve(&self.routes, path) else {
            tracing::warn!(path = path, "No route matches path");
            return Navigation::NotFound {
                path: routes::normalize_path(path),
            };
        };

        let authenticated = self.session.read().is_authenticated();
        match guard::check(&target.route, authenticated) {
            GuardDecision::Allow => {
                tracing::debug!(path = %target.path, view = target.view().title(), "Navigated");
                self.current = target.clone();
                Navigation::Allowed(target)
            }
            GuardDecision::Deny => match self.policy {
                GuardPolicy::BlockAndSignal => {
                    tracing::info!(
                        "Access denied: {} requires authentication, prompting for login",
                        target.view().title()
                    );
                    self.session.read().require_login();
                    Navigation::Blocked { attempted: target }
                }
                GuardPolicy::RedirectHome => {
                    tracing::info!(
                        "Access denied: {} requires authentication, redirecting to Home",
                        target.view().title()
                    );
                    let home = self.home();
                    self.current = home.clone();
                    Navigation::Redirected(home)
                }
            },
        }
    }

    fn home(&self) -> RouteMatch {
        // `new` guarantees the home route exists
        routes::resolve(&self.routes, "/").unwrap_or_else(|| self.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemoryStorage, SessionStore};
    use shared::AuthUser;

    fn token_for(user_id: &str) -> String {
        let claims = lib_auth::Claims {
            user_id: user_id.to_string(),
            email: Some("a@b.com".to_string()),
            role: Some("author".to_string()),
            exp: 4_102_444_800,
            iat: None,
            token_type: Some("access".to_string()),
            jti: None,
        };
        lib_auth::encode_claims(&claims, "test-secret").unwrap()
    }

    fn router(policy: GuardPolicy) -> (Router, SharedSession) {
        let session = SessionStore::new(MemoryStorage::new()).shared();
        let router = Router::new(routes::default_routes(), session.clone(), policy).unwrap();
        (router, session)
    }

    #[test]
    fn test_starts_at_home() {
        let (router, _) = router(GuardPolicy::default());
        assert_eq!(router.current().view(), View::Home);
    }

    #[test]
    fn test_public_navigation_without_session() {
        let (mut router, session) = router(GuardPolicy::default());

        let nav = router.navigate("/posts/42");
        assert!(nav.is_allowed());
        assert_eq!(router.current().param("id"), Some("42"));
        assert!(!session.read().login_prompt_pending());
    }

    #[test]
    fn test_block_and_signal() {
        let (mut router, session) = router(GuardPolicy::BlockAndSignal);
        router.navigate("/resources");

        match router.navigate("/profile") {
            Navigation::Blocked { attempted } => assert_eq!(attempted.view(), View::Profile),
            other => panic!("expected Blocked, got {:?}", other),
        }
        assert_eq!(router.current().view(), View::Resources);
        assert!(session.read().login_prompt_pending());
        assert!(!session.read().is_authenticated());
    }

    #[test]
    fn test_redirect_home() {
        let (mut router, session) = router(GuardPolicy::RedirectHome);
        router.navigate("/categories");

        match router.navigate("/posts/new") {
            Navigation::Redirected(home) => assert_eq!(home.view(), View::Home),
            other => panic!("expected Redirected, got {:?}", other),
        }
        assert_eq!(router.current().view(), View::Home);
        assert!(!session.read().login_prompt_pending());
    }

    #[test]
    fn test_protected_navigation_with_session() {
        let (mut router, session) = router(GuardPolicy::default());
        session
            .write()
            .set_session(&token_for("u1"), None, &AuthUser::default())
            .unwrap();

        assert!(router.navigate("/dashboard").is_allowed());
        assert_eq!(router.current().view(), View::Dashboard);

        session.write().clear_session().unwrap();
        assert!(!router.navigate("/contact").is_allowed());
        assert_eq!(router.current().view(), View::Dashboard);
    }

    #[test]
    fn test_not_found_keeps_current() {
        let (mut router, _) = router(GuardPolicy::default());
        router.navigate("/login");

        assert_eq!(
            router.navigate("/nowhere/?x=1"),
            Navigation::NotFound {
                path: "/nowhere".to_string()
            }
        );
        assert_eq!(router.current().view(), View::Login);
    }

    #[test]
    fn test_table_without_public_home_is_rejected() {
        let session = SessionStore::new(MemoryStorage::new()).shared();
        let routes = vec![Route::protected("/", View::Home), Route::new("/posts", View::Posts)];
        assert!(matches!(
            Router::new(routes, session.clone(), GuardPolicy::default()),
            Err(AppError::Validation(_))
        ));
        assert!(Router::new(Vec::new(), session, GuardPolicy::default()).is_err());
    }
}
