//! # Authentication Handlers
//!
//! Login, Google login, logout and profile refresh.

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::router::{Navigation, Router};
use crate::session::{Identity, SharedSession};
use crate::utils::validation::{validate_email, validate_password};

/// Validate, call the login endpoint and establish the session.
///
/// Internal handler function - use [`crate::app::App::login`] instead.
pub(crate) async fn handle_login<A: ApiService + ?Sized>(
    session: &SharedSession,
    api: &A,
    email: &str,
    password: &str,
) -> Result<Identity> {
    validate_email(email).into_result()?;
    validate_password(password).into_result()?;

    let response = api.login(email.trim(), password).await?;
    // Write guard only after the await
    let identity = session.write().set_from_login(&response)?;
    Ok(identity)
}

/// Internal handler function - use [`crate::app::App::login_with_google`] instead.
pub(crate) async fn handle_google_login<A: ApiService + ?Sized>(
    session: &SharedSession,
    api: &A,
    id_token: &str,
) -> Result<Identity> {
    if id_token.trim().is_empty() {
        return Err(AppError::Validation("Google credential is required".to_string()));
    }

    let response = api.login_with_google(id_token).await?;
    let identity = session.write().set_from_login(&response)?;
    Ok(identity)
}

/// Clear the session and go home. Navigation happens even when the durable
/// storage could not be purged; that error is returned afterwards.
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn handle_logout(session: &SharedSession, router: &mut Router) -> Result<Navigation> {
    let cleared = session.write().clear_session();
    let navigation = router.navigate("/");
    cleared?;
    Ok(navigation)
}

/// Fill the identity's names and avatar from the user record.
///
/// Internal handler function - use [`crate::app::App::refresh_profile`] instead.
pub(crate) async fn handle_refresh_profile<A: ApiService + ?Sized>(
    session: &SharedSession,
    api: &A,
) -> Result<Option<Identity>> {
    let user_id = session.read().identity().map(|identity| identity.id.clone());
    let Some(user_id) = user_id else {
        return Ok(None);
    };

    let user = api.get_user_by_id(&user_id).await?;

    let mut session = session.write();
    session.update_profile(&user);
    Ok(session.identity().cloned())
}
