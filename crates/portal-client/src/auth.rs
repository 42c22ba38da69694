use crate::http::{error_from_response, transport_error};
use crate::PortalClient;
use futures::channel::mpsc;
use futures::StreamExt;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use shared_types::{AppError, AuthUser, Session};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

#[derive(Debug, Serialize)]
struct RecoverRequest<'a> {
    email: &'a str,
}

impl PortalClient {
    /// Begin a session with email and password.
    ///
    /// A successful return means the raw identity check passed — nothing
    /// more. Staff authorization is a separate follow-up check (see
    /// `StaffPortal::sign_in`), and callers must never treat this result
    /// alone as "logged in".
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AppError> {
        let url = self.config().auth_url("token?grant_type=password");
        let response = self
            .request(Method::POST, url)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let err = error_from_response(response).await;
            tracing::debug!(error = %err, "sign-in rejected");
            return Err(err);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::service(format!("malformed token response: {e}")))?;
        let session = Session {
            access_token: token.access_token,
            user: token.user,
        };
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    /// Create a new authentication identity. The service also begins a
    /// session for it, which the registration flow signs out again once the
    /// staff record is in place.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, AppError> {
        let url = self.config().auth_url("signup");
        let response = self
            .request(Method::POST, url)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AppError::service(format!("malformed signup response: {e}")))?;
        let session = Session {
            access_token: token.access_token,
            user: token.user,
        };
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    /// End the current session. The local session slot is cleared even when
    /// the remote call fails, so the visible state is always "not logged
    /// in" afterwards; the error is still returned for logging.
    pub async fn sign_out(&self) -> Result<(), AppError> {
        let Some(held) = self.session() else {
            return Ok(());
        };
        self.set_session(None);

        let url = self.config().auth_url("logout");
        let response = self
            .request(Method::POST, url)
            .bearer_auth(held.access_token)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// The existing session, revalidated against the service.
    ///
    /// Returns `None` when no session is held, and degrades a stale or
    /// revoked token to `None` (clearing the slot) rather than trusting
    /// local state.
    pub async fn current_session(&self) -> Result<Option<Session>, AppError> {
        let Some(held) = self.session() else {
            return Ok(None);
        };

        let url = self.config().auth_url("user");
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.set_session(None);
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let user: AuthUser = response
            .json()
            .await
            .map_err(|e| AppError::service(format!("malformed user response: {e}")))?;
        let session = Session {
            access_token: held.access_token,
            user,
        };
        self.set_session(Some(session.clone()));
        Ok(Some(session))
    }

    /// Ask the service to email a password-reset link.
    ///
    /// The service's success response discloses nothing about whether the
    /// address exists; only transport or request-level failures surface.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let url = self.config().auth_url("recover");
        let response = self
            .request(Method::POST, url)
            .json(&RecoverRequest { email })
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}

/// Receiving end of a session-change subscription.
///
/// Each item is the session value after a change: `Some` on sign-in or
/// restore, `None` after sign-out. Dropping the handle unsubscribes.
pub struct SessionEvents {
    rx: mpsc::UnboundedReceiver<Option<Session>>,
}

impl SessionEvents {
    pub(crate) fn new(rx: mpsc::UnboundedReceiver<Option<Session>>) -> Self {
        Self { rx }
    }

    /// Wait for the next session change. Returns `None` once every sending
    /// client handle has been dropped.
    pub async fn changed(&mut self) -> Option<Option<Session>> {
        self.rx.next().await
    }

    /// Non-blocking poll used by tests.
    pub fn try_next(&mut self) -> Result<Option<Option<Session>>, mpsc::TryRecvError> {
        self.rx.try_next()
    }
}
