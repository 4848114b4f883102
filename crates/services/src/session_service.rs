use std::sync::Arc;

use tracing::{debug, info, warn};

use edu_core::model::Session;
use storage::repository::LocalStore;

use crate::api::{AuthApi, AuthRequest};
use crate::error::SessionError;

/// Local storage key holding the serialized session record.
pub const SESSION_STORAGE_KEY: &str = "user";

/// Owns the signed-in user: restores it from local storage, authenticates
/// against the auth endpoint, and forgets it on logout.
#[derive(Clone)]
pub struct SessionService {
    auth: Arc<dyn AuthApi>,
    store: Arc<dyn LocalStore>,
}

impl SessionService {
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, store: Arc<dyn LocalStore>) -> Self {
        Self { auth, store }
    }

    /// Read the persisted session, if any. No network call is made.
    ///
    /// A record that no longer decodes is removed and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if local storage cannot be read.
    pub async fn restore(&self) -> Result<Option<Session>, SessionError> {
        let Some(raw) = self.store.get_item(SESSION_STORAGE_KEY).await? else {
            debug!("no persisted session");
            return Ok(None);
        };

        let decoded = serde_json::from_str::<Session>(&raw)
            .map_err(|err| err.to_string())
            .and_then(|session| session.validated().map_err(|err| err.to_string()));

        match decoded {
            Ok(session) => {
                info!(user_id = %session.id(), "restored persisted session");
                Ok(Some(session))
            }
            Err(reason) => {
                warn!(%reason, "discarding malformed persisted session");
                if let Err(err) = self.store.remove_item(SESSION_STORAGE_KEY).await {
                    warn!(error = %err, "failed to remove malformed session");
                }
                Ok(None)
            }
        }
    }

    /// Sign in with existing credentials.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Rejected` with the server's message, or
    /// `SessionError::Connectivity` if the auth endpoint is unreachable.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        self.authenticate(AuthRequest::Login {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
    }

    /// Create an account and sign in.
    ///
    /// # Errors
    ///
    /// Same as [`SessionService::login`].
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Session, SessionError> {
        self.authenticate(AuthRequest::Register {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        })
        .await
    }

    /// Forget the persisted session. No server call is made.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the entry cannot be removed.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let removed = self.store.remove_item(SESSION_STORAGE_KEY).await?;
        info!(removed, "signed out");
        Ok(())
    }

    async fn authenticate(&self, request: AuthRequest) -> Result<Session, SessionError> {
        let action = request.action();
        let session = match self.auth.authenticate(&request).await {
            Ok(session) => session,
            Err(err) => {
                info!(action, error = %err, "auth failed");
                return Err(err.into());
            }
        };

        // A session that could not be persisted is still usable for this run.
        match serde_json::to_string(&session) {
            Ok(encoded) => {
                if let Err(err) = self.store.set_item(SESSION_STORAGE_KEY, &encoded).await {
                    warn!(error = %err, "failed to persist session");
                }
            }
            Err(err) => warn!(error = %err, "failed to encode session"),
        }

        info!(action, user_id = %session.id(), "authenticated");
        Ok(session)
    }
}
