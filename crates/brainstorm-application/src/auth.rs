//! Authentication gate run at the top of every protected page.

use brainstorm_core::error::Result;
use brainstorm_core::notify::Notifier;
use brainstorm_core::storage::{KeyValueStore, TOKEN_KEY};
use brainstorm_core::user::{AuthService, User};
use std::sync::Arc;

/// Why a page sent the user back to the unauthenticated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    LoginRequired,
    SessionExpired,
    AdminRequired,
}

impl RedirectReason {
    pub fn message(&self) -> &'static str {
        match self {
            RedirectReason::LoginRequired => "Please log in first.",
            RedirectReason::SessionExpired => "Your login has expired. Please log in again.",
            RedirectReason::AdminRequired => "Administrator access is required.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(User),
    Redirect(RedirectReason),
}

pub struct AuthGate {
    auth: Arc<dyn AuthService>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
}

impl AuthGate {
    pub fn new(
        auth: Arc<dyn AuthService>,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            auth,
            storage,
            notifier,
        }
    }

    /// The stored bearer token, if any. Unreadable storage counts as none.
    pub fn token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                tracing::warn!(error = %err, "[AuthGate] could not read token");
                None
            }
        }
    }

    /// Resolves the current user from the stored token.
    ///
    /// A missing token redirects. A token the backend rejects is removed
    /// before redirecting.
    pub async fn authenticate(&self) -> AuthOutcome {
        let Some(token) = self.token() else {
            return self.redirect(RedirectReason::LoginRequired);
        };

        match self.auth.current_user(&token).await {
            Ok(user) => {
                tracing::debug!(user_id = user.user_id, "[AuthGate] authenticated");
                AuthOutcome::Authenticated(user)
            }
            Err(err) => {
                tracing::warn!(error = %err, "[AuthGate] token rejected");
                self.logout();
                self.redirect(RedirectReason::SessionExpired)
            }
        }
    }

    /// Like [`authenticate`](Self::authenticate) but also requires the
    /// ADMIN role.
    pub async fn authenticate_admin(&self) -> AuthOutcome {
        match self.authenticate().await {
            AuthOutcome::Authenticated(user) if !user.is_admin() => {
                tracing::warn!(user_id = user.user_id, "[AuthGate] non-admin refused");
                self.redirect(RedirectReason::AdminRequired)
            }
            outcome => outcome,
        }
    }

    /// Verifies `token` and stores it on success.
    pub async fn login(&self, token: &str) -> Result<User> {
        let token = token.trim();
        let user = self.auth.current_user(token).await?;
        self.storage.set(TOKEN_KEY, token)?;
        tracing::info!(user_id = user.user_id, "[AuthGate] logged in");
        Ok(user)
    }

    pub fn logout(&self) {
        if let Err(err) = self.storage.remove(TOKEN_KEY) {
            tracing::warn!(error = %err, "[AuthGate] could not remove token");
        }
    }

    fn redirect(&self, reason: RedirectReason) -> AuthOutcome {
        self.notifier.notify(reason.message());
        AuthOutcome::Redirect(reason)
    }
}
