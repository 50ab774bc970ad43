//! Identity lookup.

use async_trait::async_trait;

use super::model::User;
use crate::error::Result;

/// Resolves a bearer token to the account it belongs to.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Returns the current user for `token`.
    ///
    /// # Errors
    ///
    /// `BrainstormError::Unauthorized` when the token is missing, expired
    /// or rejected.
    async fn current_user(&self, token: &str) -> Result<User>;
}
