//! Remote idea store trait.

use async_trait::async_trait;

use super::model::{GuestSessionId, Idea, IdeaId, NewIdea, UserId};
use crate::error::Result;

/// Persisted idea records owned by the application backend.
///
/// Implementations are thin request/response adapters; none of these calls
/// is retried.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Persists one idea and returns the stored record.
    async fn create(&self, idea: &NewIdea) -> Result<Idea>;

    /// Fetches one idea by id.
    async fn find_by_id(&self, id: IdeaId) -> Result<Idea>;

    /// Lists every idea owned by the given user.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Idea>>;

    /// Deletes an idea.
    async fn delete(&self, id: IdeaId) -> Result<()>;

    /// Number of ideas owned by the given user.
    async fn count_by_user(&self, user_id: UserId) -> Result<u64>;

    /// Reassigns every idea owned by `guest` to `user_id`.
    ///
    /// Returns how many ideas changed owner. Must succeed with `0` when
    /// nothing matches, including when the ideas were already reassigned.
    async fn link_guest_ideas(&self, guest: &GuestSessionId, user_id: UserId) -> Result<u32>;
}
