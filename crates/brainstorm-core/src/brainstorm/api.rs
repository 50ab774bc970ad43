//! AI session backend trait.

use async_trait::async_trait;

use super::model::{SessionId, SessionStarted};
use crate::error::Result;
use crate::idea::GeneratedIdea;

/// The AI brainstorming backend, one method per wizard round trip.
#[async_trait]
pub trait BrainstormApi: Send + Sync {
    /// Opens a new ephemeral session.
    async fn start_session(&self) -> Result<SessionStarted>;

    /// Records what the user wants ideas for. Returns the server's message.
    async fn submit_purpose(&self, session: &SessionId, purpose: &str) -> Result<String>;

    /// Warm-up questions tailored to the purpose.
    async fn warmup_questions(&self, session: &SessionId) -> Result<Vec<String>>;

    /// Acknowledges the warm-up step.
    async fn confirm_warmup(&self, session: &SessionId) -> Result<String>;

    /// Submits the free-association keywords. Returns how many were accepted.
    async fn submit_associations(&self, session: &SessionId, keywords: &[String]) -> Result<usize>;

    /// Generates ideas from everything gathered so far.
    async fn generate_ideas(&self, session: &SessionId) -> Result<Vec<GeneratedIdea>>;

    /// Drops the session and its ephemeral data.
    async fn delete_session(&self, session: &SessionId) -> Result<()>;
}
