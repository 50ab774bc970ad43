//! Persists the ideas generated by a wizard run.
//!
//! Logged-in users own the saved ideas directly. Guests save under the AI
//! session id and leave a pending-link marker behind so the ideas can be
//! claimed after login (see [`SessionLinker`](crate::SessionLinker)).

use brainstorm_core::brainstorm::{BrainstormApi, SessionId};
use brainstorm_core::error::Result;
use brainstorm_core::idea::{DEFAULT_PURPOSE, GeneratedIdea, IdeaOwner, IdeaStore, NewIdea};
use brainstorm_core::notify::Notifier;
use brainstorm_core::storage::{KeyValueStore, PENDING_GUEST_SESSION_KEY, TOKEN_KEY};
use brainstorm_core::user::AuthService;
use chrono::Utc;
use futures::future::try_join_all;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    NothingToSave,
    SavedAsUser { count: usize },
    SavedAsGuest { count: usize, login_now: bool },
    Failed,
}

pub struct IdeaSaver {
    ideas: Arc<dyn IdeaStore>,
    auth: Arc<dyn AuthService>,
    api: Arc<dyn BrainstormApi>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
}

impl IdeaSaver {
    pub fn new(
        ideas: Arc<dyn IdeaStore>,
        auth: Arc<dyn AuthService>,
        api: Arc<dyn BrainstormApi>,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            ideas,
            auth,
            api,
            storage,
            notifier,
        }
    }

    /// Saves every generated idea of `session`.
    ///
    /// All creates run concurrently and the first failure aborts the save;
    /// ideas created before it are not rolled back.
    pub async fn save(
        &self,
        session: Option<&SessionId>,
        purpose: Option<&str>,
        generated: &[GeneratedIdea],
    ) -> SaveOutcome {
        if generated.is_empty() {
            self.notifier.notify("There are no ideas to save.");
            return SaveOutcome::NothingToSave;
        }
        let purpose = purpose
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PURPOSE);

        let token = match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(err) => {
                tracing::warn!(error = %err, "[IdeaSaver] could not read token, saving as guest");
                None
            }
        };

        let outcome = match (token, session) {
            (Some(token), _) => self.save_as_user(&token, purpose, generated).await,
            (None, Some(session)) => self.save_as_guest(session, purpose, generated).await,
            (None, None) => {
                tracing::error!("[IdeaSaver] guest save without a session id");
                self.notifier.notify("Failed to save ideas: the session has ended.");
                return SaveOutcome::Failed;
            }
        };

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "[IdeaSaver] failed to save ideas");
                self.notifier.notify(&format!("Failed to save ideas.\n\n{err}"));
                return SaveOutcome::Failed;
            }
        };

        if let Some(session) = session {
            self.cleanup_session(session).await;
        }

        match outcome {
            SaveOutcome::SavedAsGuest { count, .. } => {
                self.notifier.notify(
                    "Your ideas were saved temporarily.\n\nLog in to find them under My Ideas.",
                );
                let login_now = self.notifier.confirm("Log in now?");
                SaveOutcome::SavedAsGuest { count, login_now }
            }
            other => {
                self.notifier.notify("Your ideas were saved.");
                other
            }
        }
    }

    async fn save_as_user(
        &self,
        token: &str,
        purpose: &str,
        generated: &[GeneratedIdea],
    ) -> Result<SaveOutcome> {
        let user = self.auth.current_user(token).await?;
        let count = self
            .create_all(IdeaOwner::User(user.user_id), purpose, generated)
            .await?;
        tracing::info!(user_id = user.user_id, count, "[IdeaSaver] saved ideas");
        Ok(SaveOutcome::SavedAsUser { count })
    }

    async fn save_as_guest(
        &self,
        session: &SessionId,
        purpose: &str,
        generated: &[GeneratedIdea],
    ) -> Result<SaveOutcome> {
        let count = self
            .create_all(IdeaOwner::Guest(session.clone()), purpose, generated)
            .await?;
        self.storage.set(PENDING_GUEST_SESSION_KEY, session.as_str())?;
        tracing::info!(guest = %session, count, "[IdeaSaver] saved ideas as guest");
        Ok(SaveOutcome::SavedAsGuest {
            count,
            login_now: false,
        })
    }

    async fn create_all(
        &self,
        owner: IdeaOwner,
        purpose: &str,
        generated: &[GeneratedIdea],
    ) -> Result<usize> {
        let generated_at = Utc::now();
        let requests = generated
            .iter()
            .map(|idea| NewIdea::from_generated(idea, owner.clone(), purpose, generated_at))
            .collect::<Result<Vec<_>>>()?;

        let created = try_join_all(requests.iter().map(|idea| self.ideas.create(idea))).await?;
        Ok(created.len())
    }

    /// Drops the ephemeral AI session. Failures are logged and ignored.
    async fn cleanup_session(&self, session: &SessionId) {
        if let Err(err) = self.api.delete_session(session).await {
            tracing::warn!(session_id = %session, error = %err, "[IdeaSaver] could not delete AI session");
        }
    }
}
