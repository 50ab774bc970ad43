//! Reconciles guest-owned ideas with a newly identified user.
//!
//! Ideas saved before login are owned by the AI session id, and a
//! pending-link marker holding that id is left in local storage. The first
//! authenticated page load afterwards hands those ideas over to the user
//! and drops the marker, whatever the backend answered.

use brainstorm_core::error::BrainstormError;
use brainstorm_core::idea::{GuestSessionId, IdeaStore, UserId};
use brainstorm_core::notify::Notifier;
use brainstorm_core::storage::{KeyValueStore, PENDING_GUEST_SESSION_KEY};
use std::sync::Arc;

/// What a link attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// No marker was stored; nothing was sent or written.
    NoPendingSession,
    /// The backend reassigned `count` ideas (possibly zero).
    Linked { guest: GuestSessionId, count: u32 },
    /// The reassignment request failed. The marker is gone anyway.
    Failed {
        guest: GuestSessionId,
        error: BrainstormError,
    },
}

impl LinkOutcome {
    /// Ideas recovered by this attempt.
    pub fn linked_count(&self) -> u32 {
        match self {
            LinkOutcome::Linked { count, .. } => *count,
            _ => 0,
        }
    }
}

pub struct SessionLinker {
    ideas: Arc<dyn IdeaStore>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
}

impl SessionLinker {
    pub fn new(
        ideas: Arc<dyn IdeaStore>,
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            ideas,
            storage,
            notifier,
        }
    }

    /// Links the pending guest session, if any, to `user_id`.
    ///
    /// Issues at most one reassignment request and removes the marker
    /// exactly once whenever one was found. Never fails: backend errors are
    /// logged and reported through the returned [`LinkOutcome`] only.
    pub async fn link_pending(&self, user_id: UserId) -> LinkOutcome {
        let Some(guest) = self.pending_guest() else {
            return LinkOutcome::NoPendingSession;
        };

        let result = self.ideas.link_guest_ideas(&guest, user_id).await;
        self.clear_marker();

        match result {
            Ok(count) => {
                tracing::info!(guest = %guest, user_id, count, "[SessionLinker] guest ideas linked");
                if count > 0 {
                    self.notifier.notify(&format!(
                        "{count} idea(s) you saved before logging in are now in My Ideas."
                    ));
                }
                LinkOutcome::Linked { guest, count }
            }
            Err(error) => {
                tracing::error!(guest = %guest, user_id, error = %error, "[SessionLinker] failed to link guest ideas");
                LinkOutcome::Failed { guest, error }
            }
        }
    }

    fn pending_guest(&self) -> Option<GuestSessionId> {
        let stored = match self.storage.get(PENDING_GUEST_SESSION_KEY) {
            Ok(value) => value?,
            Err(err) => {
                tracing::warn!(error = %err, "[SessionLinker] could not read pending guest session");
                return None;
            }
        };

        if stored.trim().is_empty() {
            tracing::debug!("[SessionLinker] discarding blank pending guest session");
            self.clear_marker();
            return None;
        }
        Some(GuestSessionId::new(stored))
    }

    fn clear_marker(&self) {
        if let Err(err) = self.storage.remove(PENDING_GUEST_SESSION_KEY) {
            tracing::warn!(error = %err, "[SessionLinker] could not clear pending guest session");
        }
    }
}
