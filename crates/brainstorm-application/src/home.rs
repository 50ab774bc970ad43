//! The "My Ideas" home page.

use brainstorm_core::idea::{Idea, IdeaId, IdeaStore};
use brainstorm_core::notify::Notifier;
use brainstorm_core::user::User;
use chrono::NaiveDateTime;
use std::sync::Arc;

use crate::auth::{AuthGate, AuthOutcome};
use crate::intent::{HomeIntent, PageLoad};
use crate::session_linker::{LinkOutcome, SessionLinker};

/// Page-scoped state, built fresh on every load.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub user: User,
    pub ideas: Vec<Idea>,
    pub idea_count: u64,
    pub link: LinkOutcome,
    /// Idea opened by the last `ShowIdea` intent.
    pub selected: Option<IdeaView>,
}

/// An idea prepared for display.
///
/// Generated-idea JSON content is unpacked; anything else is shown raw as
/// the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaView {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    pub analysis: Option<String>,
    pub purpose: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

impl From<&Idea> for IdeaView {
    fn from(idea: &Idea) -> Self {
        let (description, analysis) = match idea.generated_content() {
            Some(content) => (
                content.description,
                Some(content.analysis).filter(|a| !a.is_empty()),
            ),
            None => (idea.content.clone(), None),
        };
        Self {
            id: idea.id,
            title: idea.title.clone(),
            description,
            analysis,
            purpose: idea.purpose.clone(),
            created_at: idea.created_at,
        }
    }
}

pub struct HomePage {
    gate: Arc<AuthGate>,
    linker: SessionLinker,
    ideas: Arc<dyn IdeaStore>,
    notifier: Arc<dyn Notifier>,
}

impl HomePage {
    pub fn new(
        gate: Arc<AuthGate>,
        linker: SessionLinker,
        ideas: Arc<dyn IdeaStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gate,
            linker,
            ideas,
            notifier,
        }
    }

    /// Page load: auth gate, then the session linker, then the idea list.
    pub async fn load(&self) -> PageLoad<HomeState> {
        let user = match self.gate.authenticate().await {
            AuthOutcome::Authenticated(user) => user,
            AuthOutcome::Redirect(reason) => return PageLoad::Redirect(reason),
        };

        let link = self.linker.link_pending(user.user_id).await;

        let mut state = HomeState {
            user,
            ideas: Vec::new(),
            idea_count: 0,
            link,
            selected: None,
        };
        if self.refresh(&mut state).await {
            PageLoad::Ready(state)
        } else {
            PageLoad::Failed
        }
    }

    pub async fn dispatch(&self, state: &mut HomeState, intent: HomeIntent) {
        match intent {
            HomeIntent::Reload => {
                self.refresh(state).await;
            }
            HomeIntent::ShowIdea(id) => {
                state.selected = self.show_idea(id).await;
            }
            HomeIntent::DeleteIdea(id) => {
                self.delete_idea(state, id).await;
            }
        }
    }

    /// Reloads the idea list and count. Returns false after notifying.
    pub async fn refresh(&self, state: &mut HomeState) -> bool {
        let user_id = state.user.user_id;
        let loaded = async {
            let ideas = self.ideas.list_by_user(user_id).await?;
            let count = self.ideas.count_by_user(user_id).await?;
            Ok::<_, brainstorm_core::BrainstormError>((ideas, count))
        }
        .await;

        match loaded {
            Ok((ideas, count)) => {
                state.ideas = ideas;
                state.idea_count = count;
                true
            }
            Err(err) => {
                tracing::error!(user_id, error = %err, "[HomePage] failed to load ideas");
                self.notifier.notify("Could not load your ideas. Please try again.");
                false
            }
        }
    }

    pub async fn show_idea(&self, id: IdeaId) -> Option<IdeaView> {
        match self.ideas.find_by_id(id).await {
            Ok(idea) => Some(IdeaView::from(&idea)),
            Err(err) => {
                tracing::error!(idea_id = id, error = %err, "[HomePage] failed to load idea");
                self.notifier.notify("Could not open that idea.");
                None
            }
        }
    }

    /// Deletes an idea after confirmation. Returns true when it was deleted.
    pub async fn delete_idea(&self, state: &mut HomeState, id: IdeaId) -> bool {
        if !self.notifier.confirm("Delete this idea?") {
            return false;
        }

        match self.ideas.delete(id).await {
            Ok(()) => {
                let before = state.ideas.len();
                state.ideas.retain(|idea| idea.id != id);
                if state.ideas.len() < before {
                    state.idea_count = state.idea_count.saturating_sub(1);
                }
                if state.selected.as_ref().is_some_and(|v| v.id == id) {
                    state.selected = None;
                }
                self.notifier.notify("Idea deleted.");
                true
            }
            Err(err) => {
                tracing::error!(idea_id = id, error = %err, "[HomePage] failed to delete idea");
                self.notifier.notify("Could not delete the idea.");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::RedirectReason;
    use crate::test_support::{MockAuth, MockIdeaStore, RecordingNotifier, user};
    use brainstorm_core::storage::{PENDING_GUEST_SESSION_KEY, TOKEN_KEY};
    use brainstorm_core::user::Role;
    use brainstorm_infrastructure::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    fn idea(id: IdeaId, user_id: i64, content: &str) -> Idea {
        Idea {
            id,
            user_id: Some(user_id),
            title: format!("idea {id}"),
            content: content.to_string(),
            purpose: None,
            created_at: None,
        }
    }

    fn page(
        storage: Arc<MemoryKeyValueStore>,
        ideas: Arc<MockIdeaStore>,
        notifier: Arc<RecordingNotifier>,
    ) -> HomePage {
        let gate = Arc::new(AuthGate::new(
            Arc::new(MockAuth::new("good", user(42, Role::User))),
            storage.clone(),
            notifier.clone(),
        ));
        let linker = SessionLinker::new(ideas.clone(), storage, notifier.clone());
        HomePage::new(gate, linker, ideas, notifier)
    }

    #[tokio::test]
    async fn test_load_links_then_lists() {
        let storage = Arc::new(MemoryKeyValueStore::with_entries([
            (TOKEN_KEY, "good"),
            (PENDING_GUEST_SESSION_KEY, "guest-abc123"),
        ]));
        let ideas = Arc::new(MockIdeaStore {
            link_result: Ok(3),
            ..MockIdeaStore::with_ideas(vec![idea(1, 42, "raw"), idea(2, 7, "other")])
        });
        let notifier = Arc::new(RecordingNotifier::new());

        let state = page(storage.clone(), ideas.clone(), notifier.clone())
            .load()
            .await
            .ready()
            .unwrap();

        assert_eq!(state.link.linked_count(), 3);
        assert_eq!(state.ideas.len(), 1);
        assert_eq!(state.idea_count, 1);
        assert_eq!(ideas.link_calls(), vec![("guest-abc123".to_string(), 42)]);
        assert_eq!(storage.peek(PENDING_GUEST_SESSION_KEY), None);
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_load_without_token_never_links() {
        let storage = Arc::new(MemoryKeyValueStore::with_entries([(
            PENDING_GUEST_SESSION_KEY,
            "guest-abc123",
        )]));
        let ideas = Arc::new(MockIdeaStore::new());
        let notifier = Arc::new(RecordingNotifier::new());

        let load = page(storage.clone(), ideas.clone(), notifier).load().await;

        assert_eq!(load, PageLoad::Redirect(RedirectReason::LoginRequired));
        assert!(ideas.link_calls().is_empty());
        assert_eq!(
            storage.peek(PENDING_GUEST_SESSION_KEY).as_deref(),
            Some("guest-abc123")
        );
    }

    #[tokio::test]
    async fn test_list_failure_notifies() {
        let storage = Arc::new(MemoryKeyValueStore::with_entries([(TOKEN_KEY, "good")]));
        let ideas = Arc::new(MockIdeaStore {
            fail_list: true,
            ..MockIdeaStore::new()
        });
        let notifier = Arc::new(RecordingNotifier::new());

        let load = page(storage, ideas, notifier.clone()).load().await;

        assert_eq!(load, PageLoad::Failed);
        assert_eq!(
            notifier.messages(),
            vec!["Could not load your ideas. Please try again."]
        );
    }

    #[tokio::test]
    async fn test_show_and_delete_idea() {
        let content = r#"{"description":"Rent tools","analysis":"","generatedAt":"2025-01-01T00:00:00Z"}"#;
        let storage = Arc::new(MemoryKeyValueStore::with_entries([(TOKEN_KEY, "good")]));
        let ideas = Arc::new(MockIdeaStore::with_ideas(vec![
            idea(1, 42, content),
            idea(2, 42, "plain"),
        ]));
        let notifier = Arc::new(RecordingNotifier::new());
        let page = page(storage, ideas, notifier.clone());
        let mut state = page.load().await.ready().unwrap();

        page.dispatch(&mut state, HomeIntent::ShowIdea(1)).await;
        let view = state.selected.clone().unwrap();
        assert_eq!(view.description, "Rent tools");
        assert_eq!(view.analysis, None);

        page.dispatch(&mut state, HomeIntent::DeleteIdea(1)).await;
        assert_eq!(state.selected, None);
        assert_eq!(state.ideas.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(state.idea_count, 1);
        assert_eq!(notifier.messages(), vec!["Idea deleted."]);
    }

    #[tokio::test]
    async fn test_delete_declined_keeps_idea() {
        let storage = Arc::new(MemoryKeyValueStore::with_entries([(TOKEN_KEY, "good")]));
        let ideas = Arc::new(MockIdeaStore::with_ideas(vec![idea(1, 42, "plain")]));
        let notifier = Arc::new(RecordingNotifier::answering(false));
        let page = page(storage, ideas, notifier);
        let mut state = page.load().await.ready().unwrap();

        assert!(!page.delete_idea(&mut state, 1).await);
        assert_eq!(state.ideas.len(), 1);
    }

    #[test]
    fn test_raw_content_view() {
        let view = IdeaView::from(&idea(3, 1, "just text"));
        assert_eq!(view.description, "just text");
        assert_eq!(view.analysis, None);
    }
}
