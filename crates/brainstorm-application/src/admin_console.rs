//! Admin console for answering inquiries.

use brainstorm_core::inquiry::{
    Inquiry, InquiryFilter, InquiryId, InquiryStats, InquiryStore, sort_newest_first,
};
use brainstorm_core::notify::Notifier;
use brainstorm_core::user::User;
use std::sync::Arc;

use crate::auth::{AuthGate, AuthOutcome};
use crate::intent::{AdminIntent, PageLoad};

#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    pub admin: User,
    /// Every inquiry, newest first.
    pub inquiries: Vec<Inquiry>,
    pub filter: InquiryFilter,
    pub selected: Option<Inquiry>,
}

impl AdminState {
    pub fn stats(&self) -> InquiryStats {
        InquiryStats::from_inquiries(&self.inquiries)
    }

    /// Inquiries passing the current filter.
    pub fn visible(&self) -> impl Iterator<Item = &Inquiry> {
        self.inquiries.iter().filter(|i| self.filter.matches(i))
    }
}

pub struct AdminConsole {
    gate: Arc<AuthGate>,
    inquiries: Arc<dyn InquiryStore>,
    notifier: Arc<dyn Notifier>,
}

impl AdminConsole {
    pub fn new(
        gate: Arc<AuthGate>,
        inquiries: Arc<dyn InquiryStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            gate,
            inquiries,
            notifier,
        }
    }

    pub async fn open(&self) -> PageLoad<AdminState> {
        let admin = match self.gate.authenticate_admin().await {
            AuthOutcome::Authenticated(admin) => admin,
            AuthOutcome::Redirect(reason) => return PageLoad::Redirect(reason),
        };
        let mut state = AdminState {
            admin,
            inquiries: Vec::new(),
            filter: InquiryFilter::All,
            selected: None,
        };
        if self.reload(&mut state).await {
            PageLoad::Ready(state)
        } else {
            PageLoad::Failed
        }
    }

    pub async fn dispatch(&self, state: &mut AdminState, intent: AdminIntent) -> bool {
        match intent {
            AdminIntent::Reload => self.reload(state).await,
            AdminIntent::Filter(filter) => {
                state.filter = filter;
                true
            }
            AdminIntent::Show(id) => self.show(state, id).await,
            AdminIntent::Reply { id, reply } => self.reply(state, id, &reply).await,
        }
    }

    pub async fn reload(&self, state: &mut AdminState) -> bool {
        match self.inquiries.list_all().await {
            Ok(mut inquiries) => {
                sort_newest_first(&mut inquiries);
                state.inquiries = inquiries;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "[AdminConsole] failed to load inquiries");
                self.notifier.notify("Could not load inquiries.");
                false
            }
        }
    }

    pub async fn show(&self, state: &mut AdminState, id: InquiryId) -> bool {
        match self.inquiries.find_by_id(id).await {
            Ok(inquiry) => {
                state.selected = Some(inquiry);
                true
            }
            Err(err) => {
                tracing::error!(inquiry_id = id, error = %err, "[AdminConsole] failed to load inquiry");
                self.notifier.notify("Could not open that inquiry.");
                false
            }
        }
    }

    pub async fn reply(&self, state: &mut AdminState, id: InquiryId, reply: &str) -> bool {
        let reply = reply.trim();
        if reply.is_empty() {
            self.notifier.notify("Please write a reply first.");
            return false;
        }

        match self.inquiries.reply(id, reply).await {
            Ok(answered) => {
                tracing::info!(inquiry_id = id, admin = state.admin.user_id, "[AdminConsole] reply sent");
                self.notifier.notify("Reply sent.");
                if state.selected.as_ref().is_some_and(|s| s.id == id) {
                    state.selected = Some(answered);
                }
                self.reload(state).await;
                true
            }
            Err(err) => {
                tracing::error!(inquiry_id = id, error = %err, "[AdminConsole] reply failed");
                self.notifier.notify("Could not send the reply.");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::RedirectReason;
    use crate::test_support::{MockAuth, MockInquiryStore, RecordingNotifier, inquiry, user};
    use brainstorm_core::inquiry::InquiryStatus;
    use brainstorm_core::storage::TOKEN_KEY;
    use brainstorm_core::user::Role;
    use brainstorm_infrastructure::MemoryKeyValueStore;
    use pretty_assertions::assert_eq;

    fn console(role: Role, store: Arc<MockInquiryStore>) -> AdminConsole {
        let notifier = Arc::new(RecordingNotifier::new());
        let storage = Arc::new(MemoryKeyValueStore::with_entries([(TOKEN_KEY, "good")]));
        let gate = Arc::new(AuthGate::new(
            Arc::new(MockAuth::new("good", user(1, role))),
            storage,
            notifier.clone(),
        ));
        AdminConsole::new(gate, store, notifier)
    }

    fn seeded() -> Arc<MockInquiryStore> {
        Arc::new(MockInquiryStore::with(vec![
            inquiry(1, 42, InquiryStatus::Pending, "2025-01-01T09:00:00"),
            inquiry(2, 43, InquiryStatus::Closed, "2025-01-03T09:00:00"),
            inquiry(3, 44, InquiryStatus::Pending, "2025-01-02T09:00:00"),
        ]))
    }

    #[tokio::test]
    async fn test_non_admin_is_redirected() {
        let load = console(Role::User, seeded()).open().await;
        assert_eq!(load, PageLoad::Redirect(RedirectReason::AdminRequired));
    }

    #[tokio::test]
    async fn test_stats_and_filter() {
        let console = console(Role::Admin, seeded());
        let mut state = console.open().await.ready().unwrap();

        assert_eq!(
            state.stats(),
            InquiryStats {
                pending: 2,
                answered: 0,
                closed: 1,
                total: 3
            }
        );
        assert_eq!(
            state.visible().map(|i| i.id).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );

        console
            .dispatch(&mut state, AdminIntent::Filter(InquiryFilter::Status(InquiryStatus::Pending)))
            .await;
        assert_eq!(state.visible().map(|i| i.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[tokio::test]
    async fn test_reply_updates_and_reloads() {
        let store = seeded();
        let console = console(Role::Admin, store.clone());
        let mut state = console.open().await.ready().unwrap();
        console.show(&mut state, 1).await;

        assert!(!console.reply(&mut state, 1, "   ").await);
        assert!(
            console
                .dispatch(
                    &mut state,
                    AdminIntent::Reply {
                        id: 1,
                        reply: "Fixed now".to_string()
                    }
                )
                .await
        );

        assert_eq!(store.writes(), vec!["reply:1"]);
        let selected = state.selected.clone().unwrap();
        assert_eq!(selected.status, InquiryStatus::Answered);
        assert_eq!(selected.reply.as_deref(), Some("Fixed now"));
        assert_eq!(state.stats().answered, 1);
    }
}
