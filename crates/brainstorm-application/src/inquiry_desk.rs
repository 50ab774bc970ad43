//! Customer support desk: a user's own inquiries.

use brainstorm_core::error::Result;
use brainstorm_core::inquiry::{
    Inquiry, InquiryId, InquiryStore, InquiryUpdate, NewInquiry, sort_newest_first,
};
use brainstorm_core::notify::Notifier;
use brainstorm_core::user::User;
use std::sync::Arc;

use crate::auth::{AuthGate, AuthOutcome};
use crate::intent::{InquiryIntent, PageLoad};

#[derive(Debug, Clone, PartialEq)]
pub struct InquiryDeskState {
    pub user: User,
    /// Own inquiries, newest first.
    pub inquiries: Vec<Inquiry>,
    pub selected: Option<Inquiry>,
}

pub struct InquiryDesk {
    gate: Arc<AuthGate>,
    inquiries: Arc<dyn InquiryStore>,
    notifier: Arc<dyn Notifier>,
}

impl InquiryDesk {
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

    pub async fn open(&self) -> PageLoad<InquiryDeskState> {
        let user = match self.gate.authenticate().await {
            AuthOutcome::Authenticated(user) => user,
            AuthOutcome::Redirect(reason) => return PageLoad::Redirect(reason),
        };
        let mut state = InquiryDeskState {
            user,
            inquiries: Vec::new(),
            selected: None,
        };
        if self.reload(&mut state).await {
            PageLoad::Ready(state)
        } else {
            PageLoad::Failed
        }
    }

    pub async fn dispatch(&self, state: &mut InquiryDeskState, intent: InquiryIntent) -> bool {
        match intent {
            InquiryIntent::Reload => self.reload(state).await,
            InquiryIntent::Create { title, content } => self.create(state, &title, &content).await,
            InquiryIntent::Show(id) => self.show(state, id).await,
            InquiryIntent::Edit { id, title, content } => {
                self.edit(state, id, &title, &content).await
            }
            InquiryIntent::Delete(id) => self.delete(state, id).await,
        }
    }

    pub async fn reload(&self, state: &mut InquiryDeskState) -> bool {
        match self.inquiries.list_by_user(state.user.user_id).await {
            Ok(mut inquiries) => {
                sort_newest_first(&mut inquiries);
                state.inquiries = inquiries;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "[InquiryDesk] failed to load inquiries");
                self.notifier.notify("Could not load your inquiries.");
                false
            }
        }
    }

    pub async fn create(&self, state: &mut InquiryDeskState, title: &str, content: &str) -> bool {
        let inquiry = match NewInquiry::new(state.user.user_id, title, content) {
            Ok(inquiry) => inquiry,
            Err(_) => {
                self.notifier.notify("Please enter both a title and the details.");
                return false;
            }
        };

        match self.inquiries.create(&inquiry).await {
            Ok(created) => {
                tracing::info!(inquiry_id = created.id, "[InquiryDesk] inquiry submitted");
                self.notifier.notify("Your inquiry has been submitted.");
                self.reload(state).await;
                true
            }
            Err(err) => self.report(err, "Could not submit your inquiry."),
        }
    }

    pub async fn show(&self, state: &mut InquiryDeskState, id: InquiryId) -> bool {
        match self.inquiries.find_by_id(id).await {
            Ok(inquiry) => {
                state.selected = Some(inquiry);
                true
            }
            Err(err) => self.report(err, "Could not open that inquiry."),
        }
    }

    /// Edits title and content. Only PENDING inquiries can be edited.
    pub async fn edit(
        &self,
        state: &mut InquiryDeskState,
        id: InquiryId,
        title: &str,
        content: &str,
    ) -> bool {
        let update = match InquiryUpdate::new(title, content) {
            Ok(update) => update,
            Err(_) => {
                self.notifier.notify("Please enter both a title and the details.");
                return false;
            }
        };
        if !self.ensure_pending(id, "edited").await {
            return false;
        }

        match self.inquiries.update(id, &update).await {
            Ok(updated) => {
                self.notifier.notify("Inquiry updated.");
                if state.selected.as_ref().is_some_and(|s| s.id == id) {
                    state.selected = Some(updated);
                }
                self.reload(state).await;
                true
            }
            Err(err) => self.report(err, "Could not update the inquiry."),
        }
    }

    /// Deletes after confirmation. Only PENDING inquiries can be deleted.
    pub async fn delete(&self, state: &mut InquiryDeskState, id: InquiryId) -> bool {
        if !self.ensure_pending(id, "deleted").await {
            return false;
        }
        if !self.notifier.confirm("Delete this inquiry?") {
            return false;
        }

        match self.inquiries.delete(id).await {
            Ok(()) => {
                self.notifier.notify("Inquiry deleted.");
                if state.selected.as_ref().is_some_and(|s| s.id == id) {
                    state.selected = None;
                }
                self.reload(state).await;
                true
            }
            Err(err) => self.report(err, "Could not delete the inquiry."),
        }
    }

    async fn ensure_pending(&self, id: InquiryId, action: &str) -> bool {
        let current: Result<Inquiry> = self.inquiries.find_by_id(id).await;
        match current {
            Ok(inquiry) if inquiry.status.is_editable() => true,
            Ok(inquiry) => {
                tracing::debug!(inquiry_id = id, status = %inquiry.status, "[InquiryDesk] not editable");
                self.notifier.notify(&format!(
                    "Only pending inquiries can be {action}."
                ));
                false
            }
            Err(err) => self.report(err, "Could not open that inquiry."),
        }
    }

    fn report(&self, err: brainstorm_core::BrainstormError, message: &str) -> bool {
        tracing::error!(error = %err, "[InquiryDesk] {message}");
        self.notifier.notify(message);
        false
    }
}
