//! Named user intents, one enum per page.
//!
//! Front ends translate their input (commands, key presses, prompts) into
//! these values and hand them to the page's `dispatch` method.

use brainstorm_core::idea::IdeaId;
use brainstorm_core::inquiry::{InquiryFilter, InquiryId};

use crate::auth::RedirectReason;

/// Result of opening a protected page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoad<S> {
    Ready(S),
    Redirect(RedirectReason),
    /// Authenticated, but the initial data could not be loaded.
    Failed,
}

impl<S> PageLoad<S> {
    pub fn ready(self) -> Option<S> {
        match self {
            PageLoad::Ready(state) => Some(state),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeIntent {
    Reload,
    ShowIdea(IdeaId),
    DeleteIdea(IdeaId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardIntent {
    Start,
    SubmitPurpose(String),
    ConfirmWarmup,
    AddKeyword(String),
    RemoveKeyword(String),
    SubmitAssociations,
    GenerateIdeas,
    SaveIdeas,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InquiryIntent {
    Reload,
    Create { title: String, content: String },
    Show(InquiryId),
    Edit {
        id: InquiryId,
        title: String,
        content: String,
    },
    Delete(InquiryId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminIntent {
    Reload,
    Filter(InquiryFilter),
    Show(InquiryId),
    Reply { id: InquiryId, reply: String },
}

/// Any intent, tagged with the page it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Home(HomeIntent),
    Wizard(WizardIntent),
    Inquiry(InquiryIntent),
    Admin(AdminIntent),
    Logout,
}

impl From<HomeIntent> for Intent {
    fn from(intent: HomeIntent) -> Self {
        Intent::Home(intent)
    }
}

impl From<WizardIntent> for Intent {
    fn from(intent: WizardIntent) -> Self {
        Intent::Wizard(intent)
    }
}

impl From<InquiryIntent> for Intent {
    fn from(intent: InquiryIntent) -> Self {
        Intent::Inquiry(intent)
    }
}

impl From<AdminIntent> for Intent {
    fn from(intent: AdminIntent) -> Self {
        Intent::Admin(intent)
    }
}
