use brainstorm_application::{InquiryIntent, Intent};
use brainstorm_core::inquiry::InquiryId;
use clap::Subcommand;

use crate::app::App;

#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum InquiryAction {
    /// List your inquiries, newest first (default)
    #[default]
    List,
    /// Submit a new inquiry
    New {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Show an inquiry and its reply
    Show { id: InquiryId },
    /// Edit a pending inquiry
    Edit {
        id: InquiryId,
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Delete a pending inquiry
    Delete { id: InquiryId },
}

impl From<InquiryAction> for Intent {
    fn from(action: InquiryAction) -> Self {
        Intent::Inquiry(match action {
            InquiryAction::List => InquiryIntent::Reload,
            InquiryAction::New { title, content } => InquiryIntent::Create { title, content },
            InquiryAction::Show { id } => InquiryIntent::Show(id),
            InquiryAction::Edit { id, title, content } => InquiryIntent::Edit { id, title, content },
            InquiryAction::Delete { id } => InquiryIntent::Delete(id),
        })
    }
}

pub async fn run(app: &App, action: InquiryAction) {
    super::dispatch(app, action.into()).await;
}
