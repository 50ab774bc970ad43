use brainstorm_application::{HomeIntent, Intent};
use brainstorm_core::idea::IdeaId;
use clap::Subcommand;

use crate::app::App;

#[derive(Subcommand, Debug, Clone, Default, PartialEq, Eq)]
pub enum IdeasAction {
    /// List saved ideas (default)
    #[default]
    List,
    /// Show one idea in full
    Show { id: IdeaId },
    /// Delete an idea
    Delete { id: IdeaId },
}

impl From<IdeasAction> for Intent {
    fn from(action: IdeasAction) -> Self {
        Intent::Home(match action {
            IdeasAction::List => HomeIntent::Reload,
            IdeasAction::Show { id } => HomeIntent::ShowIdea(id),
            IdeasAction::Delete { id } => HomeIntent::DeleteIdea(id),
        })
    }
}

pub async fn run(app: &App, action: IdeasAction) {
    super::dispatch(app, action.into()).await;
}
