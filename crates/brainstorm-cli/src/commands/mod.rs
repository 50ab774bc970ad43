pub mod admin;
pub mod auth;
pub mod brainstorm;
pub mod config;
pub mod ideas;
pub mod inquiry;

use brainstorm_application::{
    AdminIntent, HomeIntent, InquiryIntent, Intent, PageLoad, RedirectReason,
};
use colored::Colorize;

use crate::app::App;
use crate::render;

/// Opens the page an intent belongs to, applies it and prints the result.
pub async fn dispatch(app: &App, intent: Intent) {
    match intent {
        Intent::Home(intent) => {
            let Some(mut state) = ready(app.home.load().await) else {
                return;
            };
            match intent {
                HomeIntent::Reload => render::home(&state),
                HomeIntent::ShowIdea(id) => {
                    app.home.dispatch(&mut state, HomeIntent::ShowIdea(id)).await;
                    if let Some(view) = &state.selected {
                        render::idea(view);
                    }
                }
                other => {
                    app.home.dispatch(&mut state, other).await;
                    render::home(&state);
                }
            }
        }
        Intent::Inquiry(intent) => {
            let Some(mut state) = ready(app.desk.open().await) else {
                return;
            };
            let show = matches!(intent, InquiryIntent::Show(_));
            if intent != InquiryIntent::Reload && !app.desk.dispatch(&mut state, intent).await {
                return;
            }
            match (&state.selected, show) {
                (Some(selected), true) => render::inquiry(selected),
                _ => render::inquiry_desk(&state),
            }
        }
        Intent::Admin(intent) => {
            let Some(mut state) = ready(app.admin.open().await) else {
                return;
            };
            let show = matches!(intent, AdminIntent::Show(_));
            if intent != AdminIntent::Reload && !app.admin.dispatch(&mut state, intent).await {
                return;
            }
            match (&state.selected, show) {
                (Some(selected), true) => render::inquiry(selected),
                _ => render::admin(&state),
            }
        }
        Intent::Wizard(intent) => {
            tracing::warn!(?intent, "wizard intents need an interactive session");
            println!("{}", "Run `brainstorm brainstorm` to use the wizard.".bright_black());
        }
        Intent::Logout => {
            app.gate.logout();
            println!("{}", "Logged out.".bright_green());
        }
    }
}

fn ready<S>(load: PageLoad<S>) -> Option<S> {
    match load {
        PageLoad::Ready(state) => Some(state),
        PageLoad::Redirect(reason) => {
            if reason != RedirectReason::AdminRequired {
                println!("{}", "Run `brainstorm login` to sign in.".bright_black());
            }
            None
        }
        PageLoad::Failed => None,
    }
}
