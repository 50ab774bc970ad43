use anyhow::{Context, Result, bail};
use brainstorm_application::{AuthOutcome, Intent};
use colored::Colorize;
use rustyline::DefaultEditor;

use crate::app::App;
use crate::render;

pub async fn login(app: &App, token: Option<String>) -> Result<()> {
    let token = match token {
        Some(token) => token,
        None => {
            println!(
                "{}",
                "Sign in on the web (Google, Kakao or Naver) and paste the token here.".bright_black()
            );
            let mut editor = DefaultEditor::new()?;
            editor.readline("token> ").context("no token entered")?
        }
    };
    if token.trim().is_empty() {
        bail!("token is empty");
    }

    let user = app
        .gate
        .login(&token)
        .await
        .context("the backend rejected this token")?;
    println!("{}", format!("Logged in as {}.", user.display_name()).bright_green());

    // Claim ideas saved as a guest right away.
    super::dispatch(app, Intent::Home(brainstorm_application::HomeIntent::Reload)).await;
    Ok(())
}

pub async fn logout(app: &App) {
    super::dispatch(app, Intent::Logout).await;
}

pub async fn whoami(app: &App) {
    if let AuthOutcome::Authenticated(user) = app.gate.authenticate().await {
        render::user(&user);
    }
}
