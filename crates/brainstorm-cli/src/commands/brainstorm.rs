//! Interactive wizard session on top of rustyline.

use anyhow::Result;
use brainstorm_application::{SaveOutcome, StepOutcome, WizardIntent, WizardState};
use brainstorm_core::brainstorm::{MIN_ASSOCIATIONS, WizardStep};
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::app::App;
use crate::render;

/// What one line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Intent(WizardIntent),
    List,
    Help,
    Quit,
    Empty,
}

fn parse_line(step: WizardStep, line: &str) -> Command {
    let line = line.trim();
    match line {
        "" if step == WizardStep::Start => return Command::Intent(WizardIntent::Start),
        "" if step == WizardStep::Warmup => return Command::Intent(WizardIntent::ConfirmWarmup),
        "" => return Command::Empty,
        "quit" | "exit" | "/quit" => return Command::Quit,
        "/help" => return Command::Help,
        "/reset" => return Command::Intent(WizardIntent::Reset),
        _ => {}
    }

    match step {
        WizardStep::Start => Command::Intent(WizardIntent::Start),
        WizardStep::Purpose => Command::Intent(WizardIntent::SubmitPurpose(line.to_string())),
        WizardStep::Warmup => Command::Intent(WizardIntent::ConfirmWarmup),
        WizardStep::Associations => match line {
            "/done" => Command::Intent(WizardIntent::SubmitAssociations),
            "/list" => Command::List,
            _ => match line.strip_prefix("/remove ") {
                Some(keyword) => Command::Intent(WizardIntent::RemoveKeyword(keyword.to_string())),
                None => Command::Intent(WizardIntent::AddKeyword(line.to_string())),
            },
        },
        WizardStep::Ideas => match line {
            "/save" => Command::Intent(WizardIntent::SaveIdeas),
            "/retry" => Command::Intent(WizardIntent::GenerateIdeas),
            "/list" => Command::List,
            _ => Command::Help,
        },
    }
}

fn prompt(state: &WizardState) -> String {
    match state.step {
        WizardStep::Associations => format!("[{}] keyword> ", state.associations.len()),
        WizardStep::Purpose => "purpose> ".to_string(),
        WizardStep::Warmup => "(enter to continue)> ".to_string(),
        _ => ">> ".to_string(),
    }
}

fn help(step: WizardStep) {
    let text = match step {
        WizardStep::Start => "Press enter to start a session.",
        WizardStep::Purpose => "Describe what you want to brainstorm about.",
        WizardStep::Warmup => "Think about the questions above, then press enter.",
        WizardStep::Associations => {
            "Type keywords one per line. /remove <kw>, /list, /done when finished."
        }
        WizardStep::Ideas => "/save to keep these ideas, /retry to generate again, /list to show them.",
    };
    println!("{}", text.bright_black());
    println!("{}", "/reset starts over, quit leaves.".bright_black());
}

fn show_step(state: &WizardState) {
    render::step_header(state);
    match state.step {
        WizardStep::Warmup => {
            for question in &state.warmup_questions {
                println!("  {}", format!("• {question}").bright_cyan());
            }
        }
        WizardStep::Ideas if !state.ideas.is_empty() => render::generated_ideas(&state.ideas),
        _ => {}
    }
    help(state.step);
}

fn show_keywords(state: &WizardState) {
    let stage = state.associations.stage();
    println!("{}", state.associations.keywords().join(", "));
    let feedback = format!(
        "{} ({}/{MIN_ASSOCIATIONS})",
        stage.message(),
        state.associations.len()
    );
    if stage.can_generate() {
        println!("{}", feedback.bright_green());
    } else {
        println!("{}", feedback.bright_black());
    }
}

pub async fn run(app: &App) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut state = WizardState::new();

    println!("{}", "=== Brainstorm ===".bright_magenta().bold());
    app.wizard.dispatch(&mut state, WizardIntent::Start).await;
    show_step(&state);

    loop {
        let line = match editor.readline(&prompt(&state)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        let intent = match parse_line(state.step, &line) {
            Command::Intent(intent) => intent,
            Command::List if state.step == WizardStep::Ideas => {
                render::generated_ideas(&state.ideas);
                continue;
            }
            Command::List => {
                show_keywords(&state);
                continue;
            }
            Command::Help => {
                help(state.step);
                continue;
            }
            Command::Quit => break,
            Command::Empty => continue,
        };

        let before = state.step;
        let keyword_change = matches!(
            intent,
            WizardIntent::AddKeyword(_) | WizardIntent::RemoveKeyword(_)
        );
        let outcome = app.wizard.dispatch(&mut state, intent).await;

        match outcome {
            StepOutcome::Advanced(step) if step != before || step == WizardStep::Ideas => {
                show_step(&state)
            }
            StepOutcome::Updated if keyword_change => show_keywords(&state),
            StepOutcome::Rejected(reason) => {
                tracing::debug!(%reason, "wizard input rejected");
            }
            _ => {}
        }

        if let Some(saved) = state.saved.take() {
            match saved {
                SaveOutcome::SavedAsGuest { login_now: true, .. } => {
                    println!("{}", "Run `brainstorm login` to sign in.".bright_black());
                    break;
                }
                SaveOutcome::SavedAsGuest { .. } | SaveOutcome::SavedAsUser { .. } => break,
                SaveOutcome::NothingToSave | SaveOutcome::Failed => {}
            }
        }
    }

    Ok(())
}
