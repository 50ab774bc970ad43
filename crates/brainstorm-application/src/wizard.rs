//! The five-step brainstorming wizard.
//!
//! Steps run strictly forward against the AI backend: start a session,
//! state a purpose (which fetches warm-up questions), confirm the warm-up,
//! collect free-association keywords, then generate ideas. A failed call
//! leaves the wizard on the step it was on.

use brainstorm_core::brainstorm::{
    AddAssociation, AssociationSet, BrainstormApi, MIN_ASSOCIATIONS, SessionId, WizardStep,
};
use brainstorm_core::idea::GeneratedIdea;
use brainstorm_core::notify::Notifier;
use std::sync::Arc;

use crate::idea_saver::{IdeaSaver, SaveOutcome};
use crate::intent::WizardIntent;

const STEP_FAILED: &str = "Something went wrong. Please try again.";

/// Page-scoped wizard state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub step: WizardStep,
    pub session_id: Option<SessionId>,
    pub purpose: Option<String>,
    pub warmup_questions: Vec<String>,
    pub associations: AssociationSet,
    pub ideas: Vec<GeneratedIdea>,
    /// Latest message from the AI backend.
    pub last_message: Option<String>,
    /// Set while a backend call is in flight.
    pub waiting: bool,
    pub saved: Option<SaveOutcome>,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved to the given step.
    Advanced(WizardStep),
    /// Local state changed without a step change.
    Updated,
    /// Refused before any call was made.
    Rejected(String),
    /// A backend call failed; step unchanged.
    Failed,
}

pub struct BrainstormWizard {
    api: Arc<dyn BrainstormApi>,
    saver: IdeaSaver,
    notifier: Arc<dyn Notifier>,
}

impl BrainstormWizard {
    pub fn new(api: Arc<dyn BrainstormApi>, saver: IdeaSaver, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            saver,
            notifier,
        }
    }

    pub async fn dispatch(&self, state: &mut WizardState, intent: WizardIntent) -> StepOutcome {
        match intent {
            WizardIntent::Start => self.start(state).await,
            WizardIntent::SubmitPurpose(purpose) => self.submit_purpose(state, &purpose).await,
            WizardIntent::ConfirmWarmup => self.confirm_warmup(state).await,
            WizardIntent::AddKeyword(keyword) => self.add_keyword(state, &keyword),
            WizardIntent::RemoveKeyword(keyword) => self.remove_keyword(state, &keyword),
            WizardIntent::SubmitAssociations => self.submit_associations(state).await,
            WizardIntent::GenerateIdeas => self.generate_ideas(state).await,
            WizardIntent::SaveIdeas => {
                let outcome = self.save_ideas(state).await;
                if outcome == SaveOutcome::Failed {
                    StepOutcome::Failed
                } else {
                    StepOutcome::Updated
                }
            }
            WizardIntent::Reset => self.reset(state),
        }
    }

    /// Step 1: opens a new AI session.
    pub async fn start(&self, state: &mut WizardState) -> StepOutcome {
        if let Err(reason) = expect_step(state, WizardStep::Start) {
            return self.reject(reason);
        }

        state.waiting = true;
        let result = self.api.start_session().await;
        state.waiting = false;

        match result {
            Ok(started) => {
                state.session_id = Some(started.session_id);
                state.last_message = Some(started.message);
                advance(state, WizardStep::Purpose)
            }
            Err(err) => self.fail(state, "start", err),
        }
    }

    /// Step 2: records the purpose and fetches warm-up questions.
    pub async fn submit_purpose(&self, state: &mut WizardState, purpose: &str) -> StepOutcome {
        let purpose = purpose.trim();
        if purpose.is_empty() {
            return StepOutcome::Rejected("purpose is empty".to_string());
        }
        let session = match session_for(state, WizardStep::Purpose) {
            Ok(session) => session,
            Err(reason) => return self.reject(reason),
        };

        state.waiting = true;
        let result = async {
            let message = self.api.submit_purpose(&session, purpose).await?;
            let questions = self.api.warmup_questions(&session).await?;
            Ok::<_, brainstorm_core::BrainstormError>((message, questions))
        }
        .await;
        state.waiting = false;

        match result {
            Ok((message, questions)) => {
                state.purpose = Some(purpose.to_string());
                state.last_message = Some(message);
                state.warmup_questions = questions;
                advance(state, WizardStep::Warmup)
            }
            Err(err) => self.fail(state, "purpose", err),
        }
    }

    /// Step 3: acknowledges the warm-up questions.
    pub async fn confirm_warmup(&self, state: &mut WizardState) -> StepOutcome {
        let session = match session_for(state, WizardStep::Warmup) {
            Ok(session) => session,
            Err(reason) => return self.reject(reason),
        };

        state.waiting = true;
        let result = self.api.confirm_warmup(&session).await;
        state.waiting = false;

        match result {
            Ok(message) => {
                state.last_message = Some(message);
                advance(state, WizardStep::Associations)
            }
            Err(err) => self.fail(state, "confirm", err),
        }
    }

    /// Step 4: adds a keyword. Duplicates are refused with a notification.
    pub fn add_keyword(&self, state: &mut WizardState, keyword: &str) -> StepOutcome {
        if let Err(reason) = expect_step(state, WizardStep::Associations) {
            return self.reject(reason);
        }
        match state.associations.add(keyword) {
            AddAssociation::Added(_) => StepOutcome::Updated,
            AddAssociation::Blank => StepOutcome::Rejected("keyword is blank".to_string()),
            AddAssociation::Duplicate(keyword) => {
                self.notifier.notify("That keyword is already on the list.");
                StepOutcome::Rejected(format!("duplicate keyword '{keyword}'"))
            }
        }
    }

    pub fn remove_keyword(&self, state: &mut WizardState, keyword: &str) -> StepOutcome {
        if let Err(reason) = expect_step(state, WizardStep::Associations) {
            return self.reject(reason);
        }
        if state.associations.remove(keyword) {
            StepOutcome::Updated
        } else {
            StepOutcome::Rejected(format!("no keyword '{}'", keyword.trim()))
        }
    }

    /// Step 4 to 5: submits the keywords, then generates ideas right away.
    pub async fn submit_associations(&self, state: &mut WizardState) -> StepOutcome {
        let session = match session_for(state, WizardStep::Associations) {
            Ok(session) => session,
            Err(reason) => return self.reject(reason),
        };
        if !state.associations.can_submit() {
            self.notifier.notify(&format!(
                "Please enter at least {MIN_ASSOCIATIONS} keywords."
            ));
            return StepOutcome::Rejected(format!(
                "{} of {MIN_ASSOCIATIONS} keywords",
                state.associations.len()
            ));
        }

        state.waiting = true;
        let result = self
            .api
            .submit_associations(&session, state.associations.keywords())
            .await;
        state.waiting = false;

        match result {
            Ok(count) => {
                tracing::debug!(session_id = %session, count, "[Wizard] associations accepted");
                advance(state, WizardStep::Ideas);
                self.generate_ideas(state).await
            }
            Err(err) => self.fail(state, "associations", err),
        }
    }

    /// Step 5: asks the AI backend for ideas. Can be repeated after a failure.
    pub async fn generate_ideas(&self, state: &mut WizardState) -> StepOutcome {
        let session = match session_for(state, WizardStep::Ideas) {
            Ok(session) => session,
            Err(reason) => return self.reject(reason),
        };

        state.waiting = true;
        let result = self.api.generate_ideas(&session).await;
        state.waiting = false;

        match result {
            Ok(ideas) => {
                state.ideas = ideas;
                StepOutcome::Advanced(WizardStep::Ideas)
            }
            Err(err) => self.fail(state, "ideas", err),
        }
    }

    pub async fn save_ideas(&self, state: &mut WizardState) -> SaveOutcome {
        state.waiting = true;
        let outcome = self
            .saver
            .save(
                state.session_id.as_ref(),
                state.purpose.as_deref(),
                &state.ideas,
            )
            .await;
        state.waiting = false;
        state.saved = Some(outcome.clone());
        outcome
    }

    /// Starts over after confirmation. The old AI session is left alone.
    pub fn reset(&self, state: &mut WizardState) -> StepOutcome {
        if !self.notifier.confirm("Start brainstorming over?") {
            return StepOutcome::Rejected("reset declined".to_string());
        }
        *state = WizardState::new();
        StepOutcome::Advanced(WizardStep::Start)
    }

    fn reject(&self, reason: String) -> StepOutcome {
        tracing::debug!(reason = %reason, "[Wizard] intent rejected");
        StepOutcome::Rejected(reason)
    }

    fn fail(
        &self,
        state: &mut WizardState,
        call: &'static str,
        err: brainstorm_core::BrainstormError,
    ) -> StepOutcome {
        tracing::error!(call, step = state.step.number(), error = %err, "[Wizard] step failed");
        state.waiting = false;
        self.notifier.notify(STEP_FAILED);
        StepOutcome::Failed
    }
}

fn expect_step(state: &WizardState, step: WizardStep) -> Result<(), String> {
    if state.waiting {
        return Err("a request is still in flight".to_string());
    }
    if state.step != step {
        return Err(format!(
            "expected step {} ({}), wizard is on step {}",
            step.number(),
            step.title(),
            state.step.number()
        ));
    }
    Ok(())
}

fn session_for(state: &WizardState, step: WizardStep) -> Result<SessionId, String> {
    expect_step(state, step)?;
    state
        .session_id
        .clone()
        .ok_or_else(|| "no brainstorming session".to_string())
}

fn advance(state: &mut WizardState, step: WizardStep) -> StepOutcome {
    state.step = step;
    StepOutcome::Advanced(step)
}
