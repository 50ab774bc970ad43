//! Application layer for the brainstorm client.
//!
//! Each page of the product is a use case here: it owns an explicit state
//! struct, is driven by named intents, and reports failures to the user
//! through the injected [`Notifier`](brainstorm_core::notify::Notifier)
//! instead of returning errors.

pub mod admin_console;
pub mod auth;
pub mod home;
pub mod idea_saver;
pub mod inquiry_desk;
pub mod intent;
pub mod session_linker;
pub mod wizard;

#[cfg(test)]
mod test_support;

pub use admin_console::{AdminConsole, AdminState};
pub use auth::{AuthGate, AuthOutcome, RedirectReason};
pub use home::{HomePage, HomeState, IdeaView};
pub use idea_saver::{IdeaSaver, SaveOutcome};
pub use inquiry_desk::{InquiryDesk, InquiryDeskState};
pub use intent::{AdminIntent, HomeIntent, InquiryIntent, Intent, PageLoad, WizardIntent};
pub use session_linker::{LinkOutcome, SessionLinker};
pub use wizard::{BrainstormWizard, StepOutcome, WizardState};
