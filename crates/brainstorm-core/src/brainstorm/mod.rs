//! AI brainstorming session domain.
//!
//! The AI backend drives a five-step wizard. The session id it hands out
//! doubles as the guest owner key for ideas saved before login.

mod api;
mod model;

pub use api::BrainstormApi;
pub use model::{
    AddAssociation, AssociationSet, AssociationStage, MIN_ASSOCIATIONS, SessionId, SessionStarted,
    WizardStep,
};
