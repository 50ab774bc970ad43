//! Idea domain module.
//!
//! # Module Structure
//!
//! - `model`: persisted ideas, ownership and generated-idea content
//! - `repository`: the remote idea store trait

mod model;
mod repository;

pub use model::{
    DEFAULT_PURPOSE, GeneratedIdea, GeneratedIdeaContent, GuestSessionId, Idea, IdeaId, IdeaOwner,
    NewIdea, UserId,
};
pub use repository::IdeaStore;
