//! Wire payloads that have no domain counterpart.
//!
//! The application backend speaks camelCase, the AI backend snake_case.

use brainstorm_core::idea::{GeneratedIdea, NewIdea, UserId};
use serde::{Deserialize, Serialize};

/// Body of `POST /ideas`. Both owner fields are always sent; one is null.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdeaRequestDto<'a> {
    pub user_id: Option<UserId>,
    pub guest_session_id: Option<&'a str>,
    pub title: &'a str,
    pub content: &'a str,
    pub purpose: &'a str,
}

impl<'a> From<&'a NewIdea> for IdeaRequestDto<'a> {
    fn from(idea: &'a NewIdea) -> Self {
        Self {
            user_id: idea.owner.user_id(),
            guest_session_id: idea.owner.guest_session_id().map(|g| g.as_str()),
            title: &idea.title,
            content: &idea.content,
            purpose: &idea.purpose,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReplyRequestDto<'a> {
    pub reply: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PurposeRequestDto<'a> {
    pub session_id: &'a str,
    pub purpose: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssociationsRequestDto<'a> {
    pub session_id: &'a str,
    pub associations: &'a [String],
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponseDto {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WarmupResponseDto {
    pub questions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssociationsResponseDto {
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IdeasResponseDto {
    pub ideas: Vec<GeneratedIdea>,
}
