//! Idea domain models.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Server-assigned idea identifier.
pub type IdeaId = i64;

/// Server-assigned user identifier.
pub type UserId = i64;

/// Purpose recorded on saved ideas when the wizard never captured one.
pub const DEFAULT_PURPOSE: &str = "brainstorm_session";

/// Opaque identifier of an unauthenticated brainstorming session.
///
/// Assigned by the AI backend when a session starts and reused as the
/// temporary owner key of ideas saved before the user logs in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestSessionId(String);

impl GuestSessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GuestSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GuestSessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GuestSessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Owner of a newly created idea: exactly one of a user or a guest session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaOwner {
    User(UserId),
    Guest(GuestSessionId),
}

impl IdeaOwner {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            IdeaOwner::User(id) => Some(*id),
            IdeaOwner::Guest(_) => None,
        }
    }

    pub fn guest_session_id(&self) -> Option<&GuestSessionId> {
        match self {
            IdeaOwner::User(_) => None,
            IdeaOwner::Guest(id) => Some(id),
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, IdeaOwner::Guest(_))
    }
}

/// An idea as produced by the AI backend, before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedIdea {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

/// Structured body stored in [`Idea::content`] for generated ideas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedIdeaContent {
    pub description: String,
    #[serde(default)]
    pub analysis: String,
    pub generated_at: DateTime<Utc>,
}

/// Request to persist one idea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdea {
    pub owner: IdeaOwner,
    pub title: String,
    pub content: String,
    pub purpose: String,
}

impl NewIdea {
    /// Builds a save request for a generated idea, encoding its body as
    /// [`GeneratedIdeaContent`] JSON.
    pub fn from_generated(
        idea: &GeneratedIdea,
        owner: IdeaOwner,
        purpose: impl Into<String>,
        generated_at: DateTime<Utc>,
    ) -> Result<Self> {
        let content = GeneratedIdeaContent {
            description: idea.description.clone(),
            analysis: idea.analysis.clone().unwrap_or_default(),
            generated_at,
        };

        Ok(Self {
            owner,
            title: idea.title.clone(),
            content: serde_json::to_string(&content)?,
            purpose: purpose.into(),
        })
    }
}

/// A persisted idea as reported by the idea store.
///
/// Guest-owned ideas carry no `user_id`; the guest session key is never
/// echoed back by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    #[serde(rename = "ideaId")]
    pub id: IdeaId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl Idea {
    /// Decodes the content as a generated idea body, if it is one.
    pub fn generated_content(&self) -> Option<GeneratedIdeaContent> {
        serde_json::from_str(&self.content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_generated() -> GeneratedIdea {
        GeneratedIdea {
            title: "Night market vlog".to_string(),
            description: "Film one stall per episode".to_string(),
            analysis: None,
        }
    }

    #[test]
    fn test_owner_accessors() {
        let user = IdeaOwner::User(42);
        assert_eq!(user.user_id(), Some(42));
        assert!(user.guest_session_id().is_none());

        let guest = IdeaOwner::Guest("guest-abc".into());
        assert!(guest.is_guest());
        assert_eq!(guest.user_id(), None);
        assert_eq!(guest.guest_session_id().map(|g| g.as_str()), Some("guest-abc"));
    }

    #[test]
    fn test_from_generated_encodes_content() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let new_idea =
            NewIdea::from_generated(&sample_generated(), IdeaOwner::User(1), "vlog", at).unwrap();

        assert_eq!(new_idea.title, "Night market vlog");
        assert_eq!(new_idea.purpose, "vlog");

        let decoded: GeneratedIdeaContent = serde_json::from_str(&new_idea.content).unwrap();
        assert_eq!(decoded.description, "Film one stall per episode");
        assert_eq!(decoded.analysis, "");
        assert_eq!(decoded.generated_at, at);
    }

    #[test]
    fn test_idea_deserializes_store_payload() {
        let json = r#"{
            "ideaId": 5,
            "userId": null,
            "title": "t",
            "content": "plain text",
            "purpose": "p",
            "createdAt": "2025-03-01T09:30:00.123"
        }"#;
        let idea: Idea = serde_json::from_str(json).unwrap();
        assert_eq!(idea.id, 5);
        assert!(idea.user_id.is_none());
        assert!(idea.created_at.is_some());
        assert!(idea.generated_content().is_none());
    }

    #[test]
    fn test_generated_content_roundtrip_through_idea() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        let new_idea = NewIdea::from_generated(
            &GeneratedIdea {
                analysis: Some("strong fit".to_string()),
                ..sample_generated()
            },
            IdeaOwner::Guest("g".into()),
            DEFAULT_PURPOSE,
            at,
        )
        .unwrap();

        let idea = Idea {
            id: 1,
            user_id: None,
            title: new_idea.title,
            content: new_idea.content,
            purpose: Some(new_idea.purpose),
            created_at: None,
        };
        let content = idea.generated_content().unwrap();
        assert_eq!(content.analysis, "strong fit");
    }
}
