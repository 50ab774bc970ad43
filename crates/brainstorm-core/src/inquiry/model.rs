//! Inquiry domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BrainstormError, Result};
use crate::idea::UserId;

pub type InquiryId = i64;

/// Lifecycle of a support inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    Pending,
    Answered,
    Closed,
}

impl InquiryStatus {
    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "Awaiting reply",
            InquiryStatus::Answered => "Answered",
            InquiryStatus::Closed => "Closed",
        }
    }

    /// Authors may only edit or delete while the inquiry is pending.
    pub fn is_editable(&self) -> bool {
        matches!(self, InquiryStatus::Pending)
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InquiryStatus {
    type Err = BrainstormError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(InquiryStatus::Pending),
            "ANSWERED" => Ok(InquiryStatus::Answered),
            "CLOSED" => Ok(InquiryStatus::Closed),
            other => Err(BrainstormError::validation(format!(
                "unknown inquiry status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(rename = "inquiryId")]
    pub id: InquiryId,
    pub user_id: UserId,
    pub title: String,
    pub content: String,
    pub status: InquiryStatus,
    #[serde(default)]
    pub reply: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// A new inquiry as submitted from the write form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInquiry {
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}

impl NewInquiry {
    /// Trims both fields and rejects the inquiry if either ends up empty.
    pub fn new(user_id: UserId, title: &str, content: &str) -> Result<Self> {
        let (title, content) = validate_fields(title, content)?;
        Ok(Self {
            user_id,
            title,
            content,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryUpdate {
    pub title: String,
    pub content: String,
}

impl InquiryUpdate {
    pub fn new(title: &str, content: &str) -> Result<Self> {
        let (title, content) = validate_fields(title, content)?;
        Ok(Self { title, content })
    }
}

fn validate_fields(title: &str, content: &str) -> Result<(String, String)> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(BrainstormError::validation(
            "title and content are both required",
        ));
    }
    Ok((title.to_string(), content.to_string()))
}

/// Status filter used by the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InquiryFilter {
    #[default]
    All,
    Status(InquiryStatus),
}

impl InquiryFilter {
    pub fn matches(&self, inquiry: &Inquiry) -> bool {
        match self {
            InquiryFilter::All => true,
            InquiryFilter::Status(status) => inquiry.status == *status,
        }
    }
}

impl FromStr for InquiryFilter {
    type Err = BrainstormError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(InquiryFilter::All);
        }
        s.parse().map(InquiryFilter::Status)
    }
}

/// Per-status counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InquiryStats {
    pub pending: usize,
    pub answered: usize,
    pub closed: usize,
    pub total: usize,
}

impl InquiryStats {
    pub fn from_inquiries(inquiries: &[Inquiry]) -> Self {
        let mut stats = Self {
            total: inquiries.len(),
            ..Self::default()
        };
        for inquiry in inquiries {
            match inquiry.status {
                InquiryStatus::Pending => stats.pending += 1,
                InquiryStatus::Answered => stats.answered += 1,
                InquiryStatus::Closed => stats.closed += 1,
            }
        }
        stats
    }
}

/// Orders inquiries by creation time, newest first. Undated ones sink.
pub fn sort_newest_first(inquiries: &mut [Inquiry]) {
    inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
