//! Remote inquiry store trait.

use async_trait::async_trait;

use super::model::{Inquiry, InquiryId, InquiryUpdate, NewInquiry};
use crate::error::Result;
use crate::idea::UserId;

/// Support inquiries owned by the application backend.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    async fn create(&self, inquiry: &NewInquiry) -> Result<Inquiry>;

    async fn find_by_id(&self, id: InquiryId) -> Result<Inquiry>;

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Inquiry>>;

    /// Edits title and content. The backend refuses non-pending inquiries.
    async fn update(&self, id: InquiryId, update: &InquiryUpdate) -> Result<Inquiry>;

    async fn delete(&self, id: InquiryId) -> Result<()>;

    /// Records an administrator's answer.
    async fn reply(&self, id: InquiryId, reply: &str) -> Result<Inquiry>;

    /// Every inquiry from every user (administrators only).
    async fn list_all(&self) -> Result<Vec<Inquiry>>;
}
