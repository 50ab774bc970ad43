//! Client for the application backend: identity, ideas and inquiries.

use async_trait::async_trait;
use brainstorm_core::error::Result;
use brainstorm_core::idea::{GuestSessionId, Idea, IdeaId, IdeaStore, NewIdea, UserId};
use brainstorm_core::inquiry::{Inquiry, InquiryId, InquiryStore, InquiryUpdate, NewInquiry};
use brainstorm_core::storage::{KeyValueStore, TOKEN_KEY};
use brainstorm_core::user::{AuthService, User};
use reqwest::{Client, RequestBuilder};
use std::sync::Arc;

use super::dto::{IdeaRequestDto, ReplyRequestDto};
use super::{Target, decode_json, ensure_success, transport_error};

/// Where the bearer token comes from.
#[derive(Clone)]
enum TokenSource {
    Anonymous,
    Fixed(String),
    /// Read from local storage on every request, so a login or logout
    /// mid-run takes effect immediately.
    Storage(Arc<dyn KeyValueStore>),
}

/// REST client for `{app_api_base}`.
///
/// When a bearer token is available it is attached to every request;
/// guest flows run with no token.
#[derive(Clone)]
pub struct AppApiClient {
    client: Client,
    base_url: String,
    token: TokenSource,
}

impl AppApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: TokenSource::Anonymous,
        }
    }

    /// Sends `token` with every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.map_or(TokenSource::Anonymous, TokenSource::Fixed);
        self
    }

    /// Sends whatever token `storage` holds at request time.
    pub fn with_token_store(mut self, storage: Arc<dyn KeyValueStore>) -> Self {
        self.token = TokenSource::Storage(storage);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn current_token(&self) -> Option<String> {
        match &self.token {
            TokenSource::Anonymous => None,
            TokenSource::Fixed(token) => Some(token.clone()),
            TokenSource::Storage(storage) => match storage.get(TOKEN_KEY) {
                Ok(token) => token.filter(|t| !t.trim().is_empty()),
                Err(err) => {
                    tracing::warn!(error = %err, "could not read token, sending request anonymously");
                    None
                }
            },
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.current_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, target: Target<'_>) -> Result<reqwest::Response> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response, target).await
    }
}

#[async_trait]
impl AuthService for AppApiClient {
    async fn current_user(&self, token: &str) -> Result<User> {
        let response = self
            .client
            .get(self.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response, Target::new("user", "me")).await?;
        decode_json(response).await
    }
}

#[async_trait]
impl IdeaStore for AppApiClient {
    async fn create(&self, idea: &NewIdea) -> Result<Idea> {
        let request = self
            .client
            .post(self.url("/ideas"))
            .json(&IdeaRequestDto::from(idea));
        let response = self.send(request, Target::new("idea", "new")).await?;
        let created: Idea = decode_json(response).await?;
        tracing::debug!(idea_id = created.id, "created idea");
        Ok(created)
    }

    async fn find_by_id(&self, id: IdeaId) -> Result<Idea> {
        let id_text = id.to_string();
        let request = self.client.get(self.url(&format!("/ideas/{id}")));
        let response = self.send(request, Target::new("idea", &id_text)).await?;
        decode_json(response).await
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Idea>> {
        let request = self
            .client
            .get(self.url("/ideas"))
            .query(&[("userId", user_id)]);
        let response = self.send(request, Target::new("user", &user_id.to_string())).await?;
        decode_json(response).await
    }

    async fn delete(&self, id: IdeaId) -> Result<()> {
        let id_text = id.to_string();
        let request = self.client.delete(self.url(&format!("/ideas/{id}")));
        self.send(request, Target::new("idea", &id_text)).await?;
        Ok(())
    }

    async fn count_by_user(&self, user_id: UserId) -> Result<u64> {
        let request = self
            .client
            .get(self.url("/ideas/count"))
            .query(&[("userId", user_id)]);
        let response = self.send(request, Target::new("user", &user_id.to_string())).await?;
        decode_json(response).await
    }

    async fn link_guest_ideas(&self, guest: &GuestSessionId, user_id: UserId) -> Result<u32> {
        let user_text = user_id.to_string();
        let request = self
            .client
            .post(self.url("/ideas/link-guest"))
            .query(&[("guestSessionId", guest.as_str()), ("userId", user_text.as_str())]);
        let response = self
            .send(request, Target::new("guest session", guest.as_str()))
            .await?;
        decode_json(response).await
    }
}

#[async_trait]
impl InquiryStore for AppApiClient {
    async fn create(&self, inquiry: &NewInquiry) -> Result<Inquiry> {
        let request = self.client.post(self.url("/inquiries")).json(inquiry);
        let response = self.send(request, Target::new("inquiry", "new")).await?;
        decode_json(response).await
    }

    async fn find_by_id(&self, id: InquiryId) -> Result<Inquiry> {
        let id_text = id.to_string();
        let request = self.client.get(self.url(&format!("/inquiries/{id}")));
        let response = self.send(request, Target::new("inquiry", &id_text)).await?;
        decode_json(response).await
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Inquiry>> {
        let request = self
            .client
            .get(self.url("/inquiries"))
            .query(&[("userId", user_id)]);
        let response = self.send(request, Target::new("user", &user_id.to_string())).await?;
        decode_json(response).await
    }

    async fn update(&self, id: InquiryId, update: &InquiryUpdate) -> Result<Inquiry> {
        let id_text = id.to_string();
        let request = self
            .client
            .put(self.url(&format!("/inquiries/{id}")))
            .json(update);
        let response = self.send(request, Target::new("inquiry", &id_text)).await?;
        decode_json(response).await
    }

    async fn delete(&self, id: InquiryId) -> Result<()> {
        let id_text = id.to_string();
        let request = self.client.delete(self.url(&format!("/inquiries/{id}")));
        self.send(request, Target::new("inquiry", &id_text)).await?;
        Ok(())
    }

    async fn reply(&self, id: InquiryId, reply: &str) -> Result<Inquiry> {
        let id_text = id.to_string();
        let request = self
            .client
            .put(self.url(&format!("/inquiries/{id}/reply")))
            .json(&ReplyRequestDto { reply });
        let response = self.send(request, Target::new("inquiry", &id_text)).await?;
        decode_json(response).await
    }

    async fn list_all(&self) -> Result<Vec<Inquiry>> {
        let request = self.client.get(self.url("/inquiries/admin/all"));
        let response = self.send(request, Target::new("inquiry", "all")).await?;
        decode_json(response).await
    }
}
