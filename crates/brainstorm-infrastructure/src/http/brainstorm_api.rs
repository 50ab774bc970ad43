//! Client for the AI brainstorming backend.

use async_trait::async_trait;
use brainstorm_core::brainstorm::{BrainstormApi, SessionId, SessionStarted};
use brainstorm_core::error::Result;
use brainstorm_core::idea::GeneratedIdea;
use reqwest::{Client, RequestBuilder, Response};

use super::dto::{
    AssociationsRequestDto, AssociationsResponseDto, IdeasResponseDto, MessageResponseDto,
    PurposeRequestDto, WarmupResponseDto,
};
use super::{Target, decode_json, ensure_success, transport_error};

/// REST client for `{ai_api_base}`. Sessions are anonymous; no auth header.
#[derive(Clone)]
pub struct BrainstormApiClient {
    client: Client,
    base_url: String,
}

impl BrainstormApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder, session: &SessionId) -> Result<Response> {
        let response = request.send().await.map_err(transport_error)?;
        ensure_success(response, Target::new("session", session.as_str())).await
    }
}

#[async_trait]
impl BrainstormApi for BrainstormApiClient {
    async fn start_session(&self) -> Result<SessionStarted> {
        let response = self
            .client
            .post(self.url("/session"))
            .send()
            .await
            .map_err(transport_error)?;
        let response = ensure_success(response, Target::new("session", "new")).await?;
        let started: SessionStarted = decode_json(response).await?;
        tracing::info!(session_id = %started.session_id, "brainstorming session started");
        Ok(started)
    }

    async fn submit_purpose(&self, session: &SessionId, purpose: &str) -> Result<String> {
        let request = self.client.post(self.url("/purpose")).json(&PurposeRequestDto {
            session_id: session.as_str(),
            purpose,
        });
        let body: MessageResponseDto = decode_json(self.send(request, session).await?).await?;
        Ok(body.message)
    }

    async fn warmup_questions(&self, session: &SessionId) -> Result<Vec<String>> {
        let request = self.client.get(self.url(&format!("/warmup/{session}")));
        let body: WarmupResponseDto = decode_json(self.send(request, session).await?).await?;
        Ok(body.questions)
    }

    async fn confirm_warmup(&self, session: &SessionId) -> Result<String> {
        let request = self.client.post(self.url(&format!("/confirm/{session}")));
        let body: MessageResponseDto = decode_json(self.send(request, session).await?).await?;
        Ok(body.message)
    }

    async fn submit_associations(&self, session: &SessionId, keywords: &[String]) -> Result<usize> {
        let request = self
            .client
            .post(self.url(&format!("/associations/{session}")))
            .json(&AssociationsRequestDto {
                session_id: session.as_str(),
                associations: keywords,
            });
        let body: AssociationsResponseDto =
            decode_json(self.send(request, session).await?).await?;
        Ok(body.count)
    }

    async fn generate_ideas(&self, session: &SessionId) -> Result<Vec<GeneratedIdea>> {
        let request = self.client.get(self.url(&format!("/ideas/{session}")));
        let body: IdeasResponseDto = decode_json(self.send(request, session).await?).await?;
        tracing::info!(session_id = %session, count = body.ideas.len(), "ideas generated");
        Ok(body.ideas)
    }

    async fn delete_session(&self, session: &SessionId) -> Result<()> {
        let request = self.client.delete(self.url(&format!("/session/{session}")));
        self.send(request, session).await?;
        Ok(())
    }
}
