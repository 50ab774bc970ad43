//! Hand-written fakes shared by the use case tests.

use async_trait::async_trait;
use brainstorm_core::brainstorm::{BrainstormApi, SessionId, SessionStarted};
use brainstorm_core::error::{BrainstormError, Result};
use brainstorm_core::idea::{GeneratedIdea, GuestSessionId, Idea, IdeaId, IdeaStore, NewIdea, UserId};
use brainstorm_core::inquiry::{Inquiry, InquiryId, InquiryStatus, InquiryStore, InquiryUpdate, NewInquiry};
use brainstorm_core::notify::Notifier;
use brainstorm_core::user::{AuthService, Role, User};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

pub fn user(id: UserId, role: Role) -> User {
    User {
        user_id: id,
        email: Some(format!("user{id}@example.com")),
        username: format!("user{id}"),
        provider: None,
        role,
        created_at: None,
    }
}

pub fn generated(title: &str) -> GeneratedIdea {
    GeneratedIdea {
        title: title.to_string(),
        description: format!("{title} description"),
        analysis: Some("worth a try".to_string()),
    }
}

pub fn inquiry(id: InquiryId, user_id: UserId, status: InquiryStatus, created: &str) -> Inquiry {
    Inquiry {
        id,
        user_id,
        title: format!("inquiry {id}"),
        content: "details".to_string(),
        status,
        reply: None,
        created_at: Some(created.parse().unwrap()),
    }
}

// Notifier that records everything and answers confirms with a fixed value
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
    questions: Mutex<Vec<String>>,
    answer: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::answering(true)
    }

    pub fn answering(answer: bool) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            questions: Mutex::new(Vec::new()),
            answer,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.questions.lock().unwrap().push(message.to_string());
        self.answer
    }
}

// Idea store backed by a Vec, with scripted link results
pub struct MockIdeaStore {
    pub ideas: Mutex<Vec<Idea>>,
    pub created: Mutex<Vec<NewIdea>>,
    pub link_calls: Mutex<Vec<(String, UserId)>>,
    pub link_result: Result<u32>,
    pub fail_create_title: Option<String>,
    pub fail_list: bool,
}

impl MockIdeaStore {
    pub fn new() -> Self {
        Self {
            ideas: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            link_calls: Mutex::new(Vec::new()),
            link_result: Ok(0),
            fail_create_title: None,
            fail_list: false,
        }
    }

    pub fn linking(result: Result<u32>) -> Self {
        Self {
            link_result: result,
            ..Self::new()
        }
    }

    pub fn with_ideas(ideas: Vec<Idea>) -> Self {
        let store = Self::new();
        *store.ideas.lock().unwrap() = ideas;
        store
    }

    pub fn link_calls(&self) -> Vec<(String, UserId)> {
        self.link_calls.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewIdea> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdeaStore for MockIdeaStore {
    async fn create(&self, idea: &NewIdea) -> Result<Idea> {
        if self.fail_create_title.as_deref() == Some(idea.title.as_str()) {
            return Err(BrainstormError::http(500, "insert failed"));
        }
        let mut created = self.created.lock().unwrap();
        created.push(idea.clone());
        Ok(Idea {
            id: created.len() as IdeaId,
            user_id: idea.owner.user_id(),
            title: idea.title.clone(),
            content: idea.content.clone(),
            purpose: Some(idea.purpose.clone()),
            created_at: None,
        })
    }

    async fn find_by_id(&self, id: IdeaId) -> Result<Idea> {
        self.ideas
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| BrainstormError::not_found("idea", id.to_string()))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Idea>> {
        if self.fail_list {
            return Err(BrainstormError::transport("connection refused"));
        }
        Ok(self
            .ideas
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: IdeaId) -> Result<()> {
        let mut ideas = self.ideas.lock().unwrap();
        let before = ideas.len();
        ideas.retain(|i| i.id != id);
        if ideas.len() == before {
            return Err(BrainstormError::not_found("idea", id.to_string()));
        }
        Ok(())
    }

    async fn count_by_user(&self, user_id: UserId) -> Result<u64> {
        Ok(self.list_by_user(user_id).await?.len() as u64)
    }

    async fn link_guest_ideas(&self, guest: &GuestSessionId, user_id: UserId) -> Result<u32> {
        self.link_calls
            .lock()
            .unwrap()
            .push((guest.as_str().to_string(), user_id));
        self.link_result.clone()
    }
}

// Auth service accepting exactly one token
pub struct MockAuth {
    token: String,
    user: User,
}

impl MockAuth {
    pub fn new(token: &str, user: User) -> Self {
        Self {
            token: token.to_string(),
            user,
        }
    }
}

#[async_trait]
impl AuthService for MockAuth {
    async fn current_user(&self, token: &str) -> Result<User> {
        if token == self.token {
            Ok(self.user.clone())
        } else {
            Err(BrainstormError::unauthorized("invalid token"))
        }
    }
}

// AI backend with a failure switch per endpoint name
pub struct MockBrainstormApi {
    pub calls: Mutex<Vec<String>>,
    pub failing: Vec<&'static str>,
    pub ideas: Vec<GeneratedIdea>,
}

impl MockBrainstormApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: Vec::new(),
            ideas: vec![generated("A"), generated("B")],
        }
    }

    pub fn failing(endpoints: &[&'static str]) -> Self {
        Self {
            failing: endpoints.to_vec(),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn call(&self, name: &'static str, session: &str) -> Result<()> {
        self.calls.lock().unwrap().push(format!("{name}:{session}"));
        if self.failing.contains(&name) {
            return Err(BrainstormError::http(500, format!("{name} failed")));
        }
        Ok(())
    }
}

#[async_trait]
impl BrainstormApi for MockBrainstormApi {
    async fn start_session(&self) -> Result<SessionStarted> {
        self.call("session", "new")?;
        Ok(SessionStarted {
            session_id: SessionId::new("sess-1"),
            message: "Session created".to_string(),
        })
    }

    async fn submit_purpose(&self, session: &SessionId, _purpose: &str) -> Result<String> {
        self.call("purpose", session.as_str())?;
        Ok("purpose saved".to_string())
    }

    async fn warmup_questions(&self, session: &SessionId) -> Result<Vec<String>> {
        self.call("warmup", session.as_str())?;
        Ok(vec!["What annoys you daily?".to_string()])
    }

    async fn confirm_warmup(&self, session: &SessionId) -> Result<String> {
        self.call("confirm", session.as_str())?;
        Ok("warm-up done".to_string())
    }

    async fn submit_associations(&self, session: &SessionId, keywords: &[String]) -> Result<usize> {
        self.call("associations", session.as_str())?;
        Ok(keywords.len())
    }

    async fn generate_ideas(&self, session: &SessionId) -> Result<Vec<GeneratedIdea>> {
        self.call("ideas", session.as_str())?;
        Ok(self.ideas.clone())
    }

    async fn delete_session(&self, session: &SessionId) -> Result<()> {
        self.call("delete", session.as_str())
    }
}

// Inquiry store backed by a Vec
pub struct MockInquiryStore {
    pub inquiries: Mutex<Vec<Inquiry>>,
    pub writes: Mutex<Vec<String>>,
}

impl MockInquiryStore {
    pub fn with(inquiries: Vec<Inquiry>) -> Self {
        Self {
            inquiries: Mutex::new(inquiries),
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    fn record(&self, op: String) {
        self.writes.lock().unwrap().push(op);
    }

    fn modify<F: FnOnce(&mut Inquiry)>(&self, id: InquiryId, f: F) -> Result<Inquiry> {
        let mut inquiries = self.inquiries.lock().unwrap();
        let inquiry = inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| BrainstormError::not_found("inquiry", id.to_string()))?;
        f(inquiry);
        Ok(inquiry.clone())
    }
}

#[async_trait]
impl InquiryStore for MockInquiryStore {
    async fn create(&self, inquiry: &NewInquiry) -> Result<Inquiry> {
        self.record(format!("create:{}", inquiry.title));
        let mut inquiries = self.inquiries.lock().unwrap();
        let created = Inquiry {
            id: inquiries.len() as InquiryId + 100,
            user_id: inquiry.user_id,
            title: inquiry.title.clone(),
            content: inquiry.content.clone(),
            status: InquiryStatus::Pending,
            reply: None,
            created_at: Some("2030-01-01T00:00:00".parse().unwrap()),
        };
        inquiries.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: InquiryId) -> Result<Inquiry> {
        self.modify(id, |_| {})
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Inquiry>> {
        Ok(self
            .inquiries
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: InquiryId, update: &InquiryUpdate) -> Result<Inquiry> {
        self.record(format!("update:{id}"));
        self.modify(id, |i| {
            i.title = update.title.clone();
            i.content = update.content.clone();
        })
    }

    async fn delete(&self, id: InquiryId) -> Result<()> {
        self.record(format!("delete:{id}"));
        self.inquiries.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }

    async fn reply(&self, id: InquiryId, reply: &str) -> Result<Inquiry> {
        self.record(format!("reply:{id}"));
        self.modify(id, |i| {
            i.reply = Some(reply.to_string());
            i.status = InquiryStatus::Answered;
        })
    }

    async fn list_all(&self) -> Result<Vec<Inquiry>> {
        Ok(self.inquiries.lock().unwrap().clone())
    }
}

/// Collects formatted tracing output for log assertions.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a capturing subscriber on the current thread until the
    /// guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer)
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter(|line| line.contains(" ERROR "))
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
