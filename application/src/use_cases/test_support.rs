//! Scripted test doubles for the gateway and image-search ports.

use crate::ports::image_search::{ImageSearchError, ImageSearchPort};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use relief_domain::{
    ApiKey, CredentialKind, Credentials, ImageCandidate, Model, ResponseTone, Stage,
    StressCategory, StressInput,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn api_key() -> ApiKey {
    ApiKey::new("test-key").unwrap()
}

pub fn full_credentials() -> Credentials {
    Credentials::new()
        .with(CredentialKind::TextGeneration, "sk-test")
        .with(CredentialKind::ImageSearch, "giphy-test")
}

pub fn sample_input() -> StressInput {
    StressInput::new(
        "Nobody answered my messages this weekend.",
        StressCategory::Loneliness,
        ResponseTone::Soothing,
    )
}

/// Reframing output with `n` paragraphs named `P1..Pn`
pub fn paragraphs_reply(n: usize) -> String {
    (1..=n)
        .map(|i| format!("P{}", i))
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ==================== Gateway ====================

#[derive(Default)]
struct Script {
    replies: Mutex<VecDeque<Result<String, GatewayError>>>,
    prompts: Mutex<Vec<String>>,
}

/// Gateway whose sessions pop replies from one shared queue, in order.
pub struct ScriptedGateway {
    script: Arc<Script>,
    sessions_created: AtomicUsize,
    system_prompts: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            script: Arc::new(Script {
                replies: Mutex::new(VecDeque::from(replies)),
                prompts: Mutex::new(Vec::new()),
            }),
            sessions_created: AtomicUsize::new(0),
            system_prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn sessions_created(&self) -> usize {
        self.sessions_created.load(Ordering::SeqCst)
    }

    pub fn system_prompts(&self) -> Vec<String> {
        self.system_prompts.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.script.prompts.lock().unwrap().clone()
    }
}

struct ScriptedSession {
    model: Model,
    script: Arc<Script>,
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.script.prompts.lock().unwrap().push(content.to_string());
        self.script
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session_with_system_prompt(
        &self,
        _api_key: &ApiKey,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.sessions_created.fetch_add(1, Ordering::SeqCst);
        self.system_prompts
            .lock()
            .unwrap()
            .push(system_prompt.to_string());
        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            script: Arc::clone(&self.script),
        }))
    }
}

// ==================== Image search ====================

/// Image search returning three fixed candidates per call.
pub struct MockImageSearch {
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
    fail_on_call: Option<usize>,
    empty: bool,
}

impl MockImageSearch {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            fail_on_call: None,
            empty: false,
        }
    }

    /// Fail the `n`th call (1-based).
    pub fn failing_on(n: usize) -> Self {
        Self {
            fail_on_call: Some(n),
            ..Self::new()
        }
    }

    pub fn empty() -> Self {
        Self {
            empty: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageSearchPort for MockImageSearch {
    async fn search(
        &self,
        _api_key: &ApiKey,
        query: &str,
        limit: usize,
    ) -> Result<Vec<ImageCandidate>, ImageSearchError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.queries.lock().unwrap().push(query.to_string());

        if self.fail_on_call == Some(n) {
            return Err(ImageSearchError::ConnectionError("connection reset".to_string()));
        }
        if self.empty {
            return Ok(vec![]);
        }
        Ok((1..=3)
            .take(limit)
            .map(|i| {
                ImageCandidate::new(
                    format!("id{}", i),
                    format!("calm {}", i),
                    format!("https://media.giphy.com/media/q{}-{}/giphy.gif", n, i),
                )
            })
            .collect())
    }
}

// ==================== Progress ====================

/// Progress notifier that records every callback as a short string.
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_stage_start(&self, stage: &Stage, total_tasks: usize) {
        self.push(format!("start {} {}", stage, total_tasks));
    }

    fn on_task_complete(&self, stage: &Stage, index: usize, success: bool) {
        let status = if success { "ok" } else { "failed" };
        self.push(format!("done {} {} {}", stage, index, status));
    }

    fn on_stage_complete(&self, stage: &Stage) {
        self.push(format!("complete {}", stage));
    }

    fn on_search_query(&self, index: usize, query: &str) {
        self.push(format!("query {} {}", index, query));
    }
}
