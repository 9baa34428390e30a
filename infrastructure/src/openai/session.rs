//! OpenAI chat session implementation
//!
//! Wraps the Chat Completions API to implement the `LlmSession` trait.
//! Manages conversation history locally since the API is stateless.

use super::error::{OpenAiError, Result, error_message};
use super::types::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use relief_application::ports::llm_gateway::{GatewayError, LlmSession};
use relief_domain::{ApiKey, Model};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Per-request generation settings shared by every session of a gateway
#[derive(Debug, Clone, Default)]
pub struct CompletionSettings {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

pub struct OpenAiSession {
    client: reqwest::Client,
    endpoint: Arc<str>,
    api_key: ApiKey,
    model: Model,
    settings: CompletionSettings,
    /// Conversation history, starting with the system prompt
    messages: Mutex<Vec<ChatMessage>>,
}

impl OpenAiSession {
    pub fn new(
        client: reqwest::Client,
        endpoint: Arc<str>,
        api_key: ApiKey,
        model: Model,
        system_prompt: &str,
        settings: CompletionSettings,
    ) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            model,
            settings,
            messages: Mutex::new(vec![ChatMessage::system(system_prompt)]),
        }
    }

    /// Execute one Chat Completions call with the given history.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: self.model.as_str(),
            messages,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        };

        debug!(
            model = %self.model,
            messages = messages.len(),
            "Calling Chat Completions API"
        );

        let response = self
            .client
            .post(self.endpoint.as_ref())
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(OpenAiError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| OpenAiError::Decode(e.without_url().to_string()))?;

        body.first_content().ok_or(OpenAiError::NoChoices)
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        let mut messages = self.messages.lock().await;
        messages.push(ChatMessage::user(content));

        match self.complete(&messages).await {
            Ok(reply) if reply.trim().is_empty() => {
                messages.pop();
                Err(GatewayError::EmptyResponse)
            }
            Ok(reply) => {
                messages.push(ChatMessage::assistant(reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                // Keep history consistent with what the API has answered.
                messages.pop();
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn reply(content: &str) -> String {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    fn body(messages: serde_json::Value) -> Matcher {
        Matcher::Json(json!({"model": "gpt-4o", "messages": messages}))
    }

    fn session(server: &Server) -> OpenAiSession {
        OpenAiSession::new(
            reqwest::Client::new(),
            format!("{}/chat/completions", server.url()).into(),
            ApiKey::new("sk-test").unwrap(),
            Model::default(),
            "be kind",
            CompletionSettings::default(),
        )
    }

    #[tokio::test]
    async fn test_second_turn_carries_history() {
        let mut server = Server::new_async().await;
        let first = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(body(json!([
                {"role": "system", "content": "be kind"},
                {"role": "user", "content": "pick a query"}
            ])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply("calm lake"))
            .create_async()
            .await;
        let second = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(body(json!([
                {"role": "system", "content": "be kind"},
                {"role": "user", "content": "pick a query"},
                {"role": "assistant", "content": "calm lake"},
                {"role": "user", "content": "pick a gif"}
            ])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply("https://media.giphy.com/media/a/giphy.gif"))
            .create_async()
            .await;

        let session = session(&server);
        assert_eq!(session.send("pick a query").await.unwrap(), "calm lake");
        assert_eq!(
            session.send("pick a gif").await.unwrap(),
            "https://media.giphy.com/media/a/giphy.gif"
        );

        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_turn_leaves_no_message() {
        let mut server = Server::new_async().await;
        let failing = server
            .mock("POST", "/chat/completions")
            .match_body(body(json!([
                {"role": "system", "content": "be kind"},
                {"role": "user", "content": "first try"}
            ])))
            .with_status(500)
            .with_body(r#"{"error":{"message":"upstream failure"}}"#)
            .create_async()
            .await;
        let retry = server
            .mock("POST", "/chat/completions")
            .match_body(body(json!([
                {"role": "system", "content": "be kind"},
                {"role": "user", "content": "second try"}
            ])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply("ok"))
            .create_async()
            .await;

        let session = session(&server);
        let err = session.send("first try").await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::RequestFailed {
                status: 500,
                message: "upstream failure".to_string()
            }
        );
        assert_eq!(session.send("second try").await.unwrap(), "ok");

        failing.assert_async().await;
        retry.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_reply_leaves_no_message() {
        let mut server = Server::new_async().await;
        let empty = server
            .mock("POST", "/chat/completions")
            .match_body(body(json!([
                {"role": "system", "content": "be kind"},
                {"role": "user", "content": "hello"}
            ])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(reply("   "))
            .expect(2)
            .create_async()
            .await;

        let session = session(&server);
        assert_eq!(session.send("hello").await.unwrap_err(), GatewayError::EmptyResponse);
        assert_eq!(session.send("hello").await.unwrap_err(), GatewayError::EmptyResponse);

        empty.assert_async().await;
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_authentication() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
            .create_async()
            .await;

        let err = session(&server).send("hello").await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Authentication("Incorrect API key provided".to_string())
        );
        assert!(!err.to_string().contains("sk-test"));
    }
}
