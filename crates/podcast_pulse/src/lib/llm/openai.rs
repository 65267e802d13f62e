use itertools::Itertools;
use serde::Deserialize;

use crate::{
    extract::Article, llm::notes::NoteSynthesizer, llm::script::ScriptSynthesizer,
};
use episode_store::ArticleNotes;

/// Chat-completions client used for both per-article notes and whole-script
/// synthesis.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("No content in completion response")]
    EmptyCompletion,
}

impl OpenAIClient {
    const NOTES_SYSTEM_PROMPT: &'static str = include_str!("./prompts/notes_0.txt");
    const SCRIPT_SYSTEM_PROMPT: &'static str = include_str!("./prompts/script_0.txt");

    // Char budget per prompt token, used to clamp article text.
    const APPROX_CHARS_PER_TOKEN: usize = 4;

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_completion_request(
        &self,
        model_name: impl Into<String>,
        system_content: impl Into<String>,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": model_name.into(),
            "messages": [
                {
                    "role": "system",
                    "content": system_content.into()
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

impl CompletionResponse {
    fn into_content(self) -> Result<String, OpenAIError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(OpenAIError::EmptyCompletion)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl NoteSynthesizer for OpenAIClient {
    const NOTES_MODEL: &'static str = "gpt-4-turbo-preview";
    type Error = OpenAIError;

    async fn synthesize_notes(&self, article: &Article) -> Result<String, Self::Error> {
        let budget = Self::CONTEXT_WINDOW_LIMIT * Self::APPROX_CHARS_PER_TOKEN;
        let clamped = Article {
            url: article.url.clone(),
            title: article.title.clone(),
            text: clamp_chars(&article.text, budget).to_string(),
        };
        let payload = serde_json::to_string(&clamped)?;

        let response = self
            .send_completion_request(
                Self::NOTES_MODEL,
                Self::NOTES_SYSTEM_PROMPT,
                format!("Here is the article to analyze:\n{payload}"),
            )
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to synthesize article notes"))?;

        response.into_content()
    }
}

impl ScriptSynthesizer for OpenAIClient {
    const SCRIPT_MODEL: &'static str = "gpt-4-turbo-preview";
    type Error = OpenAIError;

    async fn synthesize_script(&self, notes: &[ArticleNotes]) -> Result<String, Self::Error> {
        let digest = notes
            .iter()
            .map(|n| format!("Article: {}\nNotes: {}\n", n.title, n.notes))
            .join("\n");

        let response = self
            .send_completion_request(
                Self::SCRIPT_MODEL,
                Self::SCRIPT_SYSTEM_PROMPT,
                format!(
                    "Here are the notes from multiple articles that should be discussed in the podcast:\n\n{digest}"
                ),
            )
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to synthesize episode script"))?;

        response.into_content()
    }
}

/// Clamps `s` to at most `max` characters on a char boundary.
fn clamp_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
