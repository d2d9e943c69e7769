//! Anthropic Messages API 客户端（llm 特性）

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::llm::CompletionClient;
use crate::config::LlmOptions;
use crate::error::{ScanError, ScanResult};
use crate::utils::preview_compact;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const USER_AGENT: &str = concat!("sctscan/", env!("CARGO_PKG_VERSION"));
/// 重试间隔
const RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnthropicClient {
    http: reqwest::Client,
    options: LlmOptions,
}

impl AnthropicClient {
    /// 无凭据返回 Unavailable；HTTP 客户端构建失败返回 ScannerInitError
    pub fn new(options: LlmOptions) -> ScanResult<Self> {
        if !options.has_credential() {
            return Err(ScanError::Unavailable(
                "no API credential configured (set ANTHROPIC_API_KEY)".to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                ScanError::ScannerInitError(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self { http, options })
    }

    /// 简单重试：仅可重试的失败（传输错误 / 429 / 5xx）按固定间隔重试，返回最后一次错误
    async fn simple_retry<F, Fut, T>(&self, max_retries: usize, mut func: F) -> ScanResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AttemptError>>,
    {
        let mut last_err: Option<ScanError> = None;

        for attempt in 0..=max_retries {
            match func().await {
                Ok(res) => return Ok(res),
                Err(AttemptError { error, retryable }) => {
                    if !retryable {
                        return Err(error);
                    }
                    last_err = Some(error);
                    if attempt < max_retries {
                        log::warn!(
                            "Completion request failed, retrying (attempt {}/{})",
                            attempt + 1,
                            max_retries
                        );
                        tokio::time::sleep(RETRY_DELAY).await;
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| {
            ScanError::UpstreamError("All retry attempts exhausted".to_string())
        }))
    }

    async fn send_once(&self, prompt: &str) -> Result<String, AttemptError> {
        let body = MessagesRequest {
            model: &self.options.model,
            max_tokens: self.options.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .http
            .post(&self.options.endpoint)
            .header("x-api-key", &self.options.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| AttemptError::retryable(format!("Completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            let message = format!(
                "Completion endpoint returned status {}: {}",
                status,
                preview_compact(&detail, 200)
            );
            return Err(if is_retryable_status(status) {
                AttemptError::retryable(message)
            } else {
                AttemptError::fatal(message)
            });
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            AttemptError::fatal(format!("Completion response is not valid JSON: {}", e))
        })?;

        parsed
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or_else(|| AttemptError::fatal("Completion response contains no text block".to_string()))
    }
}

/// 单次请求失败：上游错误 + 是否值得重试
#[derive(Debug)]
struct AttemptError {
    error: ScanError,
    retryable: bool,
}

impl AttemptError {
    fn retryable(message: String) -> Self {
        Self {
            error: ScanError::UpstreamError(message),
            retryable: true,
        }
    }

    fn fatal(message: String) -> Self {
        Self {
            error: ScanError::UpstreamError(message),
            retryable: false,
        }
    }
}

/// 限流与服务端错误可重试；其余 4xx（鉴权 / 请求格式）重试无意义
#[inline]
fn is_retryable_status(status: reqwest::StatusCode) -> bool {
    status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    fn model(&self) -> &str {
        &self.options.model
    }

    async fn complete(&self, prompt: &str) -> ScanResult<String> {
        let max_retries = self.options.retry.max_retries();
        self.simple_retry(max_retries, || self.send_once(prompt)).await
    }
}
