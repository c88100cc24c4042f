use crate::llm::provider::{LlmError, LlmProvider, LlmRequest, LlmResponse, TokenUsage};
use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, ChatCompletionResponseFormat,
        ChatCompletionResponseFormatType, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// OpenAI-backed provider with a bounded retry loop. Rate-limit errors back
/// off exponentially; other transient errors retry with a short linear delay.
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    max_retries: u32,
}

impl OpenAiProvider {
    pub fn new(model: Option<String>) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY not set"))?;
        Ok(Self::with_api_key(
            api_key,
            model.unwrap_or_else(|| "gpt-4o".to_string()),
        ))
    }

    pub fn with_api_key(api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            model,
            max_retries: 3,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let system_message = ChatCompletionRequestSystemMessage {
            content: request.system_prompt.clone(),
            ..Default::default()
        };
        let user_message = ChatCompletionRequestUserMessage {
            content: async_openai::types::ChatCompletionRequestUserMessageContent::Text(
                request.user_prompt.clone(),
            ),
            ..Default::default()
        };

        let api_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestMessage::System(system_message),
                ChatCompletionRequestMessage::User(user_message),
            ])
            .temperature(request.temperature)
            .max_tokens(request.max_tokens as u16)
            .response_format(ChatCompletionResponseFormat {
                r#type: ChatCompletionResponseFormatType::JsonObject,
            })
            .build()
            .map_err(|e| LlmError::Api(e.to_string()))?;

        let mut attempt = 0;
        let response = loop {
            attempt += 1;
            debug!(model = %self.model, attempt, "semantic completion call");

            match self.client.chat().create(api_request.clone()).await {
                Ok(response) => break response,
                Err(e) => {
                    let message = e.to_string();
                    warn!(attempt, error = %message, "completion call failed");

                    if attempt >= self.max_retries {
                        return Err(LlmError::Api(message));
                    }

                    let wait = if message.contains("rate") {
                        Duration::from_secs(2_u64.pow(attempt))
                    } else {
                        Duration::from_millis(100 * attempt as u64)
                    };
                    tokio::time::sleep(wait).await;
                }
            }
        };

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| LlmError::InvalidResponse("no content in response".to_string()))?;

        let usage = response
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        debug!(tokens = usage.total_tokens, "semantic completion received");

        Ok(LlmResponse {
            content,
            model: response.model,
            usage,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
