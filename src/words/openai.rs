use super::*;
use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

const SYSTEM_PROMPT: &str = "You are the word master for a social deduction party game. \
    Reply with exactly what is requested and nothing else - no explanations, \
    no quotes, no extra punctuation.";

/// OpenAI word provider
pub struct OpenAiWordProvider {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiWordProvider {
    /// Create a new OpenAI provider with the given API key and model
    pub fn new(api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        let client = Client::with_config(config);

        Self { client, model }
    }

    async fn complete(&self, user_prompt: String, max_tokens: u32) -> WordResult<String> {
        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .max_tokens(max_tokens)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()
                    .map_err(|e| WordError::Api(e.to_string()))?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_prompt)
                    .build()
                    .map_err(|e| WordError::Api(e.to_string()))?
                    .into(),
            ])
            .build()
            .map_err(|e| WordError::Api(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| WordError::Api(e.to_string()))?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| WordError::Parse("no content in response".to_string()))
    }
}

#[async_trait]
impl WordProvider for OpenAiWordProvider {
    async fn generate_word(&self, request: &WordRequest) -> WordResult<String> {
        let text = self.complete(word_prompt(request), 24).await?;
        Ok(text.trim().to_string())
    }

    async fn generate_pair(&self, request: &WordRequest) -> WordResult<WordPair> {
        let text = self.complete(pair_prompt(request), 64).await?;
        parse_pair(&text)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Language};

    #[tokio::test]
    #[ignore] // Only run with actual API key
    async fn generates_a_real_word() {
        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY not set");
        let provider = OpenAiWordProvider::new(api_key, "gpt-4o-mini".to_string());

        let request = WordRequest {
            category: Category::Animals,
            language: Language::En,
            avoid: vec!["Elephant".to_string()],
        };

        let word = provider.generate_word(&request).await.unwrap();
        assert!(!word.is_empty());
        println!("Generated word: {}", word);
    }
}
