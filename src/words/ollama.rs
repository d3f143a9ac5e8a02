use super::*;
use serde::{Deserialize, Serialize};

/// Ollama word provider
pub struct OllamaWordProvider {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaWordProvider {
    /// Create a new Ollama provider with the given base URL and model
    pub fn new(base_url: String, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        Self {
            base_url,
            model,
            client,
        }
    }

    async fn complete(&self, prompt: String, num_predict: u32) -> WordResult<String> {
        let ollama_request = OllamaGenerateRequest {
            model: self.model.clone(),
            prompt,
            stream: false,
            options: Some(OllamaOptions {
                num_predict: Some(num_predict),
            }),
        };

        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&ollama_request)
            .send()
            .await
            .map_err(|e| WordError::Api(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WordError::Api(format!(
                "Ollama API returned status: {}",
                response.status()
            )));
        }

        let ollama_response: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| WordError::Parse(e.to_string()))?;

        Ok(ollama_response.response)
    }
}

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    num_predict: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaGenerateResponse {
    response: String,
    #[serde(default)]
    #[allow(dead_code)] // Part of Ollama API response format
    done: bool,
}

#[async_trait]
impl WordProvider for OllamaWordProvider {
    async fn generate_word(&self, request: &WordRequest) -> WordResult<String> {
        let text = self.complete(word_prompt(request), 24).await?;
        Ok(text.trim().to_string())
    }

    async fn generate_pair(&self, request: &WordRequest) -> WordResult<WordPair> {
        let text = self.complete(pair_prompt(request), 64).await?;
        parse_pair(&text)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
