//! Secret word selection.
//!
//! A round's word comes from an external generative text service when
//! one is configured, raced against a fixed timer; every other outcome
//! (no credentials, timeout, API error, malformed response, repeat of a
//! recently used word) falls back to the bundled word bank. A round can
//! never fail because the generator is unavailable — the game has to be
//! fully playable offline.

mod bank;
mod ollama;
mod openai;

pub use ollama::OllamaWordProvider;
pub use openai::OpenAiWordProvider;

use crate::rng::SecureRandom;
use crate::types::{Category, Language, WordPair};
use async_trait::async_trait;
use std::time::Duration;

/// Result type for word generation
pub type WordResult<T> = Result<T, WordError>;

/// How many of the most recently used words the generator is told to
/// avoid.
pub const RECENT_WORD_WINDOW: usize = 20;

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3500);

/// Errors that can occur on the external word-generation path. None of
/// them escape [`WordSource`]; they all convert into a bank fallback.
#[derive(Debug, thiserror::Error)]
pub enum WordError {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("response parsing failed: {0}")]
    Parse(String),
}

/// A single word-generation request.
#[derive(Debug, Clone)]
pub struct WordRequest {
    pub category: Category,
    pub language: Language,
    /// Recently used words the generator should steer away from,
    /// oldest first.
    pub avoid: Vec<String>,
}

/// Trait that all word generators must implement
#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Generate a single bare term for the requested category/language.
    async fn generate_word(&self, request: &WordRequest) -> WordResult<String>;

    /// Generate two related-but-different terms for duel rounds.
    async fn generate_pair(&self, request: &WordRequest) -> WordResult<WordPair>;

    /// Get the name of this provider
    fn name(&self) -> &str;
}

/// Configuration for word providers, mirrored from the environment.
#[derive(Debug, Clone)]
pub struct WordsConfig {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub ollama_base_url: Option<String>,
    pub ollama_model: String,
    pub timeout: Duration,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            ollama_base_url: None,
            ollama_model: "llama3.2".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl WordsConfig {
    /// Load configuration from environment variables. Missing or empty
    /// variables are not an error; they route word fetching to the
    /// offline bank.
    pub fn from_env() -> Self {
        // Best effort; a missing .env file is the normal case.
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        Self {
            openai_api_key: std::env::var("OPENAI_API_KEY").ok().and_then(non_empty),
            openai_model: std::env::var("OPENAI_MODEL")
                .ok()
                .and_then(non_empty)
                .unwrap_or(defaults.openai_model),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL").ok().and_then(non_empty),
            ollama_model: std::env::var("OLLAMA_MODEL")
                .ok()
                .and_then(non_empty)
                .unwrap_or(defaults.ollama_model),
            timeout: std::env::var("WORD_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_TIMEOUT),
        }
    }

    /// Build a [`WordSource`] with the first configured provider, or an
    /// offline one when nothing is configured.
    pub fn build_source(&self) -> WordSource {
        let provider: Option<Box<dyn WordProvider>> = if let Some(api_key) = &self.openai_api_key {
            Some(Box::new(OpenAiWordProvider::new(
                api_key.clone(),
                self.openai_model.clone(),
            )))
        } else if let Some(base_url) = &self.ollama_base_url {
            Some(Box::new(OllamaWordProvider::new(
                base_url.clone(),
                self.ollama_model.clone(),
            )))
        } else {
            tracing::info!("no word generator configured, playing from the offline bank");
            None
        };

        WordSource::new(provider, self.timeout)
    }
}

/// Fetches secret words, racing the configured provider against a timer
/// and absorbing every failure into a bank fallback.
pub struct WordSource {
    provider: Option<Box<dyn WordProvider>>,
    timeout: Duration,
}

impl WordSource {
    pub fn new(provider: Option<Box<dyn WordProvider>>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// A source that only ever draws from the bundled bank.
    pub fn offline() -> Self {
        Self::new(None, DEFAULT_TIMEOUT)
    }

    pub fn from_env() -> Self {
        WordsConfig::from_env().build_source()
    }

    /// Fetch a single secret word. Infallible by design: whichever of
    /// the provider call and the timer resolves first wins, and any
    /// provider failure or repeat substitutes a bank word instead.
    pub async fn fetch_word(
        &self,
        category: Category,
        language: Language,
        recently_used: &[String],
    ) -> String {
        if let Some(provider) = &self.provider {
            let request = WordRequest {
                category,
                language,
                avoid: recent_window(recently_used),
            };
            match tokio::time::timeout(self.timeout, provider.generate_word(&request)).await {
                Ok(Ok(raw)) => {
                    let term = clean_term(&raw);
                    if !term.is_empty() && !contains_word(recently_used, &term) {
                        return term;
                    }
                    tracing::debug!(
                        provider = provider.name(),
                        "generated word was empty or a recent repeat, drawing from bank"
                    );
                }
                Ok(Err(e)) => {
                    tracing::warn!(provider = provider.name(), "word generation failed: {e}");
                }
                Err(_) => {
                    tracing::warn!(
                        provider = provider.name(),
                        "word generation timed out after {:?}",
                        self.timeout
                    );
                }
            }
        }
        fallback_word(category, language, recently_used)
    }

    /// Fetch a related-but-different word pair for duel rounds. The two
    /// words are guaranteed to differ; the fallback draws both from the
    /// same category bank so they stay related.
    pub async fn fetch_pair(
        &self,
        category: Category,
        language: Language,
        recently_used: &[String],
    ) -> WordPair {
        if let Some(provider) = &self.provider {
            let request = WordRequest {
                category,
                language,
                avoid: recent_window(recently_used),
            };
            match tokio::time::timeout(self.timeout, provider.generate_pair(&request)).await {
                Ok(Ok(pair)) => {
                    let word_a = clean_term(&pair.word_a);
                    let word_b = clean_term(&pair.word_b);
                    if !word_a.is_empty() && !word_b.is_empty() && !same_word(&word_a, &word_b) {
                        return WordPair { word_a, word_b };
                    }
                    tracing::debug!(
                        provider = provider.name(),
                        "generated pair was degenerate, drawing from bank"
                    );
                }
                Ok(Err(e)) => {
                    tracing::warn!(provider = provider.name(), "pair generation failed: {e}");
                }
                Err(_) => {
                    tracing::warn!(
                        provider = provider.name(),
                        "pair generation timed out after {:?}",
                        self.timeout
                    );
                }
            }
        }
        fallback_pair(category, language, recently_used)
    }
}

/// The most recent `RECENT_WORD_WINDOW` entries, oldest first.
fn recent_window(used: &[String]) -> Vec<String> {
    used.iter()
        .skip(used.len().saturating_sub(RECENT_WORD_WINDOW))
        .cloned()
        .collect()
}

/// Case-insensitive equality after trimming.
fn same_word(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn contains_word(list: &[String], term: &str) -> bool {
    list.iter().any(|used| same_word(used, term))
}

/// Trim surrounding whitespace, quotes and stray punctuation from a
/// generated term.
pub(crate) fn clean_term(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c| matches!(c, '"' | '\'' | '“' | '”' | '.' | ','))
        .trim()
        .to_string()
}

/// Bank pool for the pair, falling back to the broadest category when
/// the requested one has nothing to offer.
fn bank_pool(category: Category, language: Language) -> &'static [&'static str] {
    let pool = bank::entries(language, category);
    if pool.is_empty() {
        bank::entries(language, Category::Famous)
    } else {
        pool
    }
}

/// Draw a bank word, preferring entries not in `recently_used`. When
/// the filter would exhaust the bank, it is dropped and repeats become
/// acceptable.
fn fallback_word(category: Category, language: Language, recently_used: &[String]) -> String {
    let mut rng = SecureRandom::new();
    let pool = bank_pool(category, language);
    let fresh: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|word| !contains_word(recently_used, word))
        .collect();
    let choice = if fresh.is_empty() {
        rng.pick(pool).copied()
    } else {
        rng.pick(&fresh).copied()
    };
    choice.unwrap_or_default().to_string()
}

/// Draw two distinct related words from the bank.
fn fallback_pair(category: Category, language: Language, recently_used: &[String]) -> WordPair {
    let mut rng = SecureRandom::new();
    let word_a = fallback_word(category, language, recently_used);

    let pool = bank_pool(category, language);
    let others: Vec<&str> = pool
        .iter()
        .copied()
        .filter(|word| !same_word(word, &word_a))
        .collect();
    let word_b = match rng.pick(&others).copied() {
        Some(word) => word.to_string(),
        // Single-entry bank: borrow a distinct word from the broadest one.
        None => bank::entries(language, Category::Famous)
            .iter()
            .copied()
            .find(|word| !same_word(word, &word_a))
            .unwrap_or_default()
            .to_string(),
    };

    WordPair { word_a, word_b }
}

/// Build the prompt for a single-word request.
pub(crate) fn word_prompt(request: &WordRequest) -> String {
    let mut prompt = format!(
        "Generate one secret word for a social deduction party game. \
         Topic: {topic}. The term must be widely known to {language} speakers. \
         Return ONLY the term itself, nothing else. \
         Ensure variety and do not always pick the most obvious ones.",
        topic = request.category.topic(),
        language = language_name(request.language),
    );
    if !request.avoid.is_empty() {
        prompt.push_str(&format!(
            " Do not use any of these recently played words: {}.",
            request.avoid.join(", ")
        ));
    }
    prompt
}

/// Build the prompt for a duel pair request. The reply must be a strict
/// two-field JSON object so it can be validated structurally.
pub(crate) fn pair_prompt(request: &WordRequest) -> String {
    let mut prompt = format!(
        "Generate two related but clearly different secret words for a \
         social deduction party game. Topic: {topic}. Both terms must be \
         widely known to {language} speakers and must not be the same word. \
         Respond with ONLY a JSON object of the exact shape \
         {{\"word_a\": \"...\", \"word_b\": \"...\"}} and nothing else.",
        topic = request.category.topic(),
        language = language_name(request.language),
    );
    if !request.avoid.is_empty() {
        prompt.push_str(&format!(
            " Do not use any of these recently played words: {}.",
            request.avoid.join(", ")
        ));
    }
    prompt
}

fn language_name(language: Language) -> &'static str {
    match language {
        Language::En => "English",
        Language::Es => "Spanish",
    }
}

/// Parse and validate the structured duel response.
pub(crate) fn parse_pair(text: &str) -> WordResult<WordPair> {
    // Models occasionally wrap JSON in markdown fences.
    let stripped = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    let pair: WordPair =
        serde_json::from_str(stripped).map_err(|e| WordError::Parse(e.to_string()))?;
    if pair.word_a.trim().is_empty() || pair.word_b.trim().is_empty() {
        return Err(WordError::Parse("empty word in pair response".to_string()));
    }
    if same_word(&pair.word_a, &pair.word_b) {
        return Err(WordError::Parse(
            "pair response contains the same word twice".to_string(),
        ));
    }
    Ok(pair)
}
