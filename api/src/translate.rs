//! Word translation through an external provider

use crate::error::QuranError;
use crate::translit::{arabic_to_phonetic, romanized_to_arabic};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const SOURCE_LANG: &str = "en";
const TARGET_LANG: &str = "ar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub translated_text: String,
    pub pronunciation: Option<String>,
}

/// Result of the word lookup operation, shaped for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLookup {
    /// Input after Romanized-Arabic normalization
    pub input: String,
    pub translated_word: String,
    pub pronunciation: String,
}

/// English to Arabic translation provider
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate_word(&self, word: &str) -> Result<TranslationResult, QuranError>;
}

/// Client for the public Google Translate endpoint.
///
/// Asks for the translation (`dt=t`) and the target-side romanization
/// (`dt=rm`) in one call. The request is bounded by the client timeout.
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, QuranError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QuranError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn with_defaults() -> Result<Self, QuranError> {
        Self::new(DEFAULT_ENDPOINT, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate_word(&self, word: &str) -> Result<TranslationResult, QuranError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", SOURCE_LANG),
                ("tl", TARGET_LANG),
                ("dt", "t"),
                ("dt", "rm"),
                ("q", word),
            ])
            .send()
            .await
            .map_err(|e| QuranError::Translation(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuranError::Translation(format!(
                "provider returned HTTP {}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| QuranError::Translation(format!("unreadable response: {}", e)))?;

        parse_google_response(&body)
    }
}

/// Pull translation and romanization out of the provider's nested arrays.
///
/// Shape: `[[["<ar>", "<en>", ...], ..., [null, null, "<ar romanized>", ...]], ...]`.
/// Translated segments carry a string at index 0; the romanization segment
/// has null there and the target romanization at index 2.
fn parse_google_response(body: &Value) -> Result<TranslationResult, QuranError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| QuranError::Translation("malformed response".to_string()))?;

    let mut translated_text = String::new();
    let mut pronunciation = None;
    for segment in segments {
        match segment.get(0).and_then(Value::as_str) {
            Some(text) => translated_text.push_str(text),
            None => {
                if let Some(roman) = segment.get(2).and_then(Value::as_str) {
                    if !roman.is_empty() {
                        pronunciation = Some(roman.to_string());
                    }
                }
            }
        }
    }

    if translated_text.trim().is_empty() {
        return Err(QuranError::Translation("empty translation".to_string()));
    }

    Ok(TranslationResult {
        translated_text,
        pronunciation,
    })
}

/// Normalize Romanized input, translate it and fill in a pronunciation.
///
/// When the provider gives no romanization, one is derived from the Arabic
/// result with [`arabic_to_phonetic`].
pub async fn lookup_word(translator: &dyn Translator, raw: &str) -> Result<WordLookup, QuranError> {
    let input = romanized_to_arabic(raw);
    let translation = translator.translate_word(&input).await.map_err(|e| {
        tracing::warn!(input = %input, error = %e, "translation failed");
        e
    })?;

    let pronunciation = translation
        .pronunciation
        .unwrap_or_else(|| arabic_to_phonetic(&translation.translated_text));

    tracing::debug!(input = %input, translated = %translation.translated_text, "word lookup");
    Ok(WordLookup {
        input,
        translated_word: translation.translated_text,
        pronunciation,
    })
}
