//! Google Translate provider
//!
//! Two endpoints are supported:
//!
//! - **Cloud Translation API v2**, used when an API key is available. The key
//!   is read from the `GOOGLE_TRANSLATE_API_KEY` environment variable or passed
//!   explicitly. Obtain one from https://console.cloud.google.com/
//! - **Keyless web endpoint** (`translate_a/single?client=gtx`), used when no
//!   key is configured. It is rate limited by Google and may throttle heavy use.
//!
//! # Example
//!
//! ```ignore
//! use indic_translate::{MachineTranslator, GoogleTranslateProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API key from the environment if set, keyless endpoint otherwise
//!     let provider = GoogleTranslateProvider::from_env()?;
//!
//!     let result = provider.translate("வணக்கம் நண்பரே", "ta", "en").await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::translator::{MachineTranslator, normalize_locale, validate_locale};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing::{debug, info};

const CLOUD_V2_URL: &str = "https://translation.googleapis.com/language/translate/v2";
const KEYLESS_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Environment variable holding the Cloud Translation API key
pub const API_KEY_ENV: &str = "GOOGLE_TRANSLATE_API_KEY";

/// The Cloud API key travels in this header, never in the URL
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
enum Endpoint {
    CloudV2 { api_key: String },
    Keyless,
}

/// Google Translate provider
///
/// Requests are sent as-is with the HTTP client's default settings: there is
/// no retry and no custom timeout.
#[derive(Clone)]
pub struct GoogleTranslateProvider {
    endpoint: Endpoint,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL of the selected endpoint
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Maximum number of texts per Cloud API request
    const MAX_BATCH_SIZE: usize = 128;

    /// Maximum characters per string for the Cloud API
    const MAX_CHARS_CLOUD: usize = 30_000;

    /// Maximum characters per string for the keyless endpoint
    const MAX_CHARS_KEYLESS: usize = 5_000;

    /// Create a provider for the Cloud Translation API with an explicit key
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If the API key is empty or HTTP client creation fails
    pub fn new(api_key: String) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        info!("Google Translate provider initialized (Cloud Translation API v2)");
        Ok(Self {
            endpoint: Endpoint::CloudV2 { api_key },
            client: Self::build_client()?,
            base_url: CLOUD_V2_URL.to_string(),
        })
    }

    /// Create a provider for the keyless web endpoint
    pub fn keyless() -> MtResult<Self> {
        info!("Google Translate provider initialized (keyless endpoint)");
        Ok(Self {
            endpoint: Endpoint::Keyless,
            client: Self::build_client()?,
            base_url: KEYLESS_URL.to_string(),
        })
    }

    /// Create a provider from the `GOOGLE_TRANSLATE_API_KEY` environment variable
    ///
    /// Falls back to the keyless endpoint when the variable is unset or blank.
    pub fn from_env() -> MtResult<Self> {
        Self::from_key(std::env::var(API_KEY_ENV).ok())
    }

    /// Create a keyed provider when `api_key` holds a non-blank key, keyless otherwise
    pub fn from_key(api_key: Option<String>) -> MtResult<Self> {
        match api_key {
            Some(key) if !key.trim().is_empty() => Self::new(key),
            _ => Self::keyless(),
        }
    }

    /// Send requests to a different base URL (proxies, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether this provider uses the Cloud Translation API
    pub fn is_keyed(&self) -> bool {
        matches!(self.endpoint, Endpoint::CloudV2 { .. })
    }

    fn build_client() -> MtResult<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(concat!("indic-translate/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))
    }

    fn max_chars(&self) -> usize {
        match self.endpoint {
            Endpoint::CloudV2 { .. } => Self::MAX_CHARS_CLOUD,
            Endpoint::Keyless => Self::MAX_CHARS_KEYLESS,
        }
    }

    fn check_length(&self, text: &str) -> MtResult<()> {
        let max = self.max_chars();
        if text.chars().count() > max {
            return Err(MtError::TranslationError(format!(
                "Text exceeds maximum length of {} characters",
                max
            )));
        }
        Ok(())
    }

    /// Chunk a batch of texts into Cloud API sized slices
    fn chunk_batch(texts: &[String]) -> Vec<&[String]> {
        texts.chunks(Self::MAX_BATCH_SIZE).collect()
    }

    /// Turn a non-success HTTP status into an error
    async fn check_status(&self, response: reqwest::Response) -> MtResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Err(if status == StatusCode::TOO_MANY_REQUESTS {
            MtError::TranslationError(format!(
                "Provider is throttling requests ({}): {}",
                status, error_text
            ))
        } else if status.is_client_error() && self.is_keyed() {
            MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
        } else {
            MtError::TranslationError(format!("API error ({}): {}", status, error_text))
        })
    }

    /// Translate a chunk of texts via the Cloud API
    async fn translate_chunk_cloud(
        &self,
        api_key: &str,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        let body = json!({
            "q": texts,
            "source": normalize_locale(source_locale),
            "target": normalize_locale(target_locale),
            "format": "text"
        });

        debug!(count = texts.len(), "Sending Cloud Translation request");
        let response = self
            .client
            .post(&self.base_url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;
        let response = self.check_status(response).await?;

        let json: Value = response.json().await.map_err(|e| {
            MtError::TranslationError(format!(
                "Failed to parse API response: {}",
                e.without_url()
            ))
        })?;

        let results = parse_cloud_response(&json)?;
        if results.len() != texts.len() {
            return Err(MtError::TranslationError(format!(
                "Invalid API response: expected {} translations, got {}",
                texts.len(),
                results.len()
            )));
        }
        Ok(results)
    }

    /// Translate one text via the keyless endpoint
    async fn translate_keyless(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        let source = normalize_locale(source_locale);
        let target = normalize_locale(target_locale);
        let url = reqwest::Url::parse_with_params(
            &self.base_url,
            &[
                ("client", "gtx"),
                ("sl", source.as_str()),
                ("tl", target.as_str()),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| MtError::ConfigError(format!("Invalid provider URL: {}", e)))?;

        debug!("Sending keyless translation request");
        let response = self.client.get(url).send().await?;
        let response = self.check_status(response).await?;

        let json: Value = response.json().await.map_err(|e| {
            MtError::TranslationError(format!(
                "Failed to parse API response: {}",
                e.without_url()
            ))
        })?;

        parse_keyless_response(&json)
    }
}

/// Extract translations from a Cloud API v2 response
///
/// Expected shape: `{"data": {"translations": [{"translatedText": "..."}]}}`
fn parse_cloud_response(json: &Value) -> MtResult<Vec<String>> {
    let translations = json["data"]["translations"].as_array().ok_or_else(|| {
        MtError::TranslationError(
            "Invalid API response: missing 'data.translations' array".to_string(),
        )
    })?;

    translations
        .iter()
        .map(|t| {
            t["translatedText"]
                .as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| {
                    MtError::TranslationError(
                        "Invalid API response: missing 'translatedText' field".to_string(),
                    )
                })
        })
        .collect()
}

/// Extract the translation from a keyless endpoint response
///
/// The response is a nested array; its first element lists sentence segments
/// as `[translated, source, ...]`. The translation is the concatenation of
/// the translated part of every segment.
fn parse_keyless_response(json: &Value) -> MtResult<String> {
    let segments = json
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            MtError::TranslationError("Invalid API response: missing segment list".to_string())
        })?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(MtError::TranslationError(
            "Invalid API response: no translated text".to_string(),
        ));
    }

    Ok(translated)
}

impl std::fmt::Debug for GoogleTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endpoint = match self.endpoint {
            Endpoint::CloudV2 { .. } => "cloud-v2",
            Endpoint::Keyless => "keyless",
        };
        let mut debug = f.debug_struct("GoogleTranslateProvider");
        debug.field("endpoint", &endpoint);
        if self.is_keyed() {
            debug.field("api_key", &"***");
        }
        debug.field("base_url", &self.base_url).finish()
    }
}

#[async_trait]
impl MachineTranslator for GoogleTranslateProvider {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if text.is_empty() {
            return Ok(String::new());
        }
        self.check_length(text)?;

        match &self.endpoint {
            Endpoint::CloudV2 { api_key } => {
                let results = self
                    .translate_chunk_cloud(api_key, &[text.to_string()], source_locale, target_locale)
                    .await?;
                Ok(results.into_iter().next().unwrap_or_default())
            }
            Endpoint::Keyless => {
                self.translate_keyless(text, source_locale, target_locale)
                    .await
            }
        }
    }

    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        validate_locale(source_locale)?;
        validate_locale(target_locale)?;

        if texts.is_empty() {
            return Ok(Vec::new());
        }

        for (i, text) in texts.iter().enumerate() {
            self.check_length(text).map_err(|_| {
                MtError::TranslationError(format!(
                    "Text at index {} exceeds maximum length of {} characters",
                    i,
                    self.max_chars()
                ))
            })?;
        }

        let mut all_results = Vec::with_capacity(texts.len());
        match &self.endpoint {
            Endpoint::CloudV2 { api_key } => {
                for chunk in Self::chunk_batch(texts) {
                    let chunk_results = self
                        .translate_chunk_cloud(api_key, chunk, source_locale, target_locale)
                        .await?;
                    all_results.extend(chunk_results);
                }
            }
            Endpoint::Keyless => {
                // One request per text, in order
                for text in texts {
                    all_results.push(self.translate(text, source_locale, target_locale).await?);
                }
            }
        }

        Ok(all_results)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
