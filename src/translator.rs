//! Machine Translation trait and utilities
//!
//! The `MachineTranslator` trait abstracts over translation backends (Google
//! Translate, mock) so the service never depends on a specific provider.
//!
//! # Example
//!
//! ```ignore
//! use indic_translate::{MachineTranslator, GoogleTranslateProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslateProvider::from_env()?;
//!
//!     let result = provider.translate("வணக்கம்", "ta", "en").await?;
//!     println!("{}", result);
//!
//!     let texts = vec!["नमस्ते".to_string(), "मैं खाना खा रहा हूं".to_string()];
//!     let results = provider.translate_batch(&texts, "hi", "en").await?;
//!     println!("{:?}", results);
//!
//!     Ok(())
//! }
//! ```

use crate::error::{MtError, MtResult};
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations handle the actual translation work, either through an API
/// (Google Translate) or deterministic logic (Mock).
#[async_trait]
pub trait MachineTranslator: Send + Sync {
    /// Translate a single text string from source to target locale
    ///
    /// # Arguments
    ///
    /// * `text` - The text to translate
    /// * `source_locale` - Source language code (e.g., "ta", "hi-IN")
    /// * `target_locale` - Target language code (e.g., "en")
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The translated text, exactly as the provider returned it
    /// * `Err(MtError)` - If translation fails
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String>;

    /// Translate multiple strings
    ///
    /// Output order and length match the input.
    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>>;

    /// Name of this provider, used in logs and API responses
    fn provider_name(&self) -> &str;
}

/// Normalize a locale code by stripping region information
///
/// - `ta-IN` → `ta`
/// - `HI` → `hi`
/// - `te` → `te`
pub fn normalize_locale(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_lowercase()
}

/// Validate that a locale code is in acceptable format
///
/// Only ASCII alphanumerics, hyphens and underscores are allowed.
pub fn validate_locale(locale: &str) -> MtResult<()> {
    if locale.is_empty() {
        return Err(MtError::InvalidLocale("Locale code is empty".to_string()));
    }

    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(MtError::InvalidLocale(format!(
            "Invalid characters in locale code: {}",
            locale
        )));
    }

    Ok(())
}
