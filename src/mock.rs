//! Mock Machine Translator for testing
//!
//! A deterministic, network-free translator for exercising the translation
//! flow without reaching Google. Also available from the CLI via `--mock`.
//!
//! # Example
//!
//! ```ignore
//! use indic_translate::{MachineTranslator, MockTranslator, MockMode};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let result = mock.translate("உணவு", "ta", "en").await.unwrap();
//!     assert_eq!(result, "உணவு_en");
//! }
//! ```

use crate::error::{MtError, MtResult};
use crate::translator::MachineTranslator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append target locale suffix: "உணவு" → "உணவு_en"
    Suffix,

    /// Predefined (text, source_locale) → translation pairs,
    /// falling back to `Suffix` for anything unmapped
    Mappings(HashMap<(String, String), String>),

    /// Fail every call with a provider error
    Error(String),

    /// Return input unchanged
    NoOp,
}

/// Mock translator
///
/// Counts the calls it receives so tests can check whether the provider was
/// reached at all. Clones share the counter.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    /// Create a MockTranslator with simulated network delay
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Mock preloaded with translations of the phrases shown in the UI examples
    pub fn with_sample_phrases() -> Self {
        let pairs = [
            ("உணவு", "ta", "food"),
            ("நான் வீட்டுக்கு செல்கிறேன்", "ta", "I am going home"),
            ("வணக்கம் நண்பரே", "ta", "Hello friend"),
            ("नमस्ते", "hi", "Hello"),
            ("मैं खाना खा रहा हूं", "hi", "I am eating food"),
            ("आप कैसे हैं?", "hi", "How are you?"),
            ("హలో", "te", "Hello"),
            ("నేను భోజనం చేస్తున్నాను", "te", "I am having a meal"),
            ("మీరు ఎలా ఉన్నారు?", "te", "How are you?"),
        ];
        let map = pairs
            .into_iter()
            .map(|(text, source, translation)| {
                ((text.to_string(), source.to_string()), translation.to_string())
            })
            .collect();
        Self::new(MockMode::Mappings(map))
    }

    /// Number of translate calls received (a batch counts once)
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, source: &str, target: &str) -> MtResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), source.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl MachineTranslator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.apply_translation(text, source_locale, target_locale)
    }

    async fn translate_batch(
        &self,
        texts: &[String],
        source_locale: &str,
        target_locale: &str,
    ) -> MtResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Delay is per batch, not per string
        self.apply_delay().await;

        texts
            .iter()
            .map(|text| self.apply_translation(text, source_locale, target_locale))
            .collect()
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_single_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let result = mock.translate("உணவு", "ta", "en").await.unwrap();
        assert_eq!(result, "உணவு_en");
    }

    #[tokio::test]
    async fn test_suffix_batch_translation() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let texts = vec!["नमस्ते".to_string(), "हलो".to_string()];
        let results = mock.translate_batch(&texts, "hi", "en").await.unwrap();
        assert_eq!(results, vec!["नमस्ते_en", "हलो_en"]);
    }

    #[tokio::test]
    async fn test_mapping_uses_source_locale() {
        let mut map = HashMap::new();
        map.insert(("హలో".to_string(), "te".to_string()), "Hello".to_string());
        let mock = MockTranslator::new(MockMode::Mappings(map));

        assert_eq!(mock.translate("హలో", "te", "en").await.unwrap(), "Hello");
        // Same text under another source language is not mapped
        assert_eq!(mock.translate("హలో", "ta", "en").await.unwrap(), "హలో_en");
    }

    #[tokio::test]
    async fn test_sample_phrases() {
        let mock = MockTranslator::with_sample_phrases();
        assert_eq!(mock.translate("உணவு", "ta", "en").await.unwrap(), "food");
        assert_eq!(
            mock.translate("आप कैसे हैं?", "hi", "en").await.unwrap(),
            "How are you?"
        );
    }

    #[tokio::test]
    async fn test_error_mode_returns_error() {
        let mock = MockTranslator::new(MockMode::Error("API unavailable".to_string()));
        match mock.translate("hello", "ta", "en").await {
            Err(MtError::TranslationError(msg)) => assert_eq!(msg, "API unavailable"),
            _ => panic!("Expected TranslationError"),
        }

        let texts = vec!["hello".to_string()];
        assert!(mock.translate_batch(&texts, "ta", "en").await.is_err());
    }

    #[tokio::test]
    async fn test_noop_returns_unchanged() {
        let mock = MockTranslator::new(MockMode::NoOp);
        let text = "  வணக்கம்  ";
        assert_eq!(mock.translate(text, "ta", "en").await.unwrap(), text);
    }

    #[tokio::test]
    async fn test_call_counter_is_shared_between_clones() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let clone = mock.clone();
        assert_eq!(mock.calls(), 0);

        mock.translate("a", "ta", "en").await.unwrap();
        clone
            .translate_batch(&["b".to_string(), "c".to_string()], "ta", "en")
            .await
            .unwrap();

        assert_eq!(mock.calls(), 2);
        assert_eq!(clone.calls(), 2);
    }

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockTranslator::with_delay(MockMode::Suffix, 50);
        let start = std::time::Instant::now();
        let _ = mock.translate("hello", "ta", "en").await.unwrap();
        assert!(start.elapsed().as_millis() >= 50);
    }

    #[test]
    fn test_provider_name() {
        let mock = MockTranslator::new(MockMode::Suffix);
        assert_eq!(mock.provider_name(), "Mock Translator");
    }
}
