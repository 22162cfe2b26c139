//! Translator form state
//!
//! Models the input and output panels of the translator UI: a language
//! selector, an input box and a read-only output box. The interactive CLI
//! drives one of these; the browser page implements the same behavior.

use crate::error::MtResult;
use crate::language::{SourceLanguage, resolve_language};
use crate::request::TranslationResult;
use crate::service::TranslationService;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslatorForm {
    language: SourceLanguage,
    input: String,
    output: String,
}

impl TranslatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> SourceLanguage {
        self.language
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Switch the source language; an unknown label leaves the form unchanged
    pub fn select_language(&mut self, label: &str) -> MtResult<SourceLanguage> {
        self.language = resolve_language(label)?;
        Ok(self.language)
    }

    /// Translate the current input and show the outcome in the output panel
    ///
    /// Only the output panel changes, whether the translation succeeds or not.
    pub async fn submit(&mut self, service: &TranslationService) -> TranslationResult {
        let result = service
            .translate(&self.input, &self.language.label())
            .await;
        self.output = result.display_text().to_string();
        result
    }

    /// Empty both the input and output panels
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockMode, MockTranslator};
    use std::sync::Arc;

    #[test]
    fn test_new_form_is_empty_with_tamil_selected() {
        let form = TranslatorForm::new();
        assert_eq!(form.language(), SourceLanguage::Tamil);
        assert_eq!(form.input(), "");
        assert_eq!(form.output(), "");
    }

    #[tokio::test]
    async fn test_submit_shows_translation() {
        let service = TranslationService::new(Arc::new(MockTranslator::with_sample_phrases()));
        let mut form = TranslatorForm::new();
        form.select_language("Hindi (हिन्दी)").unwrap();
        form.set_input("मैं खाना खा रहा हूं");

        let result = form.submit(&service).await;
        assert!(result.is_success());
        assert_eq!(form.output(), "I am eating food");
        assert_eq!(form.input(), "मैं खाना खा रहा हूं");
    }

    #[tokio::test]
    async fn test_failure_keeps_input_and_language() {
        let service = TranslationService::new(Arc::new(MockTranslator::new(MockMode::Error(
            "timed out".to_string(),
        ))));
        let mut form = TranslatorForm::new();
        form.select_language("te").unwrap();
        form.set_input("హలో");

        let result = form.submit(&service).await;
        assert!(!result.is_success());
        assert!(form.output().contains("timed out"));
        assert_eq!(form.input(), "హలో");
        assert_eq!(form.language(), SourceLanguage::Telugu);
    }

    #[tokio::test]
    async fn test_blank_submit_shows_validation_message() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = TranslationService::new(Arc::new(mock.clone()));
        let mut form = TranslatorForm::new();
        form.set_input("   ");

        form.submit(&service).await;
        assert!(form.output().contains("Please enter some text"));
        assert_eq!(form.input(), "   ");
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_clear_resets_input_and_output() {
        let service = TranslationService::new(Arc::new(MockTranslator::new(MockMode::Suffix)));
        let mut form = TranslatorForm::new();
        form.set_input("உணவு");
        form.submit(&service).await;
        assert!(!form.output().is_empty());

        form.clear();
        assert_eq!(form.input(), "");
        assert_eq!(form.output(), "");
    }

    #[test]
    fn test_unknown_language_leaves_form_unchanged() {
        let mut form = TranslatorForm::new();
        form.select_language("hi").unwrap();
        form.set_input("नमस्ते");
        let before = form.clone();

        assert!(form.select_language("Marathi").is_err());
        assert_eq!(form, before);
    }
}
