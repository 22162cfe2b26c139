//! Request and result types for a single translation
//!
//! A [`TranslationRequest`] can only be built through validation, so holding
//! one means the text is non-blank and the language is supported.

use crate::error::{MtError, MtResult};
use crate::language::{LanguageInfo, SourceLanguage, TARGET_LANGUAGE, resolve_language};
use serde::Serialize;

/// Default maximum input length, in characters
pub const DEFAULT_MAX_INPUT_CHARS: usize = 5000;

/// Check that `text` is worth sending to the provider
///
/// Rejects empty and whitespace-only text, and text longer than `max_chars`
/// characters.
pub fn validate_text(text: &str, max_chars: usize) -> MtResult<()> {
    if text.trim().is_empty() {
        return Err(MtError::EmptyInput);
    }

    let len = text.chars().count();
    if len > max_chars {
        return Err(MtError::InputTooLong {
            len,
            max: max_chars,
        });
    }

    Ok(())
}

/// A validated translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    source_text: String,
    source_language: SourceLanguage,
}

impl TranslationRequest {
    /// Build a request from raw UI input
    ///
    /// The text is checked first, then the language label is resolved.
    pub fn new(text: &str, language_label: &str, max_chars: usize) -> MtResult<Self> {
        validate_text(text, max_chars)?;
        let source_language = resolve_language(language_label)?;

        Ok(Self {
            source_text: text.to_string(),
            source_language,
        })
    }

    /// Build a request for an already resolved language
    pub fn for_language(
        text: &str,
        source_language: SourceLanguage,
        max_chars: usize,
    ) -> MtResult<Self> {
        validate_text(text, max_chars)?;

        Ok(Self {
            source_text: text.to_string(),
            source_language,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn source_language(&self) -> SourceLanguage {
        self.source_language
    }
}

/// Why a translation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Rejected before contacting the provider
    Validation,
    /// The provider call failed
    Provider,
}

/// Outcome of one translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationResult {
    Translated { translated_text: String },
    Failed { kind: FailureKind, message: String },
}

impl TranslationResult {
    /// Convert an error into a failed result with a user-facing message
    pub fn from_error(err: &MtError) -> Self {
        if err.is_validation() {
            TranslationResult::Failed {
                kind: FailureKind::Validation,
                message: format!("⚠️ {}", err),
            }
        } else {
            TranslationResult::Failed {
                kind: FailureKind::Provider,
                message: format!("❌ Error: {}", err),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Translated { .. })
    }

    /// Text to show in the output panel: the translation or the error message
    pub fn display_text(&self) -> &str {
        match self {
            TranslationResult::Translated { translated_text } => translated_text,
            TranslationResult::Failed { message, .. } => message,
        }
    }

    pub fn into_result(self) -> Result<String, (FailureKind, String)> {
        match self {
            TranslationResult::Translated { translated_text } => Ok(translated_text),
            TranslationResult::Failed { kind, message } => Err((kind, message)),
        }
    }
}

/// Structured record of a successful translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationDetails {
    pub source_text: String,
    pub translation: String,
    pub source_language: LanguageInfo,
    pub target_language: LanguageInfo,
    pub provider: String,
}

impl TranslationDetails {
    pub fn new(request: &TranslationRequest, translation: String, provider: &str) -> Self {
        Self {
            source_text: request.source_text().to_string(),
            translation,
            source_language: request.source_language().into(),
            target_language: LanguageInfo::from_code(TARGET_LANGUAGE),
            provider: provider.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_text_rejects_blank() {
        for text in ["", " ", "\n\t  ", "\u{3000}"] {
            assert_eq!(
                validate_text(text, DEFAULT_MAX_INPUT_CHARS),
                Err(MtError::EmptyInput),
                "text {text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_text_counts_characters_not_bytes() {
        // Each Tamil letter here is several UTF-8 bytes
        let text = "உணவு";
        assert!(text.len() > 4);
        assert!(validate_text(text, 4).is_ok());
        assert_eq!(
            validate_text(text, 3),
            Err(MtError::InputTooLong { len: 4, max: 3 })
        );
    }

    #[test]
    fn test_request_checks_text_before_language() {
        let err = TranslationRequest::new("   ", "Klingon", DEFAULT_MAX_INPUT_CHARS).unwrap_err();
        assert_eq!(err, MtError::EmptyInput);
    }

    #[test]
    fn test_request_unsupported_language() {
        let err = TranslationRequest::new("hello", "French", DEFAULT_MAX_INPUT_CHARS).unwrap_err();
        assert_eq!(err, MtError::UnsupportedLanguage("French".to_string()));
    }

    #[test]
    fn test_request_keeps_text_as_entered() {
        let request =
            TranslationRequest::new("  नमस्ते ", "Hindi (हिन्दी)", DEFAULT_MAX_INPUT_CHARS).unwrap();
        assert_eq!(request.source_text(), "  नमस्ते ");
        assert_eq!(request.source_language(), SourceLanguage::Hindi);
    }

    #[test]
    fn test_result_from_error() {
        let validation = TranslationResult::from_error(&MtError::EmptyInput);
        match &validation {
            TranslationResult::Failed { kind, message } => {
                assert_eq!(*kind, FailureKind::Validation);
                assert!(message.contains("Please enter some text"));
            }
            _ => panic!("Expected failure"),
        }

        let provider =
            TranslationResult::from_error(&MtError::NetworkError("connection refused".into()));
        match &provider {
            TranslationResult::Failed { kind, message } => {
                assert_eq!(*kind, FailureKind::Provider);
                assert!(message.starts_with("❌ Error:"));
                assert!(message.contains("connection refused"));
            }
            _ => panic!("Expected failure"),
        }
        assert!(!provider.is_success());
    }

    #[test]
    fn test_display_text() {
        let ok = TranslationResult::Translated {
            translated_text: "food".to_string(),
        };
        assert!(ok.is_success());
        assert_eq!(ok.display_text(), "food");
        assert_eq!(ok.into_result(), Ok("food".to_string()));
    }

    #[test]
    fn test_details_describe_both_languages() {
        let request = TranslationRequest::new("உணவு", "ta", DEFAULT_MAX_INPUT_CHARS).unwrap();
        let details = TranslationDetails::new(&request, "food".to_string(), "Mock Translator");

        assert_eq!(details.source_language.code, "ta");
        assert_eq!(details.source_language.native_name, "தமிழ்");
        assert_eq!(details.target_language.code, "en");
        assert_eq!(details.target_language.name, "English");

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["translation"], "food");
        assert_eq!(json["provider"], "Mock Translator");
    }
}
