/// Error types for translation requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MtError {
    /// Input text was empty or contained only whitespace
    EmptyInput,
    /// Input text is longer than the accepted maximum (in characters)
    InputTooLong { len: usize, max: usize },
    /// The language label does not name one of the supported source languages
    UnsupportedLanguage(String),
    /// Locale code is malformed
    InvalidLocale(String),
    /// Missing or invalid configuration (API key, config file, port)
    ConfigError(String),
    /// Transport level failure while talking to the provider
    NetworkError(String),
    /// The provider answered with an error or an unusable response
    TranslationError(String),
}

impl MtError {
    /// Whether this error was raised before any provider call was made
    ///
    /// Validation errors are caused by user input and are reported without
    /// contacting the provider.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            MtError::EmptyInput | MtError::InputTooLong { .. } | MtError::UnsupportedLanguage(_)
        )
    }
}

impl std::fmt::Display for MtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MtError::EmptyInput => write!(f, "Please enter some text to translate"),
            MtError::InputTooLong { len, max } => write!(
                f,
                "Text is too long ({} characters, maximum is {})",
                len, max
            ),
            MtError::UnsupportedLanguage(label) => {
                write!(f, "Unsupported language: {}", label)
            }
            MtError::InvalidLocale(msg) => write!(f, "Invalid locale: {}", msg),
            MtError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MtError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            MtError::TranslationError(msg) => write!(f, "Translation error: {}", msg),
        }
    }
}

impl std::error::Error for MtError {}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs may carry credentials
        let err = err.without_url();
        if err.is_decode() {
            MtError::TranslationError(format!("Failed to parse API response: {}", err))
        } else {
            MtError::NetworkError(err.to_string())
        }
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(MtError::EmptyInput.is_validation());
        assert!(MtError::InputTooLong { len: 10, max: 5 }.is_validation());
        assert!(MtError::UnsupportedLanguage("Klingon".to_string()).is_validation());

        assert!(!MtError::NetworkError("reset".to_string()).is_validation());
        assert!(!MtError::TranslationError("bad".to_string()).is_validation());
        assert!(!MtError::ConfigError("missing".to_string()).is_validation());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            MtError::EmptyInput.to_string(),
            "Please enter some text to translate"
        );
        assert_eq!(
            MtError::UnsupportedLanguage("French".to_string()).to_string(),
            "Unsupported language: French"
        );
        assert!(
            MtError::InputTooLong { len: 6000, max: 5000 }
                .to_string()
                .contains("6000")
        );
    }
}
