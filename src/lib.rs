//! Translate Tamil, Hindi and Telugu text into English
//!
//! Input is validated and its language label resolved before a single call
//! is made to a machine translation provider. Failures come back as values
//! carrying a message for the user, never as panics.
//!
//! # Workflow Example
//!
//! ```ignore
//! use indic_translate::{GoogleTranslateProvider, TranslationService, TranslationResult};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Pick a provider (keyless unless GOOGLE_TRANSLATE_API_KEY is set)
//!     let provider = GoogleTranslateProvider::from_env()?;
//!
//!     // 2. Wrap it in a service
//!     let service = TranslationService::new(Arc::new(provider));
//!
//!     // 3. Translate UI input
//!     match service.translate("வணக்கம் நண்பரே", "Tamil (தமிழ்)").await {
//!         TranslationResult::Translated { translated_text } => println!("{}", translated_text),
//!         TranslationResult::Failed { message, .. } => eprintln!("{}", message),
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod google_translate;
pub mod language;
pub mod logging;
pub mod mock;
pub mod request;
pub mod service;
pub mod translator;


// Re-export main types for convenient access
pub use config::{AppConfig, ProviderKind};
pub use error::{MtError, MtResult};
pub use form::TranslatorForm;
pub use google_translate::GoogleTranslateProvider;
pub use language::{LanguageInfo, SourceLanguage, TARGET_LANGUAGE, resolve_language};
pub use logging::init_tracing;
pub use mock::{MockMode, MockTranslator};
pub use request::{
    FailureKind, TranslationDetails, TranslationRequest, TranslationResult, validate_text,
};
pub use service::TranslationService;
pub use translator::MachineTranslator;
