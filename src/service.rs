//! Translation service
//!
//! Ties validation, language resolution and the provider call together.
//! Every failure comes back as a [`TranslationResult::Failed`] value; nothing
//! here panics or propagates provider errors to the caller.

use crate::error::{MtError, MtResult};
use crate::language::TARGET_LANGUAGE;
use crate::request::{
    DEFAULT_MAX_INPUT_CHARS, TranslationDetails, TranslationRequest, TranslationResult,
};
use crate::translator::MachineTranslator;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Translates validated input into English through a provider
///
/// Holds no per-request state, so one instance can be shared by every
/// handler.
#[derive(Clone)]
pub struct TranslationService {
    translator: Arc<dyn MachineTranslator>,
    max_input_chars: usize,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn MachineTranslator>) -> Self {
        Self {
            translator,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    /// Override the maximum accepted input length (in characters)
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    pub fn max_input_chars(&self) -> usize {
        self.max_input_chars
    }

    pub fn provider_name(&self) -> &str {
        self.translator.provider_name()
    }

    /// Validate raw UI input into a request
    pub fn prepare(&self, text: &str, language_label: &str) -> MtResult<TranslationRequest> {
        TranslationRequest::new(text, language_label, self.max_input_chars)
    }

    /// Translate `text` written in the language named by `language_label`
    ///
    /// Invalid input is reported without calling the provider. Provider
    /// failures are logged and returned as a failed result.
    pub async fn translate(&self, text: &str, language_label: &str) -> TranslationResult {
        match self.prepare(text, language_label) {
            Ok(request) => self.translate_request(&request).await,
            Err(err) => {
                warn!("Rejected translation request: {}", err);
                TranslationResult::from_error(&err)
            }
        }
    }

    /// Translate an already validated request
    pub async fn translate_request(&self, request: &TranslationRequest) -> TranslationResult {
        match self.call_provider(request).await {
            Ok(translated_text) => TranslationResult::Translated { translated_text },
            Err(err) => TranslationResult::from_error(&err),
        }
    }

    /// Translate and describe the result, for structured API responses
    pub async fn translate_detailed(
        &self,
        text: &str,
        language_label: &str,
    ) -> MtResult<TranslationDetails> {
        let request = self.prepare(text, language_label).inspect_err(|err| {
            warn!("Rejected translation request: {}", err);
        })?;
        let translation = self.call_provider(&request).await?;
        Ok(TranslationDetails::new(
            &request,
            translation,
            self.provider_name(),
        ))
    }

    /// Translate several texts in one language
    ///
    /// Each text gets its own result, in input order. Invalid texts are
    /// reported individually; the valid ones are sent to the provider as one
    /// batch, and a batch failure marks each of them as failed.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        language_label: &str,
    ) -> Vec<TranslationResult> {
        let prepared: Vec<MtResult<TranslationRequest>> = texts
            .iter()
            .map(|text| self.prepare(text, language_label))
            .collect();

        let valid: Vec<&TranslationRequest> =
            prepared.iter().filter_map(|r| r.as_ref().ok()).collect();
        let Some(source) = valid.first().map(|r| r.source_language()) else {
            return prepared
                .iter()
                .filter_map(|r| r.as_ref().err())
                .map(TranslationResult::from_error)
                .collect();
        };

        let sources: Vec<String> = valid.iter().map(|r| r.source_text().to_string()).collect();
        let translated = self
            .translator
            .translate_batch(&sources, source.code(), TARGET_LANGUAGE)
            .await
            .and_then(|out| {
                if out.len() == sources.len() {
                    Ok(out)
                } else {
                    Err(MtError::TranslationError(format!(
                        "Provider returned {} translations for {} texts",
                        out.len(),
                        sources.len()
                    )))
                }
            });

        match translated {
            Ok(out) => {
                info!(count = out.len(), provider = self.provider_name(), "Translated batch");
                let mut out = out.into_iter();
                prepared
                    .iter()
                    .map(|r| match r {
                        Ok(_) => match out.next() {
                            Some(translated_text) => {
                                TranslationResult::Translated { translated_text }
                            }
                            None => TranslationResult::from_error(&MtError::TranslationError(
                                "Missing translation".to_string(),
                            )),
                        },
                        Err(err) => TranslationResult::from_error(err),
                    })
                    .collect()
            }
            Err(err) => {
                error!("Batch translation error: {}", err);
                prepared
                    .iter()
                    .map(|r| match r {
                        Ok(_) => TranslationResult::from_error(&err),
                        Err(e) => TranslationResult::from_error(e),
                    })
                    .collect()
            }
        }
    }

    async fn call_provider(&self, request: &TranslationRequest) -> MtResult<String> {
        let source = request.source_language();
        match self
            .translator
            .translate(request.source_text(), source.code(), TARGET_LANGUAGE)
            .await
        {
            Ok(translated) => {
                info!(
                    source = source.code(),
                    provider = self.provider_name(),
                    "Translated {} characters",
                    request.source_text().chars().count()
                );
                Ok(translated)
            }
            Err(err) => {
                error!("Translation error: {}", err);
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("provider", &self.provider_name())
            .field("max_input_chars", &self.max_input_chars)
            .finish()
    }
}
