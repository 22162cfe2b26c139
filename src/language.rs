//! Source language resolution
//!
//! Maps the labels shown in the UI (and the shorter forms accepted on the
//! command line) to the language codes understood by the translation provider.
//!
//! # Example
//!
//! ```ignore
//! use indic_translate::language::{SourceLanguage, resolve_language};
//!
//! let lang = resolve_language("Tamil (தமிழ்)")?;
//! assert_eq!(lang, SourceLanguage::Tamil);
//! assert_eq!(lang.code(), "ta");
//! ```

use crate::error::{MtError, MtResult};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Target language of every translation
pub const TARGET_LANGUAGE: &str = "en";

/// Languages accepted as translation input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceLanguage {
    #[default]
    Tamil,
    Hindi,
    Telugu,
}

impl SourceLanguage {
    /// All supported source languages, in the order the UI lists them
    pub const ALL: [SourceLanguage; 3] = [
        SourceLanguage::Tamil,
        SourceLanguage::Hindi,
        SourceLanguage::Telugu,
    ];

    /// Provider language code (ISO 639-1)
    pub fn code(self) -> &'static str {
        match self {
            SourceLanguage::Tamil => "ta",
            SourceLanguage::Hindi => "hi",
            SourceLanguage::Telugu => "te",
        }
    }

    /// English name of the language
    pub fn name(self) -> &'static str {
        match self {
            SourceLanguage::Tamil => "Tamil",
            SourceLanguage::Hindi => "Hindi",
            SourceLanguage::Telugu => "Telugu",
        }
    }

    /// Name of the language in its own script
    pub fn native_name(self) -> &'static str {
        match self {
            SourceLanguage::Tamil => "தமிழ்",
            SourceLanguage::Hindi => "हिन्दी",
            SourceLanguage::Telugu => "తెలుగు",
        }
    }

    /// Label shown in the language selector, e.g. `Tamil (தமிழ்)`
    pub fn label(self) -> String {
        format!("{} ({})", self.name(), self.native_name())
    }

    /// Guess the language of `text` from its dominant script
    ///
    /// Counts Tamil, Devanagari and Telugu characters and returns the language
    /// with the most matches. Returns `None` when the text contains none of
    /// these scripts.
    pub fn detect(text: &str) -> Option<SourceLanguage> {
        static SCRIPTS: LazyLock<[(SourceLanguage, Regex); 3]> = LazyLock::new(|| {
            [
                (SourceLanguage::Tamil, script_regex(r"\p{Tamil}")),
                (SourceLanguage::Hindi, script_regex(r"\p{Devanagari}")),
                (SourceLanguage::Telugu, script_regex(r"\p{Telugu}")),
            ]
        });

        SCRIPTS
            .iter()
            .map(|(lang, re)| (*lang, re.find_iter(text).count()))
            .filter(|(_, count)| *count > 0)
            .max_by_key(|(_, count)| *count)
            .map(|(lang, _)| lang)
    }
}

fn script_regex(pattern: &str) -> Regex {
    // Patterns are compile-time constants
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid script pattern {pattern}: {e}"))
}

impl std::fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for SourceLanguage {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_language(s)
    }
}

/// Resolve a language label to a supported source language
///
/// Accepts the UI label (`Tamil (தமிழ்)`), the English name in any case
/// (`tamil`), the native name (`தமிழ்`) and the language code (`ta`).
/// Surrounding whitespace is ignored.
///
/// # Returns
///
/// * `Ok(SourceLanguage)` - The matching language
/// * `Err(MtError::UnsupportedLanguage)` - For any other label
pub fn resolve_language(label: &str) -> MtResult<SourceLanguage> {
    let trimmed = label.trim();

    SourceLanguage::ALL
        .into_iter()
        .find(|lang| {
            trimmed == lang.label()
                || trimmed == lang.native_name()
                || trimmed.eq_ignore_ascii_case(lang.name())
                || trimmed.eq_ignore_ascii_case(lang.code())
        })
        .ok_or_else(|| MtError::UnsupportedLanguage(label.to_string()))
}

/// English name for a language code, or the code itself if unknown
pub fn language_name(code: &str) -> &str {
    match code {
        "en" => "English",
        other => resolve_code(other).map(SourceLanguage::name).unwrap_or(code),
    }
}

/// Native name for a language code, or the code itself if unknown
pub fn native_name(code: &str) -> &str {
    match code {
        "en" => "English",
        other => resolve_code(other)
            .map(SourceLanguage::native_name)
            .unwrap_or(code),
    }
}

fn resolve_code(code: &str) -> Option<SourceLanguage> {
    SourceLanguage::ALL.into_iter().find(|lang| lang.code() == code)
}

/// Serializable description of a language, as used by the JSON API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

impl LanguageInfo {
    /// Describe a language by its code
    pub fn from_code(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: language_name(code).to_string(),
            native_name: native_name(code).to_string(),
        }
    }
}

impl From<SourceLanguage> for LanguageInfo {
    fn from(lang: SourceLanguage) -> Self {
        Self::from_code(lang.code())
    }
}
