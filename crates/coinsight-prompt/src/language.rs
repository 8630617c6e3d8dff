//! Display languages supported by the aggregation pipeline
//!
//! The pipeline localizes three things by language: the news source filter,
//! the analysis prompt template, and the fallback failure message. Only the
//! two languages the product ships are representable; unknown codes are a
//! parse error rather than a silent passthrough.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported display languages
///
/// # Examples
///
/// ```
/// use coinsight_prompt::Language;
///
/// let lang = Language::Korean;
/// assert_eq!(lang.code(), "ko");
/// assert_eq!(lang.name(), "한국어");
///
/// // Parse from an ISO 639-1 code
/// let parsed: Language = "en".parse().unwrap();
/// assert_eq!(parsed, Language::English);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    /// Korean
    #[default]
    Korean,
    /// English
    English,
}

/// Error returned when a language code is not one of the supported two
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Get ISO 639-1 language code, as sent to the news source
    pub fn code(&self) -> &str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }

    /// Get language name for display
    pub fn name(&self) -> &str {
        match self {
            Language::Korean => "한국어",
            Language::English => "English",
        }
    }

    /// Parse from ISO 639-1 code or common name
    ///
    /// # Examples
    ///
    /// ```
    /// use coinsight_prompt::Language;
    ///
    /// assert_eq!(Language::from_code("ko"), Some(Language::Korean));
    /// assert_eq!(Language::from_code("korean"), Some(Language::Korean));
    /// assert_eq!(Language::from_code("en"), Some(Language::English));
    /// assert_eq!(Language::from_code("ja"), None);
    /// ```
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ko" | "korean" | "한국어" | "ko-kr" => Some(Language::Korean),
            "en" | "english" => Some(Language::English),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Korean.code(), "ko");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("ko"), Some(Language::Korean));
        assert_eq!(Language::from_code("KO"), Some(Language::Korean));
        assert_eq!(Language::from_code("korean"), Some(Language::Korean));
        assert_eq!(Language::from_code("한국어"), Some(Language::Korean));

        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code("English"), Some(Language::English));

        assert_eq!(Language::from_code("zh"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "ja".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("ja".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Language::Korean), "한국어");
        assert_eq!(format!("{}", Language::English), "English");
    }

    #[test]
    fn test_default() {
        assert_eq!(Language::default(), Language::Korean);
    }

    #[test]
    fn test_serde() {
        let lang = Language::English;
        let json = serde_json::to_string(&lang).unwrap();
        let parsed: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, lang);
    }
}
