//! Submission text value object

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Minimum accepted length, in characters
pub const MIN_TEXT_CHARS: usize = 50;

/// Maximum accepted length, in characters
pub const MAX_TEXT_CHARS: usize = 50_000;

/// Advisory validity of the text field, shown next to the character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    Valid,
    #[default]
    Invalid,
}

impl Validity {
    /// Validity for a given character count
    pub fn for_length(length: usize) -> Self {
        if (MIN_TEXT_CHARS..=MAX_TEXT_CHARS).contains(&length) {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// Count characters the way the form does (Unicode scalar values)
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Text accepted for summarization (Value Object)
///
/// Only constructible through [`SubmissionText::parse`], so a request can
/// never carry a text outside `[MIN_TEXT_CHARS, MAX_TEXT_CHARS]`. Leading and
/// trailing whitespace is removed before the length is measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubmissionText(String);

impl SubmissionText {
    /// Trim and validate raw field content
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let length = char_count(trimmed);

        if length < MIN_TEXT_CHARS {
            return Err(ValidationError::TooShort { length });
        }
        if length > MAX_TEXT_CHARS {
            return Err(ValidationError::TooLong { length });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        char_count(&self.0)
    }

    /// Never true for a validated text
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for SubmissionText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SubmissionText::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for SubmissionText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(len: usize) -> String {
        "a".repeat(len)
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(SubmissionText::parse(&text_of(MIN_TEXT_CHARS)).is_ok());
        assert!(SubmissionText::parse(&text_of(MAX_TEXT_CHARS)).is_ok());
    }

    #[test]
    fn test_rejects_outside_bounds() {
        for len in [0, 1, 49] {
            let err = SubmissionText::parse(&text_of(len)).unwrap_err();
            assert_eq!(err, ValidationError::TooShort { length: len });
        }
        for len in [50_001, 60_000] {
            let err = SubmissionText::parse(&text_of(len)).unwrap_err();
            assert_eq!(err, ValidationError::TooLong { length: len });
        }
    }

    #[test]
    fn test_length_measured_after_trim() {
        let padded = format!("   {}\n\n", text_of(49));
        assert!(matches!(
            SubmissionText::parse(&padded),
            Err(ValidationError::TooShort { length: 49 })
        ));

        let text = SubmissionText::parse(&format!("  {}  ", text_of(60))).unwrap();
        assert_eq!(text.len(), 60);
        assert_eq!(text.as_str(), text_of(60));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 50 two-byte characters
        let text = "ą".repeat(50);
        assert_eq!(text.len(), 100);
        assert!(SubmissionText::parse(&text).is_ok());
    }

    #[test]
    fn test_validity_for_length() {
        assert_eq!(Validity::for_length(0), Validity::Invalid);
        assert_eq!(Validity::for_length(49), Validity::Invalid);
        assert_eq!(Validity::for_length(50), Validity::Valid);
        assert_eq!(Validity::for_length(50_000), Validity::Valid);
        assert_eq!(Validity::for_length(50_001), Validity::Invalid);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<SubmissionText, _> = serde_json::from_str(&format!("\"{}\"", text_of(80)));
        assert!(ok.is_ok());

        let short: Result<SubmissionText, _> = serde_json::from_str("\"too short\"");
        assert!(short.is_err());
    }
}
