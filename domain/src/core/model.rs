//! Model identifier value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Model used when the model field is left blank
pub const DEFAULT_MODEL: &str = "google/gemini-flash-1.5";

/// Backend summarization model identifier (Value Object)
///
/// Opaque to this crate: the backend decides what identifiers it accepts.
/// Never blank; blank input resolves to [`DEFAULT_MODEL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

impl ModelId {
    /// Resolve raw field content into a model identifier
    ///
    /// Surrounding whitespace is removed; blank or whitespace-only input
    /// yields the default model.
    pub fn resolve(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::default()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the built-in default
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_MODEL
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self(DEFAULT_MODEL.to_string())
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ModelId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ModelId::resolve(s))
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        ModelId::resolve(s)
    }
}

impl Serialize for ModelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(ModelId::resolve(&s))
    }
}
