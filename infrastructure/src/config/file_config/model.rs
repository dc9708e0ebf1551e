//! Model configuration from TOML (`[model]` section)

use pareto_domain::{DEFAULT_MODEL, ModelId};
use serde::{Deserialize, Serialize};

/// Raw model configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Value pre-filled into the model field
    pub default: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_MODEL.to_string(),
        }
    }
}

impl FileModelConfig {
    /// Blank values fall back to the built-in default model
    pub fn resolve(&self) -> ModelId {
        ModelId::resolve(&self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_default_resolves_to_builtin() {
        let config = FileModelConfig {
            default: "".to_string(),
        };
        assert!(config.resolve().is_default());
    }
}
