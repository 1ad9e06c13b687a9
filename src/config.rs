//! Quiz configuration
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use color_recall::QuizConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = QuizConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = QuizConfig::default();
//! # Ok::<(), color_recall::QuizError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::quiz::DEFAULT_QUESTION_COUNT;
use crate::Result;

/// Tunable parameters for a quiz session.
///
/// Can be serialized to/from JSON so front ends can persist their settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Number of colors generated per session
    #[serde(default = "default_question_count")]
    pub num_questions: usize,
}

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            num_questions: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl QuizConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_question_count() {
        let config = QuizConfig::default();
        assert_eq!(config.num_questions, 10);
    }

    #[test]
    fn test_json_round_trip() {
        let config = QuizConfig { num_questions: 25 };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: QuizConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.num_questions, 25);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let parsed: QuizConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.num_questions, 10);
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = QuizConfig::from_json_file(Path::new("nonexistent_config.json"));
        assert!(result.is_err());
    }
}
