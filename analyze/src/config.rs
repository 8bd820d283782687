//! Analysis settings, loadable from a JSON file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::{default_seed_topics, DEFAULT_MIN_CLUSTER_SIZE};
use crate::responses::Delimiter;
use crate::topic_modeling::LdaConfig;

pub const EMOTIONS_QUESTION: &str = "What kind of emotions did the exhibit trigger in you?";
pub const STORY_QUESTION: &str =
    "Is there an item or story from the exhibit that stayed with you? If so, why?";
pub const TAKEAWAY_QUESTION: &str = "What is your key takeaway from this exhibition?";
pub const MOVED_QUESTION: &str = "To what extent did the exhibition move you?";

pub const EXPECTED_PHRASES: &[&str] = &["deeply moved", "very moved", "somewhat moved", "not at all"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Open-ended questions, combined for the overall model and modelled
    /// one by one in per-question mode.
    pub question_columns: Vec<String>,

    /// Likert-style question tabulated against `expected_phrases`.
    pub likert_column: String,

    pub expected_phrases: Vec<String>,

    pub seed_topics: Vec<Vec<String>>,

    /// Appended to the built-in stop-word list.
    pub extra_stop_words: Vec<String>,

    pub min_cluster_size: usize,

    /// Merge topics down to this many after fitting.
    pub target_topic_count: Option<usize>,

    pub top_words: usize,

    pub cloud_words: usize,

    pub delimiter: Delimiter,

    pub per_question: bool,

    pub model: LdaConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            question_columns: vec![
                EMOTIONS_QUESTION.to_string(),
                STORY_QUESTION.to_string(),
                TAKEAWAY_QUESTION.to_string(),
            ],
            likert_column: MOVED_QUESTION.to_string(),
            expected_phrases: EXPECTED_PHRASES.iter().map(|p| p.to_string()).collect(),
            seed_topics: default_seed_topics(),
            extra_stop_words: Vec::new(),
            min_cluster_size: DEFAULT_MIN_CLUSTER_SIZE,
            target_topic_count: None,
            top_words: 20,
            cloud_words: 200,
            delimiter: Delimiter::Auto,
            per_question: true,
            model: LdaConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Every column the input file must provide.
    pub fn required_columns(&self) -> Vec<String> {
        let mut columns = self.question_columns.clone();
        if !columns.contains(&self.likert_column) {
            columns.push(self.likert_column.clone());
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.question_columns.len(), 3);
        assert_eq!(config.required_columns().len(), 4);
        assert_eq!(config.required_columns()[3], MOVED_QUESTION);
        assert_eq!(config.seed_topics.len(), 6);
        assert_eq!(config.min_cluster_size, 10);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AnalysisConfig = serde_json::from_str(
            r#"{"min_cluster_size": 3, "delimiter": "semicolon", "model": {"num_topics": 4}}"#,
        )
        .unwrap();
        assert_eq!(config.min_cluster_size, 3);
        assert_eq!(config.delimiter, Delimiter::Semicolon);
        assert_eq!(config.model.num_topics, 4);
        assert_eq!(config.model.representative_docs, 3);
        assert_eq!(config.likert_column, MOVED_QUESTION);
    }
}
