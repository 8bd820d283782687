//! Error types for survey topic analysis.

use thiserror::Error;

use crate::topic_modeling::TopicId;

/// Errors that halt an analysis run.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A required question column is missing from the dataset.
    #[error("Column '{0}' not found in the dataset.")]
    Schema(String),

    /// The topic pipeline configuration is invalid.
    #[error("Invalid pipeline configuration: {0}")]
    Config(String),

    /// The documents handed to the topic model are unusable.
    #[error("Invalid topic model input: {0}")]
    Input(String),

    /// Malformed delimited input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// A per-topic representative document lookup failure.
///
/// Recovered inside the post-processing loop; never turned into an
/// [`AnalysisError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no representative documents for topic {topic}: {reason}")]
pub struct RepresentativeDocError {
    pub topic: TopicId,
    pub reason: String,
}

impl RepresentativeDocError {
    pub fn new(topic: TopicId, reason: impl Into<String>) -> Self {
        Self {
            topic,
            reason: reason.into(),
        }
    }
}
