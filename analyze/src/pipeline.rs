//! Assembles the configuration handed to a topic backend and runs the fit.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::error::{AnalysisError, Result};
use crate::stop_words::StopWordSet;
use crate::topic_modeling::{validate_documents, TopicBackend, TopicModel};

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

/// Keyword groups that bias clustering toward the themes the museum
/// analysts care about.
pub const DEFAULT_SEED_TOPICS: &[&[&str]] = &[
    &["children", "sad", "anger", "cry"],
    &["fear", "hope", "inspiration"],
    &["fear", "shock", "sadness", "U.S"],
    &["never again", "warning", "repeat", "history"],
    &["USA", "Sobibor", "Trump", "don't forget"],
    &["resist", "kind", "aware", "sadness"],
];

pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 10;

pub fn default_seed_topics() -> Vec<Vec<String>> {
    DEFAULT_SEED_TOPICS
        .iter()
        .map(|group| group.iter().map(|word| word.to_string()).collect())
        .collect()
}

/// Token-count vectorizer: lowercases, keeps runs of two or more word
/// characters, drops stop words.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    stop_words: StopWordSet,
}

impl Vectorizer {
    pub fn new(stop_words: StopWordSet) -> Self {
        Vectorizer { stop_words }
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn analyze(&self, document: &str) -> Vec<String> {
        let lowered = document.to_lowercase();
        TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }
}

/// Everything a backend needs besides the documents.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    vectorizer: Vectorizer,
    seed_topics: Vec<Vec<String>>,
    min_cluster_size: usize,
    target_topic_count: Option<usize>,
}

impl PipelineConfig {
    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    pub fn seed_topics(&self) -> &[Vec<String>] {
        &self.seed_topics
    }

    /// Clusters smaller than this are folded into the outlier topic.
    pub fn min_cluster_size(&self) -> usize {
        self.min_cluster_size
    }

    pub fn target_topic_count(&self) -> Option<usize> {
        self.target_topic_count
    }
}

pub fn configure(
    stop_words: StopWordSet,
    min_cluster_size: usize,
    seed_topics: Vec<Vec<String>>,
    target_topic_count: Option<usize>,
) -> Result<PipelineConfig> {
    if seed_topics.is_empty() {
        return Err(AnalysisError::Config("seed topic list is empty".into()));
    }
    if let Some(index) = seed_topics
        .iter()
        .position(|group| group.iter().all(|word| word.trim().is_empty()))
    {
        return Err(AnalysisError::Config(format!("seed topic group {index} is empty")));
    }
    if min_cluster_size < 2 {
        return Err(AnalysisError::Config(format!(
            "minimum cluster size must be at least 2, got {min_cluster_size}"
        )));
    }
    if target_topic_count == Some(0) {
        return Err(AnalysisError::Config("target topic count must be at least 1".into()));
    }

    Ok(PipelineConfig {
        vectorizer: Vectorizer::new(stop_words),
        seed_topics,
        min_cluster_size,
        target_topic_count,
    })
}

/// Fits `backend` on `documents` and applies the configured topic
/// reduction, if any.
pub fn fit_topics<B: TopicBackend>(
    backend: &B,
    documents: &[String],
    config: &PipelineConfig,
) -> Result<B::Model> {
    validate_documents(documents)?;
    let mut model = backend.fit(documents, config)?;

    if let Some(target) = config.target_topic_count() {
        let before = model.topic_info().iter().filter(|t| !t.is_outlier()).count();
        model.reduce_topics(documents, target)?;
        let after = model.topic_info().iter().filter(|t| !t.is_outlier()).count();
        info!("Reduced topics - before={}, after={}, target={}", before, after, target);
    }

    Ok(model)
}
