//! One full analysis run over a loaded survey.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::frequency::{cloud_weights, phrase_counts, top_words, PhraseCount};
use crate::models::ResponseTable;
use crate::pipeline::{configure, fit_topics, PipelineConfig};
use crate::responses::{combine, combine_each};
use crate::stop_words::build_stop_words;
use crate::summary::{summarize, topic_distribution, TopicShare, TopicSummary};
use crate::topic_modeling::{Topic, TopicBackend, TopicModel};

/// Topics found in one document set.
#[derive(Debug, Clone, Serialize)]
pub struct TopicAnalysis {
    pub topic_info: Vec<Topic>,
    pub summaries: Vec<TopicSummary>,
    pub distribution: Vec<TopicShare>,
}

/// Per-question result. Topic ids are not comparable across questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionTopics {
    pub column: String,
    pub topics: Option<TopicAnalysis>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub respondents: usize,
    pub overall: TopicAnalysis,
    pub per_question: Vec<QuestionTopics>,
    pub likert_column: String,
    pub phrase_counts: Vec<PhraseCount>,
    pub top_words: Vec<(String, usize)>,
    pub cloud: Vec<(String, f64)>,
}

fn analyze_topics<B: TopicBackend>(
    backend: &B,
    documents: &[String],
    pipeline: &PipelineConfig,
) -> Result<TopicAnalysis> {
    let model = fit_topics(backend, documents, pipeline)?;
    let topic_info = model.topic_info();
    Ok(TopicAnalysis {
        summaries: summarize(&model),
        distribution: topic_distribution(&topic_info),
        topic_info,
    })
}

/// Combines, configures, fits and tabulates. Schema and configuration
/// problems surface before any model is fitted.
pub fn run_analysis<B: TopicBackend>(
    backend: &B,
    table: &ResponseTable,
    config: &AnalysisConfig,
) -> Result<AnalysisReport> {
    table.validate_columns(&config.required_columns())?;

    let stop_words = build_stop_words(&config.extra_stop_words);
    let combined = combine(table, &config.question_columns)?;
    let per_question_docs = if config.per_question {
        combine_each(table, &config.question_columns)?
    } else {
        Vec::new()
    };
    let pipeline = configure(
        stop_words.clone(),
        config.min_cluster_size,
        config.seed_topics.clone(),
        config.target_topic_count,
    )?;

    info!("Analyzing overall topics - respondents={}", table.len());
    let overall = analyze_topics(backend, &combined, &pipeline)?;

    let mut per_question = Vec::with_capacity(per_question_docs.len());
    for question in per_question_docs {
        info!("Analyzing question topics - column={:?}", question.column);
        let (topics, error) = match analyze_topics(backend, &question.documents, &pipeline) {
            Ok(topics) => (Some(topics), None),
            Err(AnalysisError::Input(reason)) => {
                warn!("Skipping question - column={:?}, reason={}", question.column, reason);
                (None, Some(reason))
            }
            Err(err) => return Err(err),
        };
        per_question.push(QuestionTopics {
            column: question.column,
            topics,
            error,
        });
    }

    let phrase_counts = phrase_counts(
        table.column_values(&config.likert_column)?,
        &config.expected_phrases,
    );

    let corpus = combined.join(" ").to_lowercase();
    let top_words = top_words(&corpus, config.top_words, &stop_words);
    let cloud = cloud_weights(&corpus, &stop_words, config.cloud_words);

    Ok(AnalysisReport {
        generated_at: Utc::now(),
        respondents: table.len(),
        overall,
        per_question,
        likert_column: config.likert_column.clone(),
        phrase_counts,
        top_words,
        cloud,
    })
}
