//! Display-ready topic summaries.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::topic_modeling::{Topic, TopicId, TopicModel};

static RANK_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+_").unwrap());

/// Keywords shown per topic.
pub const MAX_KEYWORDS: usize = 10;

pub const NO_REPRESENTATIVE: &str = "No representative examples found.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicSummary {
    pub topic_id: TopicId,
    pub name: String,
    pub count: usize,
    pub keywords: Vec<String>,
    pub representative: Option<String>,
}

impl TopicSummary {
    pub fn keyword_line(&self) -> String {
        self.keywords.join(", ")
    }

    pub fn representative_text(&self) -> &str {
        self.representative.as_deref().unwrap_or(NO_REPRESENTATIVE)
    }
}

/// Strips a leading `<number>_` from a topic label.
pub fn clean_topic_name(name: &str) -> String {
    RANK_PREFIX.replace(name, "").into_owned()
}

/// Summarizes every non-outlier topic in `topic_info()` order. A failed
/// representative lookup leaves that topic without an example and does
/// not affect the others.
pub fn summarize<M: TopicModel + ?Sized>(model: &M) -> Vec<TopicSummary> {
    model
        .topic_info()
        .into_iter()
        .filter(|topic| !topic.is_outlier())
        .map(|topic| {
            let mut keywords = model.keywords_of(topic.id);
            keywords.sort_by(|a, b| b.1.total_cmp(&a.1));

            let representative = match model.representative_documents(topic.id) {
                Ok(docs) => docs.into_iter().next(),
                Err(err) => {
                    warn!("Representative lookup failed - topic={}, error={}", topic.id, err);
                    None
                }
            };

            TopicSummary {
                topic_id: topic.id,
                name: clean_topic_name(&topic.name),
                count: topic.count,
                keywords: keywords
                    .into_iter()
                    .take(MAX_KEYWORDS)
                    .map(|(word, _)| word)
                    .collect(),
                representative,
            }
        })
        .collect()
}

/// One slice of the topic distribution, outlier included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicShare {
    pub topic_id: TopicId,
    pub count: usize,
    pub share: f64,
}

pub fn topic_distribution(topics: &[Topic]) -> Vec<TopicShare> {
    let total: usize = topics.iter().map(|t| t.count).sum();
    topics
        .iter()
        .map(|topic| TopicShare {
            topic_id: topic.id,
            count: topic.count,
            share: if total == 0 {
                0.0
            } else {
                topic.count as f64 / total as f64
            },
        })
        .collect()
}
