use std::collections::{BTreeMap, BTreeSet, HashMap};

use counter::Counter;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AnalysisError, RepresentativeDocError, Result};
use crate::pipeline::{PipelineConfig, Vectorizer};

pub type TopicId = i32;

/// Documents the clustering could not place.
pub const OUTLIER_TOPIC: TopicId = -1;

/// Keywords kept per topic representation.
pub const TOPIC_KEYWORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub count: usize,
    pub name: String,
    pub keywords: Vec<(String, f64)>, // Word and its weight in this topic
    pub representative_docs: Vec<String>,
}

impl Topic {
    pub fn is_outlier(&self) -> bool {
        self.id == OUTLIER_TOPIC
    }
}

/// A fitted topic model.
pub trait TopicModel {
    /// Topic of every fitted document, in input order.
    fn assignments(&self) -> &[TopicId];

    /// All topics, outlier included, in rank order.
    fn topic_info(&self) -> Vec<Topic>;

    /// Keywords by descending weight; empty for an unknown topic.
    fn keywords_of(&self, topic: TopicId) -> Vec<(String, f64)>;

    fn representative_documents(
        &self,
        topic: TopicId,
    ) -> std::result::Result<Vec<String>, RepresentativeDocError>;

    /// Merges clusters until at most `target` non-outlier topics remain,
    /// relabelling assignments in place.
    fn reduce_topics(&mut self, documents: &[String], target: usize) -> Result<()>;
}

/// Something that can discover topics in a document list.
pub trait TopicBackend {
    type Model: TopicModel;

    fn fit(&self, documents: &[String], config: &PipelineConfig) -> Result<Self::Model>;
}

/// Rejects an empty document list or one with nothing but blank documents.
pub fn validate_documents(documents: &[String]) -> Result<()> {
    if documents.is_empty() {
        return Err(AnalysisError::Input("no documents to model".into()));
    }
    if documents.iter().all(|doc| doc.trim().is_empty()) {
        return Err(AnalysisError::Input(format!(
            "all {} documents are blank",
            documents.len()
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LdaConfig {
    pub num_topics: usize, // Candidate clusters before size filtering
    pub max_iterations: usize,
    pub alpha: f64, // Document-topic concentration
    pub beta: f64,  // Topic-word concentration
    pub seed_boost: f64, // Extra pseudo-count for a seed word in its own topic
    pub representative_docs: usize,
}

impl Default for LdaConfig {
    fn default() -> Self {
        LdaConfig {
            num_topics: 10,
            max_iterations: 10,
            alpha: 0.1,
            beta: 0.01,
            seed_boost: 1.0,
            representative_docs: 3,
        }
    }
}

/// Deterministic seeded topic backend: argmax Gibbs sweeps over word-topic
/// counts, then class-based TF-IDF for topic representations.
pub struct SeededLda {
    config: LdaConfig,
}

impl SeededLda {
    pub fn new(config: LdaConfig) -> Self {
        SeededLda { config }
    }

    /// Maps vocabulary ids of seed keywords to their seed topic. A word in
    /// several groups belongs to the first.
    fn seed_words(
        &self,
        config: &PipelineConfig,
        vocab_map: &HashMap<&str, usize>,
    ) -> HashMap<usize, usize> {
        let mut seeds = HashMap::new();
        for (topic, group) in config.seed_topics().iter().enumerate() {
            for keyword in group {
                for token in config.vectorizer().analyze(keyword) {
                    if let Some(&word_id) = vocab_map.get(token.as_str()) {
                        seeds.entry(word_id).or_insert(topic);
                    }
                }
            }
        }
        seeds
    }

    fn run_lda(
        &self,
        word_docs: &[Vec<usize>],
        vocab_size: usize,
        num_topics: usize,
        seeds: &HashMap<usize, usize>,
    ) -> Vec<Vec<usize>> {
        let mut word_topic_counts = vec![vec![0usize; num_topics]; vocab_size];
        let mut doc_topic_counts = vec![vec![0usize; num_topics]; word_docs.len()];
        let mut topic_counts = vec![0usize; num_topics];

        let mut doc_word_topics: Vec<Vec<usize>> = Vec::with_capacity(word_docs.len());
        for (doc_id, doc) in word_docs.iter().enumerate() {
            let mut word_topics = Vec::with_capacity(doc.len());
            for &word_id in doc {
                let topic = seeds.get(&word_id).copied().unwrap_or(doc_id % num_topics);
                word_topic_counts[word_id][topic] += 1;
                doc_topic_counts[doc_id][topic] += 1;
                topic_counts[topic] += 1;
                word_topics.push(topic);
            }
            doc_word_topics.push(word_topics);
        }

        for _iteration in 0..self.config.max_iterations {
            for (doc_id, doc) in word_docs.iter().enumerate() {
                for (word_pos, &word_id) in doc.iter().enumerate() {
                    let old_topic = doc_word_topics[doc_id][word_pos];

                    word_topic_counts[word_id][old_topic] -= 1;
                    doc_topic_counts[doc_id][old_topic] -= 1;
                    topic_counts[old_topic] -= 1;

                    let new_topic = self.sample_topic(
                        word_id,
                        doc_id,
                        &word_topic_counts,
                        &doc_topic_counts,
                        &topic_counts,
                        seeds,
                    );

                    word_topic_counts[word_id][new_topic] += 1;
                    doc_topic_counts[doc_id][new_topic] += 1;
                    topic_counts[new_topic] += 1;
                    doc_word_topics[doc_id][word_pos] = new_topic;
                }
            }
        }

        doc_topic_counts
    }

    fn sample_topic(
        &self,
        word_id: usize,
        doc_id: usize,
        word_topic_counts: &[Vec<usize>],
        doc_topic_counts: &[Vec<usize>],
        topic_counts: &[usize],
        seeds: &HashMap<usize, usize>,
    ) -> usize {
        let num_topics = topic_counts.len();
        let vocab_size = word_topic_counts.len() as f64;
        let doc_total = doc_topic_counts[doc_id].iter().sum::<usize>() as f64;
        let mut best_topic = 0;
        let mut best_score = f64::MIN;

        for topic in 0..num_topics {
            let seed_prior = if seeds.get(&word_id) == Some(&topic) {
                self.config.seed_boost
            } else {
                0.0
            };
            let word_prob = (word_topic_counts[word_id][topic] as f64 + self.config.beta + seed_prior)
                / (topic_counts[topic] as f64 + vocab_size * self.config.beta);
            let doc_prob = (doc_topic_counts[doc_id][topic] as f64 + self.config.alpha)
                / (doc_total + num_topics as f64 * self.config.alpha);

            let score = word_prob * doc_prob;
            if score > best_score {
                best_score = score;
                best_topic = topic;
            }
        }

        best_topic
    }
}

impl TopicBackend for SeededLda {
    type Model = FittedTopicModel;

    fn fit(&self, documents: &[String], config: &PipelineConfig) -> Result<FittedTopicModel> {
        validate_documents(documents)?;

        let tokens: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| config.vectorizer().analyze(doc))
            .collect();
        let vocabulary = build_vocabulary(&tokens);
        let vocab_map: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, word)| (word.as_str(), i))
            .collect();
        let word_docs: Vec<Vec<usize>> = tokens
            .iter()
            .map(|doc| doc.iter().filter_map(|w| vocab_map.get(w.as_str()).copied()).collect())
            .collect();

        let num_topics = self.config.num_topics.max(config.seed_topics().len()).max(1);
        let seeds = self.seed_words(config, &vocab_map);
        debug!(
            "Fitting topics - documents={}, vocabulary={}, candidates={}, seed_words={}",
            documents.len(),
            vocabulary.len(),
            num_topics,
            seeds.len()
        );

        let doc_topic_counts = self.run_lda(&word_docs, vocabulary.len(), num_topics, &seeds);
        let primary: Vec<Option<usize>> = doc_topic_counts
            .iter()
            .zip(&word_docs)
            .map(|(counts, words)| if words.is_empty() { None } else { argmax(counts) })
            .collect();
        let assignments = assign_clusters(&primary, num_topics, config.min_cluster_size());

        let mut model = FittedTopicModel {
            vectorizer: config.vectorizer().clone(),
            representative_docs: self.config.representative_docs,
            documents: documents.to_vec(),
            tokens,
            assignments,
            topics: Vec::new(),
            weights: BTreeMap::new(),
        };
        model.rebuild();

        info!(
            "Fitted topics - documents={}, topics={}, outliers={}",
            documents.len(),
            model.topics.iter().filter(|t| !t.is_outlier()).count(),
            model.assignments.iter().filter(|&&t| t == OUTLIER_TOPIC).count()
        );
        Ok(model)
    }
}

/// Result of a [`SeededLda`] fit.
#[derive(Debug, Clone)]
pub struct FittedTopicModel {
    vectorizer: Vectorizer,
    representative_docs: usize,
    documents: Vec<String>,
    tokens: Vec<Vec<String>>,
    assignments: Vec<TopicId>,
    topics: Vec<Topic>,
    weights: BTreeMap<TopicId, Vec<f64>>, // c-TF-IDF row per topic over the vocabulary
}

impl FittedTopicModel {
    /// Recomputes every topic representation from the current assignments.
    fn rebuild(&mut self) {
        let vocabulary = build_vocabulary(&self.tokens);
        let vocab_map: HashMap<&str, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, word)| (word.as_str(), i))
            .collect();

        let classes: BTreeSet<TopicId> = self.assignments.iter().copied().collect();
        let mut term_freqs: BTreeMap<TopicId, Vec<f64>> = classes
            .iter()
            .map(|&id| (id, vec![0.0; vocabulary.len()]))
            .collect();
        for (doc, topic) in self.tokens.iter().zip(&self.assignments) {
            if let Some(row) = term_freqs.get_mut(topic) {
                for word in doc {
                    row[vocab_map[word.as_str()]] += 1.0;
                }
            }
        }

        let mut term_totals = vec![0.0; vocabulary.len()];
        for row in term_freqs.values() {
            for (total, freq) in term_totals.iter_mut().zip(row) {
                *total += freq;
            }
        }
        let avg_words = if classes.is_empty() {
            0.0
        } else {
            term_totals.iter().sum::<f64>() / classes.len() as f64
        };

        self.weights = term_freqs
            .into_iter()
            .map(|(id, row)| {
                let row_total: f64 = row.iter().sum();
                let weights = row
                    .iter()
                    .zip(&term_totals)
                    .map(|(&freq, &total)| {
                        if freq == 0.0 || row_total == 0.0 {
                            0.0
                        } else {
                            (freq / row_total) * (1.0 + avg_words / total).ln()
                        }
                    })
                    .collect();
                (id, weights)
            })
            .collect();

        self.topics = classes
            .iter()
            .map(|&id| {
                let weights = &self.weights[&id];
                let mut ranked: Vec<(usize, f64)> = weights
                    .iter()
                    .copied()
                    .enumerate()
                    .filter(|(_, w)| *w > 0.0)
                    .collect();
                ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
                ranked.truncate(TOPIC_KEYWORDS);
                let keywords: Vec<(String, f64)> = ranked
                    .into_iter()
                    .map(|(i, w)| (vocabulary[i].clone(), w))
                    .collect();

                let label: Vec<&str> = keywords.iter().take(4).map(|(w, _)| w.as_str()).collect();
                Topic {
                    id,
                    count: self.assignments.iter().filter(|&&t| t == id).count(),
                    name: format!("{}_{}", id, label.join("_")),
                    keywords,
                    representative_docs: self.select_representatives(id, weights, &vocab_map),
                }
            })
            .collect();
    }

    /// Picks the topic's documents whose tokens carry the most topic weight.
    fn select_representatives(
        &self,
        topic: TopicId,
        weights: &[f64],
        vocab_map: &HashMap<&str, usize>,
    ) -> Vec<String> {
        let mut scored: Vec<(usize, f64)> = self
            .assignments
            .iter()
            .enumerate()
            .filter(|&(doc_id, &t)| t == topic && !self.documents[doc_id].trim().is_empty())
            .map(|(doc_id, _)| {
                let score = self.tokens[doc_id]
                    .iter()
                    .map(|w| weights[vocab_map[w.as_str()]])
                    .sum::<f64>();
                (doc_id, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut chosen: Vec<String> = Vec::new();
        for (doc_id, _) in scored {
            if chosen.len() >= self.representative_docs {
                break;
            }
            let doc = self.documents[doc_id].trim();
            if !chosen.iter().any(|c| c == doc) {
                chosen.push(doc.to_string());
            }
        }
        chosen
    }

    fn topic_sizes(&self) -> BTreeMap<TopicId, usize> {
        let mut sizes = BTreeMap::new();
        for &topic in self.assignments.iter().filter(|&&t| t != OUTLIER_TOPIC) {
            *sizes.entry(topic).or_insert(0) += 1;
        }
        sizes
    }

    fn similarity(&self, a: TopicId, b: TopicId) -> f64 {
        match (self.weights.get(&a), self.weights.get(&b)) {
            (Some(a), Some(b)) => cosine(a, b),
            _ => 0.0,
        }
    }
}

impl TopicModel for FittedTopicModel {
    fn assignments(&self) -> &[TopicId] {
        &self.assignments
    }

    fn topic_info(&self) -> Vec<Topic> {
        self.topics.clone()
    }

    fn keywords_of(&self, topic: TopicId) -> Vec<(String, f64)> {
        self.topics
            .iter()
            .find(|t| t.id == topic)
            .map(|t| t.keywords.clone())
            .unwrap_or_default()
    }

    fn representative_documents(
        &self,
        topic: TopicId,
    ) -> std::result::Result<Vec<String>, RepresentativeDocError> {
        self.topics
            .iter()
            .find(|t| t.id == topic)
            .map(|t| t.representative_docs.clone())
            .ok_or_else(|| RepresentativeDocError::new(topic, "unknown topic"))
    }

    fn reduce_topics(&mut self, documents: &[String], target: usize) -> Result<()> {
        if target == 0 {
            return Err(AnalysisError::Config("target topic count must be at least 1".into()));
        }
        if documents.len() != self.assignments.len() {
            return Err(AnalysisError::Input(format!(
                "expected {} documents for topic reduction, got {}",
                self.assignments.len(),
                documents.len()
            )));
        }
        if documents != self.documents.as_slice() {
            self.documents = documents.to_vec();
            self.tokens = documents.iter().map(|doc| self.vectorizer.analyze(doc)).collect();
            self.rebuild();
        }

        loop {
            let sizes = self.topic_sizes();
            if sizes.len() <= target {
                break;
            }
            // Smallest topic goes first; among equals, the highest id.
            let Some((&smallest, _)) = sizes
                .iter()
                .min_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(a.0)))
            else {
                break;
            };
            let Some(&merge_into) = sizes.keys().filter(|&&id| id != smallest).max_by(|&&a, &&b| {
                self.similarity(smallest, a)
                    .total_cmp(&self.similarity(smallest, b))
                    .then(b.cmp(&a))
            }) else {
                break;
            };

            debug!("Merging topic {} into {}", smallest, merge_into);
            for topic in self.assignments.iter_mut().filter(|t| **t == smallest) {
                *topic = merge_into;
            }
            relabel_by_size(&mut self.assignments);
            self.rebuild();
        }

        Ok(())
    }
}

/// Vocabulary ordered by corpus frequency, then alphabetically.
fn build_vocabulary(tokens: &[Vec<String>]) -> Vec<String> {
    let mut word_counts: Counter<&str> = Counter::new();
    for doc in tokens {
        for word in doc {
            word_counts[&word.as_str()] += 1;
        }
    }

    let mut vocab: Vec<(&str, usize)> = word_counts.into_iter().collect();
    vocab.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    vocab.into_iter().map(|(word, _)| word.to_string()).collect()
}

fn argmax(counts: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (topic, &count) in counts.iter().enumerate() {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((topic, count));
        }
    }
    best.map(|(topic, _)| topic)
}

/// Turns raw cluster indices into topic ids: clusters below the minimum
/// size become outliers, the rest are numbered by descending size.
fn assign_clusters(primary: &[Option<usize>], num_topics: usize, min_cluster_size: usize) -> Vec<TopicId> {
    let mut sizes = vec![0usize; num_topics];
    for &topic in primary.iter().flatten() {
        sizes[topic] += 1;
    }

    let mut kept: Vec<usize> = (0..num_topics)
        .filter(|&t| sizes[t] > 0 && sizes[t] >= min_cluster_size)
        .collect();
    kept.sort_by(|a, b| sizes[*b].cmp(&sizes[*a]).then(a.cmp(b)));
    let labels: HashMap<usize, TopicId> = kept
        .iter()
        .enumerate()
        .map(|(rank, &t)| (t, rank as TopicId))
        .collect();

    primary
        .iter()
        .map(|p| p.and_then(|t| labels.get(&t).copied()).unwrap_or(OUTLIER_TOPIC))
        .collect()
}

/// Renumbers non-outlier topics 0..n by descending size, keeping the
/// previous order among equal sizes.
fn relabel_by_size(assignments: &mut [TopicId]) {
    let mut sizes: BTreeMap<TopicId, usize> = BTreeMap::new();
    for &topic in assignments.iter().filter(|&&t| t != OUTLIER_TOPIC) {
        *sizes.entry(topic).or_insert(0) += 1;
    }
    let mut order: Vec<(TopicId, usize)> = sizes.into_iter().collect();
    order.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let labels: HashMap<TopicId, TopicId> = order
        .iter()
        .enumerate()
        .map(|(rank, &(old, _))| (old, rank as TopicId))
        .collect();

    for topic in assignments.iter_mut() {
        if let Some(&label) = labels.get(topic) {
            *topic = label;
        }
    }
}

fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::configure;
    use crate::stop_words::StopWordSet;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn corpus() -> Vec<String> {
        let mut texts = Vec::new();
        for _ in 0..4 {
            texts.push("children shoes children sadness".to_string());
            texts.push("hope future hope inspiration".to_string());
            texts.push("history warning history repeat".to_string());
        }
        texts.push("   ".to_string());
        texts
    }

    fn config(min_cluster_size: usize) -> PipelineConfig {
        let seeds = vec![
            vec!["children".to_string(), "shoes".to_string()],
            vec!["hope".to_string(), "inspiration".to_string()],
            vec!["history".to_string(), "warning".to_string()],
        ];
        configure(StopWordSet::new(), min_cluster_size, seeds, None).unwrap()
    }

    #[test]
    fn test_assign_clusters_folds_small_clusters() {
        let primary = vec![Some(2), Some(2), Some(0), None, Some(2), Some(1), Some(1)];
        assert_eq!(assign_clusters(&primary, 3, 2), vec![0, 0, -1, -1, 0, 1, 1]);
    }

    #[test]
    fn test_relabel_by_size() {
        let mut assignments = vec![3, 1, 1, -1, 3, 3, 0];
        relabel_by_size(&mut assignments);
        assert_eq!(assignments, vec![0, 1, 1, -1, 0, 0, 2]);
    }

    #[test]
    fn test_vocabulary_order() {
        let tokens = vec![docs(&["b", "a", "c"]), docs(&["c"])];
        assert_eq!(build_vocabulary(&tokens), docs(&["c", "a", "b"]));
    }

    #[test]
    fn test_fit_rejects_empty_input() {
        let backend = SeededLda::new(LdaConfig::default());
        assert!(matches!(backend.fit(&[], &config(2)), Err(AnalysisError::Input(_))));
        assert!(matches!(
            backend.fit(&docs(&["", "  "]), &config(2)),
            Err(AnalysisError::Input(_))
        ));
    }

    #[test]
    fn test_fit_accounts_for_every_document() {
        let documents = corpus();
        let model = SeededLda::new(LdaConfig::default()).fit(&documents, &config(2)).unwrap();

        assert_eq!(model.assignments().len(), documents.len());
        assert_eq!(*model.assignments().last().unwrap(), OUTLIER_TOPIC);

        let topics = model.topic_info();
        let total: usize = topics.iter().map(|t| t.count).sum();
        assert_eq!(total, documents.len());
        assert!(topics.iter().any(Topic::is_outlier));
        for pair in topics.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
        for topic in topics.iter().filter(|t| !t.is_outlier()) {
            assert!(topic.count >= 2);
            assert!(topic.keywords.len() <= TOPIC_KEYWORDS);
            assert!(topic.name.starts_with(&format!("{}_", topic.id)));
            assert!(topic.representative_docs.len() <= 3);
            for pair in topic.keywords.windows(2) {
                assert!(pair[0].1 >= pair[1].1);
            }
        }
    }

    #[test]
    fn test_identical_documents_share_a_topic() {
        let documents = corpus();
        let model = SeededLda::new(LdaConfig::default()).fit(&documents, &config(2)).unwrap();
        let assignments = model.assignments();
        for offset in 0..3 {
            let first = assignments[offset];
            for i in (offset..12).step_by(3) {
                assert_eq!(assignments[i], first);
            }
        }
    }

    #[test]
    fn test_large_minimum_sends_everything_to_outlier() {
        let documents = corpus();
        let model = SeededLda::new(LdaConfig::default()).fit(&documents, &config(50)).unwrap();
        assert!(model.assignments().iter().all(|&t| t == OUTLIER_TOPIC));
        let topics = model.topic_info();
        assert_eq!(topics.len(), 1);
        assert!(topics[0].is_outlier());
        assert_eq!(topics[0].count, documents.len());
    }

    #[test]
    fn test_reduce_topics_caps_topic_count() {
        let documents = corpus();
        let mut model = SeededLda::new(LdaConfig::default()).fit(&documents, &config(2)).unwrap();
        let outliers_before = model.assignments().iter().filter(|&&t| t == OUTLIER_TOPIC).count();

        model.reduce_topics(&documents, 1).unwrap();

        let topics = model.topic_info();
        assert!(topics.iter().filter(|t| !t.is_outlier()).count() <= 1);
        let outliers_after = model.assignments().iter().filter(|&&t| t == OUTLIER_TOPIC).count();
        assert_eq!(outliers_before, outliers_after);
        assert!(model
            .assignments()
            .iter()
            .all(|&t| t == OUTLIER_TOPIC || t == 0));
    }

    #[test]
    fn test_reduce_topics_validates_arguments() {
        let documents = corpus();
        let mut model = SeededLda::new(LdaConfig::default()).fit(&documents, &config(2)).unwrap();
        assert!(matches!(model.reduce_topics(&documents, 0), Err(AnalysisError::Config(_))));
        assert!(matches!(
            model.reduce_topics(&documents[..3], 1),
            Err(AnalysisError::Input(_))
        ));
    }

    #[test]
    fn test_unknown_topic_lookups() {
        let documents = corpus();
        let model = SeededLda::new(LdaConfig::default()).fit(&documents, &config(2)).unwrap();
        assert!(model.keywords_of(99).is_empty());
        let err = model.representative_documents(99).unwrap_err();
        assert_eq!(err.topic, 99);
    }

    #[test]
    fn test_cosine() {
        assert!((cosine(&[1.0, 0.0], &[2.0, 0.0]) - 1.0).abs() < 1e-12);
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
