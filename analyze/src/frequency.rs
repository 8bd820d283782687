use std::collections::HashMap;

use counter::Counter;
use serde::Serialize;

use crate::stop_words::StopWordSet;
use crate::text::normalize;

/// The `n` most frequent non-stop-word tokens of `text` after
/// normalization. Equal counts keep first-seen order.
pub fn top_words(text: &str, n: usize, stop_words: &StopWordSet) -> Vec<(String, usize)> {
    let cleaned = normalize(text);

    let mut counts: Counter<&str> = Counter::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for word in cleaned.split_whitespace().filter(|w| !stop_words.contains(w)) {
        if counts[&word] == 0 {
            first_seen.push(word);
        }
        counts[&word] += 1;
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|word| (word.to_string(), counts[&word]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Relative word weights for a word cloud: each count divided by the top
/// count.
pub fn cloud_weights(text: &str, stop_words: &StopWordSet, max_words: usize) -> Vec<(String, f64)> {
    let top = top_words(text, max_words, stop_words);
    let Some(&(_, max_count)) = top.first() else {
        return Vec::new();
    };
    top.into_iter()
        .map(|(word, count)| (word, count as f64 / max_count as f64))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: usize,
}

/// Counts exact answers (trimmed, case-insensitive) for each expected
/// phrase, in the order requested. Phrases nobody gave still appear with 0.
pub fn phrase_counts<'a, I, S>(column: I, phrases: &[S]) -> Vec<PhraseCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
    S: AsRef<str>,
{
    let mut answers: HashMap<String, usize> = HashMap::new();
    for value in column.into_iter().flatten() {
        *answers.entry(value.trim().to_lowercase()).or_insert(0) += 1;
    }

    phrases
        .iter()
        .map(|phrase| PhraseCount {
            phrase: phrase.as_ref().to_string(),
            count: answers.get(phrase.as_ref()).copied().unwrap_or(0),
        })
        .collect()
}
