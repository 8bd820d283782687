//! The canonical stop-word set shared by the topic vectorizer and the
//! frequency utilities.

use std::collections::HashSet;

use serde::Serialize;
use ::stop_words::LANGUAGE;

/// Survey filler terms: Likert answer qualifiers and generic verbs that
/// dominate the responses without carrying topical signal.
pub const PROJECT_STOP_WORDS: &[&str] = &[
    "somewhat",
    "very",
    "deeply",
    "moved",
    "not at all",
    "s",
    "felt",
    "experienced",
    "people",
    "just",
    "like",
];

/// A set of lowercase stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Membership is case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn union(&self, other: &StopWordSet) -> StopWordSet {
        StopWordSet {
            words: self.words.union(&other.words).cloned().collect(),
        }
    }

    pub fn is_subset(&self, other: &StopWordSet) -> bool {
        self.words.is_subset(&other.words)
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = StopWordSet::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

impl<S: AsRef<str>> Extend<S> for StopWordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

/// Builds the stop-word set: English base list, the project filler terms,
/// and any caller-supplied extras.
pub fn build_stop_words<I>(additional: I) -> StopWordSet
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut set: StopWordSet = ::stop_words::get(LANGUAGE::English)
        .iter()
        .map(|word| word.to_string())
        .collect();
    set.extend(PROJECT_STOP_WORDS);
    set.extend(additional);
    set
}

/// The stop-word set without caller extras.
pub fn default_stop_words() -> StopWordSet {
    build_stop_words(std::iter::empty::<&str>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::hash_set;
    use proptest::prelude::*;

    #[test]
    fn test_base_and_project_words_present() {
        let set = default_stop_words();
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        for word in PROJECT_STOP_WORDS {
            assert!(set.contains(word), "missing {word}");
        }
    }

    #[test]
    fn test_content_words_are_not_stop_words() {
        let set = default_stop_words();
        for word in ["kind", "important", "home", "world", "history", "hope"] {
            assert!(!set.contains(word), "{word} should survive filtering");
        }
    }

    #[test]
    fn test_additional_words_lowercased() {
        let set = build_stop_words(["Museum", "EXHIBIT"]);
        assert!(set.contains("museum"));
        assert!(set.contains("Exhibit"));
        assert!(!default_stop_words().contains("museum"));
    }

    #[test]
    fn test_union_is_idempotent() {
        let set = build_stop_words(["gallery"]);
        assert_eq!(set.union(&set), set);
        assert_eq!(build_stop_words(["gallery", "gallery"]), set);
    }

    proptest! {
        #[test]
        fn extras_only_grow_the_set(
            a in hash_set("[a-z]{1,8}", 0..10),
            b in hash_set("[a-z]{1,8}", 0..10),
        ) {
            let smaller = build_stop_words(&a);
            let larger = build_stop_words(a.union(&b));
            prop_assert!(smaller.is_subset(&larger));
        }
    }
}
