use once_cell::sync::Lazy;
use regex::Regex;

static COMPOUND_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-+&]").unwrap());
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Cleans a single response: splits compound words on `-`, `+` and `&`,
/// drops punctuation and digit runs, lowercases and trims.
pub fn normalize(text: &str) -> String {
    let text = COMPOUND_SEPARATORS.replace_all(text, " ");
    let text = PUNCTUATION.replace_all(&text, "");
    let text = DIGITS.replace_all(&text, "");
    text.to_lowercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_compound_words_split() {
        assert_eq!(normalize("Hope-filled & sad+angry"), "hope filled   sad angry");
    }

    #[test]
    fn test_punctuation_and_digits_removed() {
        assert_eq!(normalize("  In 1943, they wrote: \"Never again!\"  "), "in  they wrote never again");
        assert_eq!(normalize("don't"), "dont");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
        assert_eq!(normalize("12 34 !?"), "");
    }

    #[test]
    fn test_unicode_letters_kept() {
        assert_eq!(normalize("Über Sobibór"), "über sobibór");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(input in "[a-zA-Z0-9 ,.!?&+'\"\\-éÜ\t]{0,60}") {
            let once = normalize(&input);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
