//! Word tokenization on Unicode word boundaries (UAX #29).
//!
//! Two adjustments sit on top of the boundary rules: clitic endings
//! (`'s`, `n't`, `'re`, ...) become tokens of their own, and words joined
//! by hyphens stay one token (`state-of-the-art`).

use unicode_segmentation::UnicodeSegmentation;

/// Endings split off a word, checked against text with straight apostrophes.
const CLITICS: [&str; 7] = ["n't", "'s", "'re", "'ll", "'ve", "'d", "'m"];

/// Lowercases `text` and splits it into words.
///
/// Punctuation and whitespace never appear in the output. Clitics and
/// hyphenated compounds are emitted as tokens but fail the alphanumeric
/// filter, so `rust's` counts as `rust` while `state-of-the-art` counts
/// as nothing.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    let segments: Vec<&str> = lowered.split_word_bounds().collect();

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < segments.len() {
        if !is_word_segment(segments[i]) {
            i += 1;
            continue;
        }

        let start = i;
        while i + 2 < segments.len() && segments[i + 1] == "-" && is_word_segment(segments[i + 2]) {
            i += 2;
        }
        i += 1;

        let word = segments[start..i].concat();
        let (stem, clitic) = split_clitic(&word);
        tokens.push(stem.to_string());
        if let Some(clitic) = clitic {
            tokens.push(clitic.to_string());
        }
    }
    tokens
}

/// True when every character is a letter or a digit.
#[must_use]
pub fn is_alphanumeric_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphanumeric)
}

fn is_word_segment(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn split_clitic(word: &str) -> (&str, Option<&str>) {
    CLITICS
        .iter()
        .find(|clitic| word.len() > clitic.len() && word.ends_with(*clitic))
        .map_or((word, None), |clitic| {
            let (stem, ending) = word.split_at(word.len() - clitic.len());
            (stem, Some(ending))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_not_just_whitespace() {
        assert_eq!(tokenize("Hello,world! (Rust)"), vec!["hello", "world", "rust"]);
    }

    #[test]
    fn lowercases_cyrillic() {
        assert_eq!(tokenize("Привет, МИР."), vec!["привет", "мир"]);
    }

    #[test]
    fn keeps_numbers_as_words() {
        assert_eq!(tokenize("version 2024 released"), vec!["version", "2024", "released"]);
    }

    #[test]
    fn contractions_split_off_their_clitic() {
        let words = tokenize("don't stop");
        assert_eq!(words, vec!["do", "n't", "stop"]);
        assert!(!is_alphanumeric_word(&words[1]));
        assert!(is_alphanumeric_word(&words[2]));
    }

    #[test]
    fn possessives_keep_the_base_word() {
        assert_eq!(tokenize("Rust's crates"), vec!["rust", "'s", "crates"]);
        assert_eq!(tokenize("Rust\u{2019}s crates"), vec!["rust", "'s", "crates"]);
        assert_eq!(tokenize("we'll they're"), vec!["we", "'ll", "they", "'re"]);
    }

    #[test]
    fn hyphenated_compounds_stay_whole() {
        let words = tokenize("a state-of-the-art well-known - parser");
        assert_eq!(words, vec!["a", "state-of-the-art", "well-known", "parser"]);
        assert!(!is_alphanumeric_word(&words[1]));
    }

    #[test]
    fn empty_word_is_not_alphanumeric() {
        assert!(!is_alphanumeric_word(""));
    }
}
