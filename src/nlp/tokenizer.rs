//! Word normalization
//!
//! Turns raw text into the lowercase, ASCII-alphabetic word sequence the
//! graph is built from. Words are found with UAX #29 segmentation and then
//! split again on every character outside `a-z`, so `hello-world`, `it's`
//! and `abc123def` each become two words.

use unicode_segmentation::UnicodeSegmentation;

/// A normalizing tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum token length to keep
    min_token_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length.max(1);
        self
    }

    /// Normalize text into an ordered sequence of lowercase words
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut words = Vec::new();

        for segment in lower.unicode_words() {
            for piece in segment.split(|c: char| !c.is_ascii_lowercase()) {
                if piece.len() >= self.min_token_length {
                    words.push(piece.to_string());
                }
            }
        }

        words
    }

    /// Normalize a single query word (trim and lowercase)
    pub fn normalize_word(word: &str) -> String {
        word.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_normalization() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.normalize("Hello World. This is a test!");
        assert_eq!(words, vec!["hello", "world", "this", "is", "a", "test"]);
    }

    #[test]
    fn test_non_alphabetic_splits_words() {
        let tokenizer = Tokenizer::new();
        assert_eq!(tokenizer.normalize("hello-world"), vec!["hello", "world"]);
        assert_eq!(tokenizer.normalize("it's"), vec!["it", "s"]);
        assert_eq!(tokenizer.normalize("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn test_newlines_and_punctuation() {
        let tokenizer = Tokenizer::new();
        let words = tokenizer.normalize("line one,\r\nline two;\n\nthree");
        assert_eq!(words, vec!["line", "one", "line", "two", "three"]);
    }

    #[test]
    fn test_non_ascii_letters_dropped() {
        let tokenizer = Tokenizer::new();
        // Accented letters are outside a-z and act as separators
        assert_eq!(tokenizer.normalize("café"), vec!["caf"]);
        assert!(tokenizer.normalize("日本語").is_empty());
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.normalize("").is_empty());
        assert!(tokenizer.normalize("  123 !!! ").is_empty());
    }

    #[test]
    fn test_min_length() {
        let tokenizer = Tokenizer::new().with_min_length(3);
        assert_eq!(tokenizer.normalize("a to the sea"), vec!["the", "sea"]);
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(Tokenizer::normalize_word("  The "), "the");
        assert_eq!(Tokenizer::normalize_word("hello-world"), "hello-world");
    }
}
