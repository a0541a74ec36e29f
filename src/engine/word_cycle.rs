// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// A fixed, non-empty list of words walked in order, wrapping back to the
/// first word after the last.
///
/// # Examples
///
/// ```
/// use feed_the_monkey::engine::WordCycle;
///
/// let words = vec!["feed".to_string(), "the".to_string(), "monkey".to_string()];
/// let cycle = WordCycle::new(words).unwrap();
///
/// let first_four: Vec<String> = cycle.take(4).collect();
/// assert_eq!(first_four, vec!["feed", "the", "monkey", "feed"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCycle {
    words: Vec<String>,
    position: usize,
}

impl WordCycle {
    /// Create a cycle starting at the first word. Returns `None` for an empty list.
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self { words, position: 0 })
    }

    /// The word that will be emitted next.
    pub fn current(&self) -> &str {
        &self.words[self.position]
    }

    /// Move to the next word, wrapping modulo the list length.
    pub fn advance(&mut self) {
        self.position = (self.position + 1) % self.words.len();
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Never ends; pair with `take`.
impl Iterator for WordCycle {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let word = self.current().to_string();
        self.advance();
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(words: &[&str]) -> WordCycle {
        WordCycle::new(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    #[test]
    fn empty_list_has_no_cycle() {
        assert!(WordCycle::new(Vec::new()).is_none());
    }

    #[test]
    fn position_wraps_modulo_length() {
        let mut c = cycle(&["feed", "the", "monkey"]);
        assert_eq!(c.position(), 0);
        c.advance();
        c.advance();
        assert_eq!(c.current(), "monkey");
        c.advance();
        assert_eq!(c.position(), 0);
        assert_eq!(c.current(), "feed");
    }

    #[test]
    fn single_word_repeats() {
        let words: Vec<String> = cycle(&["ook"]).take(3).collect();
        assert_eq!(words, vec!["ook", "ook", "ook"]);
    }

    #[test]
    fn hundred_and_one_words_end_on_the_right_word() {
        let words: Vec<String> = cycle(&["feed", "the", "monkey"]).take(101).collect();
        assert_eq!(words.len(), 101);
        // 101 = 33 full cycles + 2
        assert_eq!(words[99], "feed");
        assert_eq!(words[100], "the");
    }
}
