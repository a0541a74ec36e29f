// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::errors::ConfigError;

/// Validate a configuration, collecting every problem found.
///
/// Checks:
/// 1. The word list is not empty
/// 2. No word contains a line break
///
/// A `receive_count` of zero is allowed: the consumer stops the emitter
/// before taking any words.
pub fn validate_config(cfg: &Config) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if cfg.words.is_empty() {
        errors.push(ConfigError::EmptyWordList);
    }

    for (index, word) in cfg.words.iter().enumerate() {
        if word.contains(['\n', '\r']) {
            errors.push(ConfigError::MultiLineWord {
                index,
                word: word.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(words: &[&str], receive_count: usize) -> Config {
        Config {
            words: words.iter().map(|w| w.to_string()).collect(),
            receive_count,
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn zero_receive_count_is_valid() {
        assert!(validate_config(&config(&["feed"], 0)).is_ok());
    }

    #[test]
    fn empty_word_list_is_rejected() {
        let errors = validate_config(&config(&[], 5)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ConfigError::EmptyWordList));
    }

    #[test]
    fn every_multi_line_word_is_reported() {
        let errors = validate_config(&config(&["fe\ned", "the", "mon\r\nkey"], 5)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ConfigError::MultiLineWord { index: 0, .. }));
        assert!(matches!(errors[1], ConfigError::MultiLineWord { index: 2, .. }));
    }
}
