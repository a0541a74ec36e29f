// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_RECEIVE_COUNT, DEFAULT_WORDS};
use crate::errors::ConfigError;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for a single word-emitter session.
///
/// Every field is optional in the file; anything left out falls back to the
/// built-in demo of `feed the monkey` received 101 times.
///
/// # Fields
/// * `words` - Words the emitter cycles through, in order
/// * `receive_count` - How many words the consumer takes before stopping the emitter
///
/// # Example
/// ```yaml
/// words: [feed, the, monkey]
/// receive_count: 101
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_words")]
    pub words: Vec<String>,
    #[serde(default = "default_receive_count")]
    pub receive_count: usize,
}

fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

fn default_receive_count() -> usize {
    DEFAULT_RECEIVE_COUNT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: default_words(),
            receive_count: default_receive_count(),
        }
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&content)?;
    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// All validation problems are reported together as [`ConfigError::Invalid`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let cfg = load_config(path)?;

    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        word_count: cfg.words.len(),
        receive_count: cfg.receive_count,
    }
    .log();

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
words: [eat, more, bananas]
receive_count: 7
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.words, vec!["eat", "more", "bananas"]);
        assert_eq!(cfg.receive_count, 7);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("receive_count: 3").unwrap();
        assert_eq!(cfg.words, vec!["feed", "the", "monkey"]);
        assert_eq!(cfg.receive_count, 3);

        let cfg: Config = serde_yaml::from_str("words: [hi]").unwrap();
        assert_eq!(cfg.receive_count, 101);
    }

    #[test]
    fn default_matches_builtin_demo() {
        let cfg = Config::default();
        assert_eq!(cfg.words, vec!["feed", "the", "monkey"]);
        assert_eq!(cfg.receive_count, 101);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("recieve_count: 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_config("words: [feed, the, monkey]\nreceive_count: 10\n");

        let cfg = load_and_validate_config(file.path()).unwrap();
        assert_eq!(cfg.receive_count, 10);
    }

    #[test]
    fn test_load_and_validate_empty_word_list() {
        let file = write_config("words: []\n");

        let result = load_and_validate_config(file.path());
        match result {
            Err(ConfigError::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(matches!(errors[0], ConfigError::EmptyWordList));
            }
            other => panic!("Expected Invalid error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_and_validate_config(dir.path().join("nope.yaml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let file = write_config("words: [feed, the\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
