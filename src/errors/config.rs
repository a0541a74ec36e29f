// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while loading or validating a word-emitter configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid YAML for [`crate::config::Config`].
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The word list is empty, so there is nothing to cycle through.
    #[error("Word list is empty; at least one word is required")]
    EmptyWordList,

    /// A word spans more than one line and would break line-oriented output.
    #[error("Word {index} ({word:?}) contains a line break")]
    MultiLineWord { index: usize, word: String },

    /// One or more validation problems were found.
    #[error("Configuration validation failed:\n{}", join_lines(.0))]
    Invalid(Vec<ConfigError>),
}

fn join_lines(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_problem() {
        let err = ConfigError::Invalid(vec![
            ConfigError::EmptyWordList,
            ConfigError::MultiLineWord {
                index: 2,
                word: "mon\nkey".to_string(),
            },
        ]);

        let rendered = err.to_string();
        assert!(rendered.starts_with("Configuration validation failed:"));
        assert!(rendered.contains("  - Word list is empty"));
        assert!(rendered.contains("  - Word 2 (\"mon\\nkey\") contains a line break"));
    }
}
