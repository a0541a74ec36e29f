// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration file loaded and validated.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub word_count: usize,
    pub receive_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded configuration from '{}': {} words, receive_count={}",
            self.path, self.word_count, self.receive_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            word_count = self.word_count,
            receive_count = self.receive_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "config_loaded",
            span_name = name,
            path = self.path,
            word_count = self.word_count,
            receive_count = self.receive_count,
        )
    }
}

/// No configuration file given; built-in defaults are in use.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ConfigDefaulted {
    pub word_count: usize,
    pub receive_count: usize,
}

impl Display for ConfigDefaulted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "No configuration file given, using defaults: {} words, receive_count={}",
            self.word_count, self.receive_count
        )
    }
}

impl StructuredLog for ConfigDefaulted {
    fn log(&self) {
        tracing::debug!(
            word_count = self.word_count,
            receive_count = self.receive_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "config_defaulted",
            span_name = name,
            word_count = self.word_count,
            receive_count = self.receive_count,
        )
    }
}
