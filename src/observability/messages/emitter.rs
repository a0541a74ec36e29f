// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the word-emitter task.
//!
//! This module contains message types for logging events related to:
//! * Emitter startup
//! * Emitter shutdown and the reason it stopped

use crate::engine::StopReason;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Word-emitter task started.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use feed_the_monkey::observability::messages::emitter::EmitterStarted;
///
/// let msg = EmitterStarted { word_count: 3 };
/// assert_eq!(msg.to_string(), "Word emitter started with 3 words");
/// ```
pub struct EmitterStarted {
    pub word_count: usize,
}

impl Display for EmitterStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Word emitter started with {} words", self.word_count)
    }
}

impl StructuredLog for EmitterStarted {
    fn log(&self) {
        tracing::debug!(word_count = self.word_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("emitter", span_name = name, word_count = self.word_count)
    }
}

/// Word-emitter task stopped.
///
/// # Log Level
/// `debug!` for a normal stop signal, `warn!` otherwise
pub struct EmitterStopped {
    pub words_emitted: usize,
    pub reason: StopReason,
}

impl Display for EmitterStopped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Word emitter stopped after {} words: {}",
            self.words_emitted, self.reason
        )
    }
}

impl StructuredLog for EmitterStopped {
    fn log(&self) {
        match self.reason {
            StopReason::Signalled => tracing::debug!(
                words_emitted = self.words_emitted,
                reason = %self.reason,
                "{}", self
            ),
            StopReason::SignalDropped | StopReason::ConsumerGone => tracing::warn!(
                words_emitted = self.words_emitted,
                reason = %self.reason,
                "{}", self
            ),
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "emitter_stopped",
            span_name = name,
            words_emitted = self.words_emitted,
            reason = %self.reason,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_message_names_the_reason() {
        let msg = EmitterStopped {
            words_emitted: 102,
            reason: StopReason::Signalled,
        };
        assert_eq!(
            msg.to_string(),
            "Word emitter stopped after 102 words: stop signal received"
        );
    }
}
