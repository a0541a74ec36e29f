// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;
use tokio::task::JoinError;

/// Errors that can end a producer/consumer session early.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The word channel closed before the consumer took all of its words.
    #[error("Word emitter hung up after {received} of {expected} words")]
    ProducerHungUp { received: usize, expected: usize },

    /// The word-emitter task panicked or was aborted.
    #[error("Word emitter task failed: {0}")]
    ProducerPanicked(#[from] JoinError),

    /// Writing a word to the output sink failed.
    #[error("Output error: {0}")]
    Sink(#[from] std::io::Error),
}

impl SessionError {
    /// `true` when the output reader went away, e.g. stdout piped into `head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, SessionError::Sink(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
