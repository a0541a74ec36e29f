// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the consumer loop and the stop signal.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Consumer loop started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ConsumerStarted {
    pub receive_count: usize,
}

impl Display for ConsumerStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Consumer started: receiving {} words", self.receive_count)
    }
}

impl StructuredLog for ConsumerStarted {
    fn log(&self) {
        tracing::info!(receive_count = self.receive_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "session",
            span_name = name,
            receive_count = self.receive_count,
        )
    }
}

/// Consumer interrupted before taking all of its words.
///
/// # Log Level
/// `warn!` - Run ended early
pub struct ConsumerInterrupted {
    pub received: usize,
    pub receive_count: usize,
}

impl Display for ConsumerInterrupted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Consumer interrupted after {} of {} words",
            self.received, self.receive_count
        )
    }
}

impl StructuredLog for ConsumerInterrupted {
    fn log(&self) {
        tracing::warn!(
            received = self.received,
            receive_count = self.receive_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "consumer_interrupted",
            span_name = name,
            received = self.received,
            receive_count = self.receive_count,
        )
    }
}

/// Stop signal handed to the word emitter.
///
/// # Log Level
/// `debug!` when delivered, `warn!` when the emitter had already exited
pub struct StopSignalSent {
    pub delivered: bool,
}

impl Display for StopSignalSent {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.delivered {
            write!(f, "Stop signal delivered to word emitter")
        } else {
            write!(f, "Stop signal not delivered: word emitter already exited")
        }
    }
}

impl StructuredLog for StopSignalSent {
    fn log(&self) {
        if self.delivered {
            tracing::debug!(delivered = self.delivered, "{}", self);
        } else {
            tracing::warn!(delivered = self.delivered, "{}", self);
        }
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("stop_signal", span_name = name, delivered = self.delivered)
    }
}

/// Session finished and the word emitter has exited.
///
/// # Log Level
/// `info!` - Important operational event
pub struct SessionCompleted {
    pub received: usize,
    pub emitted: usize,
    pub duration: std::time::Duration,
}

impl Display for SessionCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Session completed: {} words received, {} emitted in {:?}",
            self.received, self.emitted, self.duration
        )
    }
}

impl StructuredLog for SessionCompleted {
    fn log(&self) {
        tracing::info!(
            received = self.received,
            emitted = self.emitted,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "session_completed",
            span_name = name,
            received = self.received,
            emitted = self.emitted,
            duration = ?self.duration,
        )
    }
}
