// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit a `tracing` event (or open a span) carrying the
//! same data as structured fields.
//!
//! # Organization
//!
//! * `config` - Configuration loading events
//! * `consumer` - Consumer loop and stop signal events
//! * `emitter` - Word-emitter lifecycle events
//!
//! # Usage Pattern
//!
//! ```rust
//! use feed_the_monkey::observability::messages::consumer::ConsumerStarted;
//! use feed_the_monkey::observability::messages::StructuredLog;
//!
//! let msg = ConsumerStarted { receive_count: 101 };
//!
//! tracing::info!("{}", msg);
//! msg.log();
//! ```

use tracing::Span;

pub mod config;
pub mod consumer;
pub mod emitter;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit this message as a `tracing` event at its natural level.
    fn log(&self);

    /// Open a span carrying this message's fields.
    fn span(&self, name: &str) -> Span;
}
