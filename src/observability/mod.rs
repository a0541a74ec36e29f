// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern with a `Display` implementation,
//! so log text lives in one place instead of being scattered as magic strings
//! through the engine.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::config` - Configuration loading events
//! * `messages::consumer` - Consumer loop and stop signal events
//! * `messages::emitter` - Word-emitter lifecycle events
//!
//! # Output
//!
//! Log output goes to stderr. Stdout is reserved for the emitted words, one per line.
//!
//! # Usage
//!
//! ```rust
//! use feed_the_monkey::observability::messages::emitter::EmitterStarted;
//! use feed_the_monkey::observability::messages::StructuredLog;
//!
//! EmitterStarted { word_count: 3 }.log();
//! ```

pub mod messages;

use crate::config::consts::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// The filter is read from `FEED_THE_MONKEY_LOG` (e.g. `feed_the_monkey=debug`),
/// falling back to `warn`. Calling this more than once is harmless; later calls
/// leave the first subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
