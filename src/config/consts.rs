// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Words cycled by the emitter when no configuration is given.
pub const DEFAULT_WORDS: [&str; 3] = ["feed", "the", "monkey"];

/// Number of words the consumer takes before sending the stop signal.
pub const DEFAULT_RECEIVE_COUNT: usize = 101;

/// Environment variable holding the `tracing` filter directive.
pub const LOG_FILTER_ENV: &str = "FEED_THE_MONKEY_LOG";

/// Filter used when [`LOG_FILTER_ENV`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";
