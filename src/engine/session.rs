// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::config::{validate_config, Config};
use crate::engine::consumer::Consumer;
use crate::engine::emitter::{EmitterHandle, StopReason, WordEmitter};
use crate::engine::word_cycle::WordCycle;
use crate::errors::{ConfigError, SessionError};
use crate::observability::messages::consumer::{ConsumerStarted, SessionCompleted, StopSignalSent};
use crate::observability::messages::StructuredLog;
use crate::traits::WordSink;

/// One producer/consumer run: spawn the word emitter, take `receive_count`
/// words, stop the emitter, and wait for it to exit.
///
/// # Examples
///
/// ```
/// use feed_the_monkey::config::Config;
/// use feed_the_monkey::engine::Session;
/// use tokio_util::sync::CancellationToken;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let config = Config { receive_count: 4, ..Config::default() };
/// let mut words: Vec<String> = Vec::new();
///
/// let summary = Session::from_config(&config)
///     .unwrap()
///     .run(&mut words, &CancellationToken::new())
///     .await
///     .unwrap();
///
/// assert_eq!(summary.received, 4);
/// assert_eq!(words, vec!["feed", "the", "monkey", "feed"]);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    cycle: WordCycle,
    consumer: Consumer,
}

/// What happened during a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub received: usize,
    pub emitted: usize,
    pub stop_reason: StopReason,
    pub interrupted: bool,
    pub elapsed: Duration,
}

impl Session {
    pub fn new(cycle: WordCycle, receive_count: usize) -> Self {
        Self {
            cycle,
            consumer: Consumer::new(receive_count),
        }
    }

    /// Build a session from configuration.
    ///
    /// The configuration is validated first, so configs built in code get the
    /// same checks as ones read through `load_and_validate_config`.
    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        validate_config(cfg).map_err(ConfigError::Invalid)?;
        let cycle = WordCycle::new(cfg.words.clone()).ok_or(ConfigError::EmptyWordList)?;
        Ok(Self::new(cycle, cfg.receive_count))
    }

    /// Run the session to completion.
    ///
    /// The stop signal is sent exactly once, including when the consumer
    /// fails, and the emitter task has exited before this returns.
    pub async fn run<S: WordSink + ?Sized>(
        &self,
        sink: &mut S,
        interrupt: &CancellationToken,
    ) -> Result<SessionSummary, SessionError> {
        let started = ConsumerStarted {
            receive_count: self.consumer.receive_count(),
        };
        let span = started.span("session");

        async move {
            started.log();
            let start_time = Instant::now();

            let EmitterHandle {
                mut words,
                stop,
                task,
            } = WordEmitter::spawn(self.cycle.clone());

            let consumed = self.consumer.run(&mut words, sink, interrupt).await;

            let delivered = stop.send();
            StopSignalSent { delivered }.log();

            // `words` stays open until the emitter exits so it sees the signal, not a hang-up.
            let joined = task.await;
            drop(words);

            let consumed = consumed?;
            let report = joined?;

            let summary = SessionSummary {
                received: consumed.received,
                emitted: report.words_emitted,
                stop_reason: report.reason,
                interrupted: consumed.interrupted,
                elapsed: start_time.elapsed(),
            };

            SessionCompleted {
                received: summary.received,
                emitted: summary.emitted,
                duration: summary.elapsed,
            }
            .log();

            Ok(summary)
        }
        .instrument(span)
        .await
    }
}
