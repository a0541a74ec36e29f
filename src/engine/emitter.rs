// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::engine::word_cycle::WordCycle;
use crate::observability::messages::emitter::{EmitterStarted, EmitterStopped};
use crate::observability::messages::StructuredLog;

/// Capacity of the word channel.
///
/// Tokio has no zero-capacity channel; with one slot the emitter can be at
/// most one word ahead of the consumer.
pub const WORD_CHANNEL_CAPACITY: usize = 1;

/// Why the word emitter stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The consumer sent the stop signal.
    Signalled,
    /// The stop signal was dropped without being sent.
    SignalDropped,
    /// The word receiver was dropped.
    ConsumerGone,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Signalled => write!(f, "stop signal received"),
            StopReason::SignalDropped => write!(f, "stop signal dropped"),
            StopReason::ConsumerGone => write!(f, "consumer went away"),
        }
    }
}

/// What the emitter task reports once it has exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitterReport {
    /// Words handed to the channel, including one that may still sit in the slot.
    pub words_emitted: usize,
    pub reason: StopReason,
}

/// One-shot stop signal for a running [`WordEmitter`].
///
/// `send` takes `self`, so a signal can be delivered at most once.
#[derive(Debug)]
pub struct StopSignal(oneshot::Sender<()>);

impl StopSignal {
    /// Deliver the signal. Returns `false` if the emitter had already exited.
    pub fn send(self) -> bool {
        self.0.send(()).is_ok()
    }
}

/// The consumer's side of a running emitter.
pub struct EmitterHandle {
    pub words: mpsc::Receiver<String>,
    pub stop: StopSignal,
    pub task: JoinHandle<EmitterReport>,
}

/// Producer task that offers the next word of a [`WordCycle`] until told to stop.
pub struct WordEmitter;

impl WordEmitter {
    /// Spawn the emitter on the current tokio runtime.
    pub fn spawn(cycle: WordCycle) -> EmitterHandle {
        let (word_tx, word_rx) = mpsc::channel(WORD_CHANNEL_CAPACITY);
        let (stop_tx, stop_rx) = oneshot::channel();

        let started = EmitterStarted {
            word_count: cycle.word_count(),
        };
        let span = started.span("word_emitter");
        let task = tokio::spawn(emit(cycle, word_tx, stop_rx).instrument(span));

        EmitterHandle {
            words: word_rx,
            stop: StopSignal(stop_tx),
            task,
        }
    }
}

async fn emit(
    mut cycle: WordCycle,
    word_tx: mpsc::Sender<String>,
    mut stop_rx: oneshot::Receiver<()>,
) -> EmitterReport {
    EmitterStarted {
        word_count: cycle.word_count(),
    }
    .log();

    let mut words_emitted = 0;

    // Unbiased: when a slot is free and the stop signal is pending, either may win.
    // A reserved permit is only consumed once this branch is chosen, so no word is lost.
    let reason = loop {
        tokio::select! {
            permit = word_tx.reserve() => {
                match permit {
                    Ok(permit) => {
                        permit.send(cycle.current().to_string());
                        cycle.advance();
                        words_emitted += 1;
                    }
                    Err(_) => break StopReason::ConsumerGone,
                }
            }
            signal = &mut stop_rx => {
                break if signal.is_ok() {
                    StopReason::Signalled
                } else {
                    StopReason::SignalDropped
                };
            }
        }
    };

    drop(stop_rx);

    let report = EmitterReport {
        words_emitted,
        reason,
    };
    EmitterStopped {
        words_emitted,
        reason,
    }
    .log();
    report
}
