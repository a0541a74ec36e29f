use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::errors::SessionError;
use crate::observability::messages::consumer::ConsumerInterrupted;
use crate::observability::messages::StructuredLog;
use crate::traits::WordSink;

/// Bounded receive loop: takes a fixed number of words off the word channel.
#[derive(Debug, Clone, Copy)]
pub struct Consumer {
    receive_count: usize,
}

/// Outcome of a consumer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsumerReport {
    pub received: usize,
    /// `true` when the interrupt token ended the run before `receive_count` words.
    pub interrupted: bool,
}

impl Consumer {
    pub fn new(receive_count: usize) -> Self {
        Self { receive_count }
    }

    pub fn receive_count(&self) -> usize {
        self.receive_count
    }

    /// Receive up to `receive_count` words, handing each to `sink`.
    ///
    /// Cancelling `interrupt` ends the run early; a pending cancellation is
    /// checked before every receive. Sending the stop signal is left to the caller.
    pub async fn run<S: WordSink + ?Sized>(
        &self,
        words: &mut mpsc::Receiver<String>,
        sink: &mut S,
        interrupt: &CancellationToken,
    ) -> Result<ConsumerReport, SessionError> {
        let mut received = 0;

        while received < self.receive_count {
            let word = tokio::select! {
                biased;
                _ = interrupt.cancelled() => {
                    ConsumerInterrupted {
                        received,
                        receive_count: self.receive_count,
                    }
                    .log();
                    return Ok(ConsumerReport {
                        received,
                        interrupted: true,
                    });
                }
                word = words.recv() => word,
            };

            let word = word.ok_or(SessionError::ProducerHungUp {
                received,
                expected: self.receive_count,
            })?;
            sink.accept(&word)?;
            received += 1;
        }

        Ok(ConsumerReport {
            received,
            interrupted: false,
        })
    }
}
