//! Delayed, cancelable validation runs.
//!
//! A run waits out a "compiling" delay before validating. Scheduling a new
//! run supersedes every run still waiting: when an older run wakes up and
//! finds it is no longer the latest, it reports `Superseded` without
//! validating. Cancelling wakes the waiting worker immediately.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::validate::{TestSpec, ValidationReport, Validator};

/// How a scheduled run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Completed(ValidationReport),
    /// A newer run was scheduled before this one's delay elapsed.
    Superseded,
    Cancelled,
}

/// Hands out runs; the most recently scheduled one wins.
#[derive(Debug, Clone)]
pub struct RunScheduler {
    validator: Arc<Validator>,
    latest: Arc<AtomicU64>,
}

impl RunScheduler {
    pub fn new(validator: Arc<Validator>) -> Self {
        Self {
            validator,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a run that validates `submission` once `delay` has elapsed.
    pub fn schedule(
        &self,
        submission: impl Into<String>,
        tests: Vec<TestSpec>,
        delay: Duration,
    ) -> PendingRun {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let submission = submission.into();
        let validator = Arc::clone(&self.validator);
        let latest = Arc::clone(&self.latest);
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        tracing::debug!(generation, delay_ms = delay.as_millis() as u64, "run scheduled");

        let handle = thread::spawn(move || {
            match cancel_rx.recv_timeout(delay) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    tracing::debug!(generation, "run cancelled");
                    return RunResult::Cancelled;
                }
            }

            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(generation, "run superseded");
                return RunResult::Superseded;
            }

            RunResult::Completed(validator.validate(&submission, &tests))
        });

        PendingRun {
            generation,
            cancel: cancel_tx,
            handle,
        }
    }

    /// Generation number of the most recently scheduled run (0 if none).
    pub fn latest_generation(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

/// A run that has been scheduled but not yet collected.
///
/// Dropping it without waiting cancels the run.
#[derive(Debug)]
pub struct PendingRun {
    generation: u64,
    cancel: Sender<()>,
    handle: JoinHandle<RunResult>,
}

impl PendingRun {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Abandon the run. No effect once its delay has elapsed.
    pub fn cancel(&self) {
        // The worker may already be past its delay and gone.
        let _ = self.cancel.send(());
    }

    /// Block until the run ends.
    pub fn wait(self) -> RunResult {
        let PendingRun {
            generation,
            cancel,
            handle,
        } = self;

        let result = handle.join().unwrap_or_else(|_| {
            tracing::error!(generation, "run worker panicked");
            RunResult::Cancelled
        });
        drop(cancel);
        result
    }
}
