//! Timed pattern sequencer with state management and cancellation.
//!
//! [`PatternSequencer`] pulls steps from a [`PatternSequence`] and applies them
//! to a [`LineSet`]. The synchronous state machine (`start`, `service`,
//! `cancel`) is driven by [`PatternSequencer::run`], which waits out each
//! step's interval while racing a [`CancellationToken`].

use std::io::Write;

use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::line::{LineError, LineSet, OutputLine};
use crate::mode::Mode;
use crate::pattern::PatternSequence;
use crate::types::{BitPattern, SequenceStep, StepReport};

/// The current state of a pattern sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Mode selected, nothing applied yet.
    Init,
    /// Steps are being applied.
    Running,
    /// Every step was applied.
    Completed,
    /// Stopped by the cancellation token. Lines hold the last applied pattern.
    Cancelled,
    /// A line write failed. The lines are in an unknown state.
    Failed,
}

/// When the sequencer needs to be serviced again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTiming {
    /// Service again after this delay.
    Delay(core::time::Duration),

    /// Sequence has completed. No further servicing is needed.
    Complete,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum SequencerError {
    /// Operation called from an invalid state.
    #[error("invalid state: expected {expected}, but sequencer is in {actual:?}")]
    InvalidState {
        expected: &'static str,
        actual: SequencerState,
    },

    /// Applying a pattern failed. Not retried; the sequencer is left `Failed`.
    #[error("Failed to apply pattern")]
    Line(#[from] LineError),
}

/// Drives one mode run over a borrowed line set.
pub struct PatternSequencer<'l, L: OutputLine> {
    lines: &'l mut LineSet<L>,
    sequence: PatternSequence,
    state: SequencerState,
    last_step: Option<SequenceStep>,
}

impl<'l, L: OutputLine> PatternSequencer<'l, L> {
    /// Creates a sequencer in `Init` state. Does not touch the lines.
    pub fn new(lines: &'l mut LineSet<L>, sequence: PatternSequence) -> Self {
        Self {
            lines,
            sequence,
            state: SequencerState::Init,
            last_step: None,
        }
    }

    /// Applies the mode's baseline pattern, if any, and starts running.
    ///
    /// Must be called from `Init` state.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming::Delay(interval))` - wait before the first step
    /// * `Ok(ServiceTiming::Complete)` - the sequence has no steps
    pub fn start(&mut self) -> Result<ServiceTiming, SequencerError> {
        if self.state != SequencerState::Init {
            return Err(SequencerError::InvalidState {
                expected: "Init",
                actual: self.state,
            });
        }

        if let Some(baseline) = self.sequence.baseline() {
            tracing::debug!(mode = %self.mode(), baseline = baseline.bits(), "Applying baseline pattern");
            self.apply(baseline)?;
        }

        self.state = SequencerState::Running;
        Ok(self.next_timing())
    }

    /// Applies the next step.
    ///
    /// Must be called from `Running` state, once the previous delay elapsed.
    ///
    /// # Returns
    /// - `Ok(ServiceTiming::Delay(interval))` - more steps follow
    /// - `Ok(ServiceTiming::Complete)` - that was the last step, transitions to `Completed`
    /// - `Err` - invalid state or a failed line write
    pub fn service(&mut self) -> Result<ServiceTiming, SequencerError> {
        if self.state != SequencerState::Running {
            return Err(SequencerError::InvalidState {
                expected: "Running",
                actual: self.state,
            });
        }

        let Some(step) = self.sequence.next() else {
            self.state = SequencerState::Completed;
            return Ok(ServiceTiming::Complete);
        };

        self.apply(step.pattern)?;
        tracing::debug!(index = step.index, pattern = step.pattern.bits(), "Applied step");
        self.last_step = Some(step);

        Ok(self.next_timing())
    }

    /// Stops the run without applying anything further.
    ///
    /// Can be called from `Init` or `Running`.
    pub fn cancel(&mut self) -> Result<(), SequencerError> {
        match self.state {
            SequencerState::Init | SequencerState::Running => {
                self.state = SequencerState::Cancelled;
                Ok(())
            }
            _ => Err(SequencerError::InvalidState {
                expected: "Init or Running",
                actual: self.state,
            }),
        }
    }

    /// Runs the sequence to completion or cancellation.
    ///
    /// Each step waits for its interval while racing `cancel`; a raised token
    /// wins over an elapsed timer. Every applied step is reported to `console`.
    pub async fn run<W: Write>(
        &mut self,
        cancel: &CancellationToken,
        console: &mut W,
    ) -> Result<RunOutcome, Error> {
        if cancel.is_cancelled() {
            self.cancel()?;
            return Ok(RunOutcome::Cancelled);
        }

        let mut timing = self.start()?;
        while let ServiceTiming::Delay(interval) = timing {
            tokio::select! {
                biased;

                () = cancel.cancelled() => {
                    self.cancel()?;
                    tracing::info!(mode = %self.mode(), step = self.sequence.position(), "Sequence cancelled");
                    return Ok(RunOutcome::Cancelled);
                }

                () = tokio::time::sleep(interval) => {
                    timing = self.service()?;
                    if let Some(report) = self.last_report() {
                        writeln!(console, "{report}").map_err(Error::Console)?;
                    }
                }
            }
        }

        Ok(RunOutcome::Completed)
    }

    /// Applies `pattern`, moving to `Failed` if any line rejects it.
    fn apply(&mut self, pattern: BitPattern) -> Result<(), SequencerError> {
        self.lines.apply(pattern).map_err(|error| {
            self.state = SequencerState::Failed;
            SequencerError::from(error)
        })
    }

    fn next_timing(&mut self) -> ServiceTiming {
        if self.sequence.remaining() == 0 {
            self.state = SequencerState::Completed;
            ServiceTiming::Complete
        } else {
            ServiceTiming::Delay(self.sequence.interval())
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.sequence.mode()
    }

    /// The most recently applied step.
    pub fn last_step(&self) -> Option<SequenceStep> {
        self.last_step
    }

    /// Console report for the most recently applied step.
    pub fn last_report(&self) -> Option<StepReport> {
        self.last_step
            .map(|step| StepReport::new(step.index, step.pattern, self.mode().report_width()))
    }
}
