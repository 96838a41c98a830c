//! The mode session loop.

use std::io::Write;

use tokio_util::sync::CancellationToken;

use crate::error::Error;
use crate::line::{LineSet, OutputLine};
use crate::mode::Selection;
use crate::pattern::PatternSequence;
use crate::sequencer::{PatternSequencer, RunOutcome};

/// Supplies the operator's next mode selection.
///
/// Invalid input is handled inside the implementation; only valid selections
/// come back.
#[allow(async_fn_in_trait)]
pub trait ModeSource {
    async fn next_selection(&mut self) -> Result<Selection, Error>;
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The operator selected quit.
    Quit,
    /// The cancellation token was raised.
    Cancelled,
}

/// Repeatedly asks for a mode and runs it until quit or cancellation.
///
/// Owns the line set; the lines are reverted and released when the session
/// ends, whichever way it ends.
pub struct Session<L: OutputLine, M: ModeSource, W: Write> {
    lines: LineSet<L>,
    modes: M,
    console: W,
    cancel: CancellationToken,
}

impl<L: OutputLine, M: ModeSource, W: Write> Session<L, M, W> {
    pub fn new(lines: LineSet<L>, modes: M, console: W, cancel: CancellationToken) -> Self {
        Self {
            lines,
            modes,
            console,
            cancel,
        }
    }

    pub async fn run(mut self) -> Result<SessionEnd, Error> {
        loop {
            self.lines.quiesce()?;

            let selection = tokio::select! {
                biased;

                () = self.cancel.cancelled() => {
                    tracing::info!("Cancelled while waiting for mode selection");
                    return Ok(SessionEnd::Cancelled);
                }

                selection = self.modes.next_selection() => selection?,
            };

            let mode = match selection {
                Selection::Quit => {
                    tracing::info!("Quit selected");
                    return Ok(SessionEnd::Quit);
                }
                Selection::Mode(mode) => mode,
            };

            tracing::info!(%mode, "Starting mode");
            let mut sequencer = PatternSequencer::new(&mut self.lines, PatternSequence::new(mode));
            match sequencer.run(&self.cancel, &mut self.console).await? {
                RunOutcome::Completed => tracing::info!(%mode, "Mode completed"),
                RunOutcome::Cancelled => return Ok(SessionEnd::Cancelled),
            }
        }
    }
}
