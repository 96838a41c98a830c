#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`BitPattern`**: Desired state of every output line, bit `i` driving line `i`
//! - **`LineSet`**: The fixed, ordered set of acquired lines and the only writer to them
//! - **`OutputLine`** / **`LineProvider`**: Traits to implement for your GPIO backend
//! - **`Mode`**: One of the five fixed light patterns, with its table, interval and step budget
//! - **`PatternSequence`**: Finite, restartable iterator of steps for one mode
//! - **`PatternSequencer`**: Applies a sequence on its cadence and stops as soon as it is cancelled
//! - **`Session`**: Asks for a mode, runs it, and repeats until quit or cancellation
//! - **`ModeSource`**: Trait supplying mode selections, implemented by the interactive `Prompt`
//!
//! Cancellation is a [`tokio_util::sync::CancellationToken`]; once raised the
//! session ends and the lines are reverted to inputs and released.

pub mod backend;
pub mod config;
pub mod error;
pub mod line;
pub mod mode;
pub mod pattern;
pub mod prompt;
pub mod sequencer;
pub mod session;
pub mod signal;
pub mod types;

pub use config::{LINE_COUNT, LINE_OFFSETS};
pub use error::Error;
pub use line::{LineError, LineProvider, LineSet, OutputLine};
pub use mode::{Mode, Selection};
pub use pattern::PatternSequence;
pub use prompt::Prompt;
pub use sequencer::{PatternSequencer, RunOutcome, SequencerError, SequencerState, ServiceTiming};
pub use session::{ModeSource, Session, SessionEnd};
pub use types::{BitPattern, ReportWidth, SequenceStep, StepReport};
