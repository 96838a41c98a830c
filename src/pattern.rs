//! Pattern generators for each mode.

use core::iter::FusedIterator;
use core::time::Duration;

use crate::config::{BYTE_MAX, HIGH_BIT, LEFT_SHIFT_START, RIGHT_SHIFT_START};
use crate::mode::Mode;
use crate::types::{BitPattern, SequenceStep};

/// Per-mode generator state.
#[derive(Debug, Clone)]
enum Generator {
    RightShift { next: u16 },
    LeftShift { next: u16 },
    Counter { next: u16 },
    Table { entries: &'static [u16], position: usize },
}

impl Generator {
    fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::RightShift => Generator::RightShift {
                next: RIGHT_SHIFT_START,
            },
            Mode::LeftShift => Generator::LeftShift {
                next: LEFT_SHIFT_START,
            },
            Mode::Counter => Generator::Counter { next: 0 },
            Mode::Knock | Mode::TriColor => Generator::Table {
                entries: mode.table().unwrap_or_default(),
                position: 0,
            },
        }
    }

    /// Produces the bits for one step.
    ///
    /// Wrap checks look at the value left behind by the previous step, before
    /// it is emitted. On the final step the right shift emits whatever it
    /// holds while the left shift is forced to zero.
    fn advance(&mut self, last: bool) -> u16 {
        match self {
            Generator::RightShift { next } => {
                if *next == 0 && !last {
                    *next = RIGHT_SHIFT_START;
                }
                let bits = *next;
                *next >>= 1;
                bits
            }
            Generator::LeftShift { next } => {
                if *next > HIGH_BIT {
                    *next = if last { 0 } else { LEFT_SHIFT_START };
                }
                let bits = *next;
                *next <<= 1;
                bits
            }
            Generator::Counter { next } => {
                if *next > BYTE_MAX {
                    *next = 0;
                }
                let bits = *next;
                *next += 1;
                bits
            }
            Generator::Table { entries, position } => {
                let bits = entries.get(*position).copied().unwrap_or_default();
                *position = (*position + 1) % entries.len().max(1);
                bits
            }
        }
    }
}

/// Finite, restartable sequence of steps for one mode.
///
/// Yields exactly [`Mode::steps`] items. Every step waits the same
/// [`interval`](PatternSequence::interval) before it is applied.
/// State lives only as long as the run.
#[derive(Debug, Clone)]
pub struct PatternSequence {
    mode: Mode,
    generator: Generator,
    index: u32,
}

impl PatternSequence {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            generator: Generator::for_mode(mode),
            index: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Total number of steps in a run.
    pub fn step_count(&self) -> u32 {
        self.mode.steps()
    }

    pub fn interval(&self) -> Duration {
        self.mode.interval()
    }

    /// Pattern to apply before the first step, if the mode has one.
    pub fn baseline(&self) -> Option<BitPattern> {
        self.mode.baseline()
    }

    /// Index of the step the next call to `next` yields.
    pub fn position(&self) -> u32 {
        self.index
    }

    /// Steps not yet yielded.
    pub fn remaining(&self) -> u32 {
        self.step_count() - self.index
    }

    /// Rewinds to the first step.
    pub fn restart(&mut self) {
        *self = Self::new(self.mode);
    }
}

impl Iterator for PatternSequence {
    type Item = SequenceStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.step_count() {
            return None;
        }

        let index = self.index;
        let last = index + 1 == self.step_count();
        let bits = self.generator.advance(last);
        self.index += 1;

        Some(SequenceStep::new(index, BitPattern::new(bits)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PatternSequence {}

impl FusedIterator for PatternSequence {}
