//! Output line abstraction and the bit encoder.
//!
//! [`LineSet`] owns every acquired line for the life of the process and is the
//! only writer. Dropping it reverts each line to input and releases it, so the
//! lines are handed back on every exit path.

use crate::config::LINE_COUNT;
use crate::types::BitPattern;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures talking to the GPIO hardware.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("Failed to open GPIO controller")]
    Controller(#[source] BoxError),

    #[error("Failed to acquire GPIO line {offset} as output")]
    Acquire {
        offset: u8,
        #[source]
        source: BoxError,
    },

    #[error("Failed to write GPIO line {offset}")]
    Write {
        offset: u8,
        #[source]
        source: BoxError,
    },

    #[error("Failed to revert GPIO line {offset} to input")]
    Revert {
        offset: u8,
        #[source]
        source: BoxError,
    },

    #[error("Line set capacity exceeded by line {offset}")]
    CapacityExceeded { offset: u8 },
}

/// Trait for abstracting a single acquired output line.
///
/// Implement this for your GPIO backend. A line starts out configured as an
/// output driven low.
pub trait OutputLine {
    /// Hardware offset of this line.
    fn offset(&self) -> u8;

    /// Drives the line high or low.
    fn set_level(&mut self, high: bool) -> Result<(), LineError>;

    /// Reconfigures the line as an input.
    fn revert_to_input(&mut self) -> Result<(), LineError>;

    /// Hands the line back to the system.
    fn release(self);
}

/// Source of output lines.
pub trait LineProvider {
    type Line: OutputLine;

    /// Requests `offset` as an output, initially low.
    fn acquire_output(&mut self, offset: u8) -> Result<Self::Line, LineError>;
}

/// The fixed, ordered set of output lines.
///
/// Index `i` is driven by bit `i` of every applied [`BitPattern`].
pub struct LineSet<L: OutputLine> {
    lines: heapless::Vec<L, LINE_COUNT>,
}

impl<L: OutputLine> LineSet<L> {
    /// Acquires every offset in order.
    ///
    /// If any acquisition fails, the lines acquired so far are reverted and
    /// released before the error is returned.
    pub fn acquire<P>(provider: &mut P, offsets: &[u8]) -> Result<Self, LineError>
    where
        P: LineProvider<Line = L>,
    {
        let mut set = Self {
            lines: heapless::Vec::new(),
        };

        for &offset in offsets {
            let line = provider.acquire_output(offset)?;
            if let Err(line) = set.lines.push(line) {
                retire(line);
                return Err(LineError::CapacityExceeded { offset });
            }
        }

        tracing::debug!(count = set.lines.len(), "Acquired output lines");
        Ok(set)
    }

    /// Writes bit `i` of `pattern` to line `i`, for every line.
    ///
    /// Stops at the first failed write.
    pub fn apply(&mut self, pattern: BitPattern) -> Result<(), LineError> {
        for (bit, line) in self.lines.iter_mut().enumerate() {
            line.set_level(pattern.is_set(bit))?;
        }
        Ok(())
    }

    /// Drives every line low.
    #[inline]
    pub fn quiesce(&mut self) -> Result<(), LineError> {
        self.apply(BitPattern::ZERO)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Offsets in bit order.
    pub fn offsets(&self) -> impl Iterator<Item = u8> + '_ {
        self.lines.iter().map(L::offset)
    }
}

impl<L: OutputLine> core::fmt::Debug for LineSet<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.offsets()).finish()
    }
}

impl<L: OutputLine> Drop for LineSet<L> {
    fn drop(&mut self) {
        while let Some(line) = self.lines.pop() {
            retire(line);
        }
    }
}

/// Reverts a line to input and releases it.
///
/// The release happens even if the revert fails.
fn retire<L: OutputLine>(mut line: L) {
    let offset = line.offset();
    if let Err(error) = line.revert_to_input() {
        tracing::warn!(offset, %error, "Failed to revert line to input");
    }
    line.release();
    tracing::trace!(offset, "Released output line");
}
