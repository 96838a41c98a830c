//! In-memory lines for hosts without GPIO.
//!
//! Every level change is logged at `trace`, every acquire and release at `debug`.

use crate::line::{LineError, LineProvider, OutputLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Output,
    Input,
}

#[derive(Debug, Default)]
pub struct SimulatedLines;

impl LineProvider for SimulatedLines {
    type Line = SimulatedLine;

    fn acquire_output(&mut self, offset: u8) -> Result<Self::Line, LineError> {
        tracing::debug!(offset, "Acquired simulated output line");
        Ok(SimulatedLine {
            offset,
            high: false,
            direction: Direction::Output,
        })
    }
}

#[derive(Debug)]
pub struct SimulatedLine {
    offset: u8,
    high: bool,
    direction: Direction,
}

impl SimulatedLine {
    pub fn is_high(&self) -> bool {
        self.high
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl OutputLine for SimulatedLine {
    fn offset(&self) -> u8 {
        self.offset
    }

    fn set_level(&mut self, high: bool) -> Result<(), LineError> {
        if self.direction != Direction::Output {
            return Err(LineError::Write {
                offset: self.offset,
                source: "line is configured as input".into(),
            });
        }

        if self.high != high {
            tracing::trace!(offset = self.offset, high, "Simulated line changed level");
        }
        self.high = high;
        Ok(())
    }

    fn revert_to_input(&mut self) -> Result<(), LineError> {
        self.direction = Direction::Input;
        self.high = false;
        Ok(())
    }

    fn release(self) {
        tracing::debug!(offset = self.offset, "Released simulated line");
    }
}
