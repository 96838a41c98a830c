//! Lighting modes and the operator's mode selection.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use crate::config::{
    CYCLES, FAST_INTERVAL, KNOCK_TABLE, SLOW_INTERVAL, TRI_COLOR_BASELINE, TRI_COLOR_TABLE,
};
use crate::types::{BitPattern, ReportWidth};

/// One of the fixed light patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A single lit bit walking from line 7 down to line 0.
    RightShift,

    /// A single lit bit walking from line 0 up to line 7.
    LeftShift,

    /// Lines 0-7 counting in binary.
    Counter,

    /// Two bits meeting in the middle and bouncing back.
    Knock,

    /// Color cycle on the upper lines with the power indicator lit.
    TriColor,
}

impl Mode {
    /// All modes in menu order.
    pub const ALL: [Mode; 5] = [
        Mode::RightShift,
        Mode::LeftShift,
        Mode::Counter,
        Mode::Knock,
        Mode::TriColor,
    ];

    /// Menu key selecting this mode.
    pub const fn symbol(self) -> char {
        match self {
            Mode::RightShift => 'R',
            Mode::LeftShift => 'L',
            Mode::Counter => 'C',
            Mode::Knock => 'K',
            Mode::TriColor => 'T',
        }
    }

    /// Menu description.
    pub const fn description(self) -> &'static str {
        match self {
            Mode::RightShift => "Right shift bit",
            Mode::LeftShift => "Left shift bit",
            Mode::Counter => "Count in binary",
            Mode::Knock => "Knocker lights",
            Mode::TriColor => "Tri-color light",
        }
    }

    /// Wait before each step.
    pub const fn interval(self) -> Duration {
        match self {
            Mode::TriColor => SLOW_INTERVAL,
            _ => FAST_INTERVAL,
        }
    }

    /// Number of steps in one run.
    ///
    /// The shift modes run one step past the base budget, the counter one step
    /// past a full byte.
    pub const fn steps(self) -> u32 {
        match self {
            Mode::RightShift | Mode::LeftShift => CYCLES + 1,
            Mode::Counter => 0x100 + 1,
            Mode::Knock | Mode::TriColor => CYCLES,
        }
    }

    /// Fixed table cycled through by the table-driven modes.
    pub const fn table(self) -> Option<&'static [u16]> {
        match self {
            Mode::Knock => Some(&KNOCK_TABLE),
            Mode::TriColor => Some(&TRI_COLOR_TABLE),
            _ => None,
        }
    }

    /// Pattern applied once before the timed sequence starts.
    pub const fn baseline(self) -> Option<BitPattern> {
        match self {
            Mode::TriColor => Some(BitPattern::new(TRI_COLOR_BASELINE)),
            _ => None,
        }
    }

    pub const fn report_width(self) -> ReportWidth {
        match self {
            Mode::TriColor => ReportWidth::Word,
            _ => ReportWidth::Byte,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// What the operator picked at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Mode(Mode),
    Quit,
}

impl Selection {
    pub const QUIT_SYMBOL: char = 'Q';
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseSelectionError {
    #[error("empty mode selection")]
    Empty,

    #[error("'{0}' is not a valid mode selection")]
    Unknown(char),
}

impl TryFrom<char> for Selection {
    type Error = ParseSelectionError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        let symbol = symbol.to_ascii_uppercase();
        if symbol == Selection::QUIT_SYMBOL {
            return Ok(Selection::Quit);
        }

        Mode::ALL
            .into_iter()
            .find(|mode| mode.symbol() == symbol)
            .map(Selection::Mode)
            .ok_or(ParseSelectionError::Unknown(symbol))
    }
}

/// Parses an input line; only its first character counts.
impl FromStr for Selection {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .next()
            .ok_or(ParseSelectionError::Empty)
            .and_then(Selection::try_from)
    }
}
