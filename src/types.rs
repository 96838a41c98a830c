//! Core types for pattern construction.

use core::fmt;

/// Desired state of the output lines, one bit per line.
///
/// Bit `i` drives line `i` of a [`LineSet`](crate::line::LineSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BitPattern(u16);

impl BitPattern {
    /// Every line low.
    pub const ZERO: Self = BitPattern(0);

    /// Creates a pattern from raw bits.
    #[inline]
    pub const fn new(bits: u16) -> Self {
        BitPattern(bits)
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns true if the bit for `line` is set.
    #[inline]
    pub const fn is_set(self, line: usize) -> bool {
        line < u16::BITS as usize && (self.0 >> line) & 1 == 1
    }
}

impl fmt::UpperHex for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// A single step produced by a pattern generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStep {
    /// Zero-based position within the run.
    pub index: u32,

    /// Pattern to apply.
    pub pattern: BitPattern,
}

impl SequenceStep {
    /// Creates a new sequence step.
    #[inline]
    pub fn new(index: u32, pattern: BitPattern) -> Self {
        Self { index, pattern }
    }
}

/// How many digits the console report prints for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportWidth {
    /// 2 hex digits, 8 binary digits.
    Byte,

    /// 4 hex digits, 16 binary digits.
    Word,
}

/// Human readable line describing an applied step.
///
/// Renders as `<index>: Output Byte = 0x<hex> = <binary>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub index: u32,
    pub pattern: BitPattern,
    pub width: ReportWidth,
}

impl StepReport {
    pub fn new(index: u32, pattern: BitPattern, width: ReportWidth) -> Self {
        Self {
            index,
            pattern,
            width,
        }
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let StepReport {
            index,
            pattern,
            width,
        } = *self;

        match width {
            ReportWidth::Byte => write!(f, "{index:03}: Output Byte = 0x{pattern:02X} = {pattern:08b}"),
            ReportWidth::Word => write!(f, "{index:03}: Output Byte = 0x{pattern:04X} = {pattern:016b}"),
        }
    }
}
