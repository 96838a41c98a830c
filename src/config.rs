//! Fixed constants of the light patterns.
//!
//! None of these are configurable at runtime.

use core::time::Duration;

/// Number of output lines driven by every pattern.
pub const LINE_COUNT: usize = 11;

/// BCM offsets of the output lines, bit 0 first.
pub const LINE_OFFSETS: [u8; LINE_COUNT] = [27, 26, 25, 24, 23, 22, 17, 16, 12, 20, 21];

/// Base number of cycles per mode run.
pub const CYCLES: u32 = 64;

/// Cycles per second of the fast modes.
pub const CYCLES_PER_SECOND: u32 = 4;

/// Interval of the shift, counter and knock modes.
pub const FAST_INTERVAL: Duration = Duration::from_millis(1_000 / CYCLES_PER_SECOND as u64);

/// Interval of the tri-color mode.
pub const SLOW_INTERVAL: Duration = Duration::from_secs(CYCLES_PER_SECOND as u64);

/// Top bit of the single-byte modes.
pub const HIGH_BIT: u16 = 0x80;

pub const RIGHT_SHIFT_START: u16 = HIGH_BIT;
pub const LEFT_SHIFT_START: u16 = 0x01;

/// Highest value emitted by the single-byte modes.
pub const BYTE_MAX: u16 = 0xFF;

pub const KNOCK_TABLE: [u16; 6] = [0x81, 0x42, 0x24, 0x18, 0x24, 0x42];

pub const TRI_COLOR_TABLE: [u16; 8] = [0x180, 0x220, 0x3A0, 0x410, 0x590, 0x630, 0x7B0, 0x000];

/// Power indicator lines raised before the tri-color sequence starts.
pub const TRI_COLOR_BASELINE: u16 = 0x700;
