//! Output line backends.

#[cfg(feature = "rpi")]
pub mod rpi;
pub mod simulated;
