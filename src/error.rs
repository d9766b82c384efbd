//! Unified error types for the dispenser firmware.
//!
//! Domain faults (an empty source, a low tank) are never errors: they are
//! controller state. This type only covers problems that stop the firmware
//! from starting at all: an invalid configuration or a pin wiring that does
//! not match the pin table.

use core::fmt;

/// Every fallible start-up operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed range validation.
    /// The message names the offending field.
    Config(&'static str),
    /// A claimed peripheral does not match the board description.
    /// The message names the pin role.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
