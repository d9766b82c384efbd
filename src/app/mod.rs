//! Application core: domain logic with no direct I/O.
//!
//! This module contains the control loop of the dispenser: level
//! interpretation, the empty-source timer, the pump/heater policy and the
//! indicator. All interaction with hardware happens through **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod events;
pub mod ports;
pub mod service;
