//! Pump and heater relay drivers.
//!
//! Both are edge-triggered: a request equal to the stored state is a no-op
//! (no pin write, no log line), so the control loop can restate the desired
//! state every scan.
//!
//! ## Safety contract
//!
//! Relays are wired on their NO terminal: a de-energised relay means the
//! load is off. The policy guarantees pump and heater are never requested
//! on together; these drivers do not second-guess it.

use crate::app::events::AppEvent;
use crate::app::ports::{ActuatorPort, EventSink, Output};
use crate::time::Millis;

/// Stored state of a single relay output.
#[derive(Debug, Clone)]
pub struct RelayDriver {
    output: Output,
    on: bool,
}

impl RelayDriver {
    pub fn new(output: Output) -> Self {
        Self { output, on: false }
    }

    /// Request `on`. Returns `true` if this call changed the relay.
    ///
    /// The stored state is updated before the pin write.
    pub fn set(&mut self, on: bool, hw: &mut impl ActuatorPort) -> bool {
        if on == self.on {
            return false;
        }
        self.on = on;
        hw.write(self.output, on);
        true
    }

    /// Drive the pin to OFF unconditionally (boot-time initialisation).
    pub fn force_off(&mut self, hw: &mut impl ActuatorPort) {
        self.on = false;
        hw.write(self.output, false);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// Pump running state. `started_at` records the last off → on transition
/// and is kept for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpState {
    pub is_on: bool,
    pub started_at: Millis,
}

pub struct PumpDriver {
    relay: RelayDriver,
    started_at: Millis,
}

impl PumpDriver {
    pub fn new() -> Self {
        Self {
            relay: RelayDriver::new(Output::Pump),
            started_at: Millis::ZERO,
        }
    }

    pub fn set(
        &mut self,
        on: bool,
        now: Millis,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        if on && !self.relay.is_on() {
            self.started_at = now;
        }
        if self.relay.set(on, hw) {
            sink.emit(&AppEvent::PumpChanged { on });
        }
    }

    pub fn force_off(&mut self, hw: &mut impl ActuatorPort) {
        self.relay.force_off(hw);
    }

    pub fn state(&self) -> PumpState {
        PumpState {
            is_on: self.relay.is_on(),
            started_at: self.started_at,
        }
    }

    pub fn is_running(&self) -> bool {
        self.relay.is_on()
    }
}

impl Default for PumpDriver {
    fn default() -> Self {
        Self::new()
    }
}

pub struct HeaterDriver {
    relay: RelayDriver,
}

impl HeaterDriver {
    pub fn new() -> Self {
        Self {
            relay: RelayDriver::new(Output::Heater),
        }
    }

    pub fn set(&mut self, on: bool, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        if self.relay.set(on, hw) {
            sink.emit(&AppEvent::HeaterChanged { on });
        }
    }

    pub fn force_off(&mut self, hw: &mut impl ActuatorPort) {
        self.relay.force_off(hw);
    }

    pub fn is_on(&self) -> bool {
        self.relay.is_on()
    }
}

impl Default for HeaterDriver {
    fn default() -> Self {
        Self::new()
    }
}
