//! Water-empty indicator blinker.
//!
//! Free-running square wave on the indicator output. Runs on every pass of
//! the main loop (not just on scans) so the flash rate is independent of
//! the scan cadence.
//!
//! While `should_blink` is held the LED toggles whenever at least
//! `interval_ms` has elapsed since the last toggle. When it drops, a lit LED
//! is switched off with a single write; a dark LED is left alone.

use crate::app::ports::{ActuatorPort, Output};
use crate::time::Millis;

/// Phase of the indicator square wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlinkState {
    pub led_on: bool,
    pub last_toggle: Millis,
}

pub struct Blinker {
    state: BlinkState,
    interval_ms: u32,
}

impl Blinker {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            state: BlinkState::default(),
            interval_ms,
        }
    }

    pub fn update(&mut self, should_blink: bool, now: Millis, hw: &mut impl ActuatorPort) {
        if should_blink {
            if now.elapsed_since(self.state.last_toggle) >= self.interval_ms {
                self.state.last_toggle = now;
                self.state.led_on = !self.state.led_on;
                hw.write(Output::Indicator, self.state.led_on);
            }
        } else if self.state.led_on {
            self.state.led_on = false;
            hw.write(Output::Indicator, false);
        }
    }

    /// Drive the indicator OFF unconditionally (boot-time initialisation).
    pub fn force_off(&mut self, hw: &mut impl ActuatorPort) {
        self.state.led_on = false;
        hw.write(Output::Indicator, false);
    }

    pub fn state(&self) -> BlinkState {
        self.state
    }

    pub fn is_lit(&self) -> bool {
        self.state.led_on
    }
}
