//! Hardware adapter: bridges GPIO pins to domain port traits.
//!
//! Owns the level-sensor input and every output pin, exposing them through
//! [`LevelSensor`] and [`ActuatorPort`]. Generic over the `embedded-hal`
//! digital traits: on the board the pins are `esp-idf-hal` `PinDriver`s,
//! in tests they are in-memory fakes.
//!
//! Output writes are fire-and-forget. A failed write is logged and the
//! control loop carries on; a failed read is logged and the previous good
//! level is returned.

use embedded_hal::digital::{InputPin, OutputPin, PinState};
use log::warn;

use crate::app::ports::{ActuatorPort, LevelSensor, Output};
use crate::config::OutputPolarity;

/// Concrete adapter that combines all pins behind port traits.
///
/// * `S`: level sensor input (pull-up enabled by the caller)
/// * `P`: pump relay
/// * `H`: heater relay
/// * `L`: water-empty LED
/// * `B`: on-board LED, mirrors `L`
pub struct HardwareAdapter<S, P, H, L, B> {
    sensor: S,
    pump: P,
    heater: H,
    led: L,
    builtin_led: B,
    polarity: OutputPolarity,
    /// Last level successfully read. Starts at the pull-up idle level.
    last_level: bool,
}

impl<S, P, H, L, B> HardwareAdapter<S, P, H, L, B>
where
    S: InputPin,
    P: OutputPin,
    H: OutputPin,
    L: OutputPin,
    B: OutputPin,
{
    pub fn new(
        sensor: S,
        pump: P,
        heater: H,
        led: L,
        builtin_led: B,
        polarity: OutputPolarity,
    ) -> Self {
        Self {
            sensor,
            pump,
            heater,
            led,
            builtin_led,
            polarity,
            last_level: true,
        }
    }

    /// Release the pins (tests inspect them afterwards).
    pub fn into_parts(self) -> (S, P, H, L, B) {
        (self.sensor, self.pump, self.heater, self.led, self.builtin_led)
    }

    fn pin_state(&self, on: bool) -> PinState {
        PinState::from(self.polarity.level_for(on))
    }
}

fn drive<O: OutputPin>(pin: &mut O, state: PinState, name: &str) {
    if let Err(e) = pin.set_state(state) {
        warn!("{} pin write failed: {:?}", name, e);
    }
}

// ── LevelSensor implementation ────────────────────────────────

impl<S, P, H, L, B> LevelSensor for HardwareAdapter<S, P, H, L, B>
where
    S: InputPin,
{
    fn read_level(&mut self) -> bool {
        match self.sensor.is_high() {
            Ok(level) => {
                self.last_level = level;
                level
            }
            Err(e) => {
                warn!("level sensor read failed ({:?}), keeping last level", e);
                self.last_level
            }
        }
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<S, P, H, L, B> ActuatorPort for HardwareAdapter<S, P, H, L, B>
where
    S: InputPin,
    P: OutputPin,
    H: OutputPin,
    L: OutputPin,
    B: OutputPin,
{
    fn write(&mut self, output: Output, on: bool) {
        let state = self.pin_state(on);
        match output {
            Output::Pump => drive(&mut self.pump, state, "pump"),
            Output::Heater => drive(&mut self.heater, state, "heater"),
            Output::Indicator => {
                drive(&mut self.led, state, "water-empty LED");
                drive(&mut self.builtin_led, state, "builtin LED");
            }
        }
    }
}
