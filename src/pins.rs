//! GPIO pin assignments for the dispenser controller board (ESP32).
//!
//! esp-idf-hal hands out pins as distinct types (`gpio18`, `gpio19`, ...), so
//! `main` names them directly. It then passes the numbers it actually claimed
//! to [`verify_claimed`], which refuses to start if they have drifted from
//! this table (the table is also what the start-up banner prints).

use crate::error::{Error, Result};

/// Relay driving the heater element. Wired to the relay's NO terminal so
/// the heater is off whenever the relay is de-energised.
pub const HEATER_RELAY_GPIO: i32 = 16;
/// Red "water empty" indicator LED.
pub const WATER_EMPTY_LED_GPIO: i32 = 17;
/// Float / reed switch between this pin and GND. Input with internal pull-up.
pub const LEVEL_SENSOR_GPIO: i32 = 18;
/// Relay driving the transfer pump (NO terminal, fail-safe off).
pub const PUMP_RELAY_GPIO: i32 = 19;
/// On-board LED; mirrors the water-empty indicator.
pub const BUILTIN_LED_GPIO: i32 = 2;

/// Role/GPIO pairs, in the order they are reported at start-up.
pub const PIN_TABLE: [(&str, i32); 5] = [
    ("HEATER_RELAY", HEATER_RELAY_GPIO),
    ("WATER_EMPTY_LED", WATER_EMPTY_LED_GPIO),
    ("BUILTIN_LED", BUILTIN_LED_GPIO),
    ("LEVEL_SENSOR", LEVEL_SENSOR_GPIO),
    ("PUMP_RELAY", PUMP_RELAY_GPIO),
];

/// Check the GPIOs claimed by `main` against [`PIN_TABLE`].
///
/// `claimed` holds (role, gpio) pairs in any order. Every role in the table
/// must appear exactly once with the same number.
pub fn verify_claimed(claimed: &[(&str, i32)]) -> Result<()> {
    for (role, gpio) in PIN_TABLE {
        let mut matches = claimed.iter().filter(|(r, _)| *r == role);
        match (matches.next(), matches.next()) {
            (Some((_, got)), None) if *got == gpio => {}
            _ => return Err(Error::Init(role)),
        }
    }
    if claimed.len() != PIN_TABLE.len() {
        return Err(Error::Init("unexpected pin role"));
    }
    Ok(())
}
