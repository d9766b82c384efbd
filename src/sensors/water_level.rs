//! Tank water-level interpretation.
//!
//! The tank carries a single float (or reed) switch wired between the
//! sensor GPIO and GND, with the internal pull-up enabled:
//!
//! | Tank  | Switch | Line | `active_low = true` |
//! |-------|--------|------|---------------------|
//! | full  | closed | LOW  | water OK            |
//! | low   | open   | HIGH | water low           |
//!
//! If a switch is mounted inverted, set `sensor_active_low = false` in the
//! configuration rather than rewiring.
//!
//! The reading is trusted as-is each scan; there is no debouncing or
//! majority vote across scans.

/// Map a raw line level (`true` = HIGH) onto "tank has enough water".
#[inline]
pub const fn interpret(raw_high: bool, active_low: bool) -> bool {
    if active_low { !raw_high } else { raw_high }
}

/// Interpreted tank level, cached for the duration of one scan so every
/// consumer in that scan sees the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaterLevelState {
    pub ok: bool,
}

impl WaterLevelState {
    pub const fn from_raw(raw_high: bool, active_low: bool) -> Self {
        Self { ok: interpret(raw_high, active_low) }
    }
}
