//! Controller configuration parameters
//!
//! All tunable parameters for the dispenser. Fixed at boot: the firmware
//! builds a [`ControllerConfig`], validates it once, and hands it to the
//! controller. There is no runtime reconfiguration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Electrical level that means "on" for relays and LEDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputPolarity {
    /// ON_STATE = HIGH, OFF_STATE = LOW.
    ActiveHigh,
    /// ON_STATE = LOW, OFF_STATE = HIGH (typical for opto-isolated relay boards).
    ActiveLow,
}

impl OutputPolarity {
    /// Electrical level (`true` = HIGH) for a logical on/off request.
    pub const fn level_for(self, on: bool) -> bool {
        match self {
            Self::ActiveHigh => on,
            Self::ActiveLow => !on,
        }
    }
}

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Level sensor ---
    /// `true`: water is OK when the sensor line reads LOW (float switch to GND).
    /// `false`: water is OK when the line reads HIGH.
    pub sensor_active_low: bool,

    // --- Timing ---
    /// Control scan cadence (milliseconds)
    pub scan_interval_ms: u32,
    /// Empty-source indicator flash interval (milliseconds)
    pub blink_interval_ms: u32,
    /// Sustained pump-on/water-low duration before the source is declared empty (milliseconds)
    pub empty_threshold_ms: u32,

    // --- Outputs ---
    /// ON_STATE / OFF_STATE mapping shared by both relays and the LEDs
    pub output_polarity: OutputPolarity,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            sensor_active_low: true,

            scan_interval_ms: 100,      // 10 Hz
            blink_interval_ms: 500,     // 1 Hz flash
            empty_threshold_ms: 300_000, // 5 min

            output_polarity: OutputPolarity::ActiveHigh,
        }
    }
}

impl ControllerConfig {
    /// Range-check every field. Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<()> {
        if self.scan_interval_ms == 0 {
            return Err(Error::Config("scan_interval_ms must be > 0"));
        }
        if self.blink_interval_ms == 0 {
            return Err(Error::Config("blink_interval_ms must be > 0"));
        }
        if self.empty_threshold_ms <= self.scan_interval_ms {
            return Err(Error::Config(
                "empty_threshold_ms must be greater than scan_interval_ms",
            ));
        }
        // Elapsed time is computed modulo 2^32; a threshold in the top half of
        // the range could never be told apart from a wrapped counter.
        if self.empty_threshold_ms > u32::MAX / 2 {
            return Err(Error::Config("empty_threshold_ms must be < 2^31 ms"));
        }
        Ok(())
    }

    /// Builder-style override for the scan interval.
    pub fn with_scan_interval_ms(mut self, ms: u32) -> Self {
        self.scan_interval_ms = ms;
        self
    }

    /// Builder-style override for the blink interval.
    pub fn with_blink_interval_ms(mut self, ms: u32) -> Self {
        self.blink_interval_ms = ms;
        self
    }

    /// Builder-style override for the empty-source threshold.
    pub fn with_empty_threshold_ms(mut self, ms: u32) -> Self {
        self.empty_threshold_ms = ms;
        self
    }

    /// Builder-style override for the sensor polarity.
    pub fn with_sensor_active_low(mut self, active_low: bool) -> Self {
        self.sensor_active_low = active_low;
        self
    }
}
