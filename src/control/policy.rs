//! Pump / heater / indicator decision.
//!
//! A pure function of two booleans, evaluated top-down, first match wins:
//!
//! | Empty source | Water OK | Pump | Heater | Indicator |
//! |--------------|----------|------|--------|-----------|
//! | yes          | any      | off  | off    | blink     |
//! | no           | yes      | off  | on     | off       |
//! | no           | no       | on   | off    | off       |
//!
//! The heater is enabled as soon as the tank reads OK, with no settling time
//! after the pump stops.

/// Which row of the decision table produced a [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Source declared empty: stop everything, alert the operator.
    SourceEmpty,
    /// Tank full: heat, don't pump.
    TankFull,
    /// Tank low, source still has water: fill, never heat.
    Filling,
}

/// Target output states for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub pump: bool,
    pub heater: bool,
    pub indicator_should_blink: bool,
    pub branch: Branch,
}

/// Decide the output states for this scan.
pub const fn decide(water_ok: bool, empty_detected: bool) -> Decision {
    if empty_detected {
        Decision {
            pump: false,
            heater: false,
            indicator_should_blink: true,
            branch: Branch::SourceEmpty,
        }
    } else if water_ok {
        Decision {
            pump: false,
            heater: true,
            indicator_should_blink: false,
            branch: Branch::TankFull,
        }
    } else {
        Decision {
            pump: true,
            heater: false,
            indicator_should_blink: false,
            branch: Branch::Filling,
        }
    }
}
