//! Outbound application events.
//!
//! The controller emits these through the
//! [`EventSink`](super::ports::EventSink) port whenever something changes
//! state. Adapters on the other side decide what to do with them; the
//! firmware writes them to the serial log.

/// Transition events emitted by the controller core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The controller has started (carries the first level reading).
    Started { water_ok: bool },

    /// Interpreted tank level differs from the previous scan.
    WaterLevelChanged { ok: bool },

    /// Pump relay transitioned.
    PumpChanged { on: bool },

    /// Heater relay transitioned.
    HeaterChanged { on: bool },

    /// Pump is running with a low tank: the empty-source timer armed.
    EmptyTimerStarted,

    /// Water reached OK while the empty-source timer was armed.
    EmptyTimerReset,

    /// The pump ran for the full threshold without filling the tank.
    EmptySourceDetected,

    /// A previous empty-source alert was cleared by an OK level reading.
    EmptySourceCleared,
}
