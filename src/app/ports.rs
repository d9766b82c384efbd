//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (level sensor, relays, LEDs, clock, diagnostic log)
//! implement these traits. The [`AppService`](super::service::AppService)
//! consumes them via generics, so the control loop never touches GPIO
//! directly and can be driven by fakes in tests.

use crate::time::Millis;

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock. Wraps at 2^32.
pub trait Clock {
    fn now(&self) -> Millis;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port for the tank level switch.
pub trait LevelSensor {
    /// Raw electrical level of the sensor line: `true` = HIGH.
    ///
    /// Polarity is interpreted by the domain
    /// ([`interpret`](crate::sensors::water_level::interpret)), not here.
    fn read_level(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Digital outputs the controller can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Output {
    /// Transfer pump relay (source → tank).
    Pump,
    /// Heater relay.
    Heater,
    /// Water-empty indicator (external LED plus the on-board LED).
    Indicator,
}

/// Write-side port: the domain calls this to command outputs.
///
/// `on` is the logical state. Adapters translate it to the configured
/// ON_STATE / OFF_STATE level. Writes are fire-and-forget.
pub trait ActuatorPort {
    fn write(&mut self, output: Output, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → diagnostic log)
// ───────────────────────────────────────────────────────────────

/// The domain emits transition [`AppEvent`](super::events::AppEvent)s
/// through this port. Purely observational: nothing reads them back.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Scheduler delegate (decouples scheduler from the controller)
// ───────────────────────────────────────────────────────────────

/// Callbacks the [`Scheduler`](crate::scheduler::Scheduler) invokes on
/// each pass of the main loop.
pub trait SchedulerDelegate {
    /// A scan is due: run one full sensor → timer → policy → actuate cycle.
    fn on_scan(&mut self, now: Millis);

    /// Runs on every pass, after `on_scan` when both fire.
    fn on_pass(&mut self, now: Millis);
}
