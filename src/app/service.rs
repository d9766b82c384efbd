//! Application service, the hexagonal core.
//!
//! [`AppService`] owns every piece of controller state: the cached level,
//! the empty-source detector, both relay drivers, the indicator intent and
//! the blinker. Hardware, clock and log are injected at call sites through
//! port traits, so independent controllers can run side by side against
//! fakes.
//!
//! ```text
//!  LevelSensor ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                  │          AppService          │
//! ActuatorPort ◀── │ level · timer · policy · LED │
//!                  └──────────────────────────────┘
//! ```

use log::info;

use crate::config::ControllerConfig;
use crate::control::empty_source::{EmptySourceDetector, EmptySourceTimer};
use crate::control::policy::{self, Decision};
use crate::drivers::indicator::{BlinkState, Blinker};
use crate::drivers::relay::{HeaterDriver, PumpDriver, PumpState};
use crate::sensors::water_level::WaterLevelState;
use crate::time::Millis;

use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, LevelSensor, SchedulerDelegate};

/// Point-in-time view of the controller, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerStatus {
    pub water: WaterLevelState,
    pub pump: PumpState,
    pub heater_on: bool,
    pub timer: EmptySourceTimer,
    pub empty_detected: bool,
    pub indicator_should_blink: bool,
    pub blink: BlinkState,
    pub scan_count: u64,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: ControllerConfig,
    /// Level seen by the most recent scan (seeded by [`start`](Self::start)).
    water: WaterLevelState,
    detector: EmptySourceDetector,
    pump: PumpDriver,
    heater: HeaterDriver,
    /// Recomputed every scan, consumed every pass.
    indicator_should_blink: bool,
    blinker: Blinker,
    scan_count: u64,
}

impl AppService {
    /// Construct the service from configuration. All outputs are
    /// considered off and no alert is latched.
    ///
    /// Does **not** touch hardware; call [`start`](Self::start) next.
    pub fn new(config: ControllerConfig) -> Self {
        let detector = EmptySourceDetector::new(config.empty_threshold_ms);
        let blinker = Blinker::new(config.blink_interval_ms);
        Self {
            config,
            water: WaterLevelState::default(),
            detector,
            pump: PumpDriver::new(),
            heater: HeaterDriver::new(),
            indicator_should_blink: false,
            blinker,
            scan_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive every output to OFF and take the first level reading, so the
    /// first scan only logs a level change if one really happened.
    pub fn start(
        &mut self,
        hw: &mut (impl LevelSensor + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        self.heater.force_off(hw);
        self.blinker.force_off(hw);
        self.pump.force_off(hw);

        self.water = self.read_water(hw);
        sink.emit(&AppEvent::Started { water_ok: self.water.ok });
        info!(
            "AppService started (water {}, threshold {} ms)",
            if self.water.ok { "OK" } else { "LOW" },
            self.config.empty_threshold_ms
        );
    }

    // ── Per-scan orchestration ────────────────────────────────

    /// Run one full scan: read level → empty-source timer → policy → relays.
    ///
    /// The `hw` parameter satisfies **both** [`LevelSensor`] and
    /// [`ActuatorPort`], which avoids a double mutable borrow while
    /// keeping the port boundary explicit.
    pub fn scan(
        &mut self,
        now: Millis,
        hw: &mut (impl LevelSensor + ActuatorPort),
        sink: &mut impl EventSink,
    ) -> Decision {
        self.scan_count += 1;

        // 1. One level reading, shared by everything below.
        let water = self.read_water(hw);
        if water != self.water {
            sink.emit(&AppEvent::WaterLevelChanged { ok: water.ok });
        }
        self.water = water;

        // 2. Empty-source timer, against the pump state left by the last scan.
        let empty = self
            .detector
            .update(self.pump.is_running(), water.ok, now, sink);

        // 3. Policy.
        let decision = policy::decide(water.ok, empty);

        // 4. Outputs. Switch-offs go out before switch-ons, so pump and
        //    heater are never energised together, not even between writes.
        if decision.pump {
            self.heater.set(decision.heater, hw, sink);
            self.pump.set(decision.pump, now, hw, sink);
        } else {
            self.pump.set(decision.pump, now, hw, sink);
            self.heater.set(decision.heater, hw, sink);
        }
        self.indicator_should_blink = decision.indicator_should_blink;

        decision
    }

    /// Advance the indicator blinker. Call on every loop pass.
    pub fn update_indicator(&mut self, now: Millis, hw: &mut impl ActuatorPort) {
        self.blinker.update(self.indicator_should_blink, now, hw);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn status(&self) -> ControllerStatus {
        ControllerStatus {
            water: self.water,
            pump: self.pump.state(),
            heater_on: self.heater.is_on(),
            timer: self.detector.timer(),
            empty_detected: self.detector.detected(),
            indicator_should_blink: self.indicator_should_blink,
            blink: self.blinker.state(),
            scan_count: self.scan_count,
        }
    }

    pub fn water_ok(&self) -> bool {
        self.water.ok
    }

    pub fn pump_on(&self) -> bool {
        self.pump.is_running()
    }

    pub fn heater_on(&self) -> bool {
        self.heater.is_on()
    }

    pub fn empty_detected(&self) -> bool {
        self.detector.detected()
    }

    pub fn indicator_should_blink(&self) -> bool {
        self.indicator_should_blink
    }

    /// Total scans executed since construction.
    pub fn scan_count(&self) -> u64 {
        self.scan_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn read_water(&self, hw: &mut impl LevelSensor) -> WaterLevelState {
        WaterLevelState::from_raw(hw.read_level(), self.config.sensor_active_low)
    }
}

// ───────────────────────────────────────────────────────────────
// Scheduler binding
// ───────────────────────────────────────────────────────────────

/// Binds a service to its hardware and log for one scheduler pass.
pub struct ServiceDelegate<'a, H, S> {
    pub app: &'a mut AppService,
    pub hw: &'a mut H,
    pub sink: &'a mut S,
}

impl<'a, H, S> ServiceDelegate<'a, H, S> {
    pub fn new(app: &'a mut AppService, hw: &'a mut H, sink: &'a mut S) -> Self {
        Self { app, hw, sink }
    }
}

impl<H, S> SchedulerDelegate for ServiceDelegate<'_, H, S>
where
    H: LevelSensor + ActuatorPort,
    S: EventSink,
{
    fn on_scan(&mut self, now: Millis) {
        self.app.scan(now, &mut *self.hw, &mut *self.sink);
    }

    fn on_pass(&mut self, now: Millis) {
        self.app.update_indicator(now, &mut *self.hw);
    }
}
